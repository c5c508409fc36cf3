//! Kinematic integration for bullets.
//!
//! Bullets fly at constant velocity and are not affected by pause.

use glam::Quat;

use invaders_core::components::Bullet;
use invaders_core::types::{EntityId, Position, Velocity};

use crate::registry::Registry;
use crate::scene::SceneGraph;

/// position += velocity * dt for every bullet.
pub fn run<S: SceneGraph + ?Sized>(registry: &mut Registry, scene: &mut S, delta: f32) {
    for (_entity, (id, pos, vel, _bullet)) in registry
        .world_mut()
        .query_mut::<(&EntityId, &mut Position, &Velocity, &Bullet)>()
    {
        pos.0 += vel.0 * delta;
        scene.set_pose(*id, pos.0, Quat::IDENTITY);
    }
}
