//! Entity spawn factories for setting up a round.
//!
//! Every entity is created through the scene collaborator, stamped with its
//! collision filter, and then registered with the appropriate component
//! bundle.

use glam::Vec3;
use hecs::DynamicBundle;

use invaders_core::components::{Bullet, Glyph, InvaderComponent};
use invaders_core::config::GameConfig;
use invaders_core::constants::*;
use invaders_core::enums::{EntityRole, SweepState, VisualKind};
use invaders_core::groups::CollisionFilter;
use invaders_core::types::{EntityId, Velocity};
use invaders_formation::layout::{formation, generate_limits, initial_speed};

use crate::error::SceneError;
use crate::registry::Registry;
use crate::scene::SceneGraph;

/// Create a scene entity, stamp its collision filter and register it.
pub fn spawn_entity<S: SceneGraph + ?Sized>(
    registry: &mut Registry,
    scene: &mut S,
    role: EntityRole,
    visual: VisualKind,
    position: Vec3,
    components: impl DynamicBundle,
) -> Result<EntityId, SceneError> {
    let id = scene.spawn_entity(position, visual)?;
    scene.set_collision_filter(id, CollisionFilter::for_role(role));
    registry.attach(id, role, position, components);
    Ok(id)
}

/// Spawn the loss trigger above the ship and the bullet sponge above the formation.
pub fn spawn_zones<S: SceneGraph + ?Sized>(
    registry: &mut Registry,
    scene: &mut S,
) -> Result<(), SceneError> {
    spawn_entity(
        registry,
        scene,
        EntityRole::LossTrigger,
        VisualKind::LossTrigger,
        Vec3::new(0.0, LOSS_TRIGGER_HEIGHT, 0.0),
        (),
    )?;
    spawn_entity(
        registry,
        scene,
        EntityRole::BulletSponge,
        VisualKind::BulletSponge,
        Vec3::new(0.0, BULLET_SPONGE_HEIGHT, 0.0),
        (),
    )?;
    Ok(())
}

/// Spawn the rows × columns invader grid. Returns the number spawned.
///
/// Stops at the first refusal; the caller owns tearing down the partial grid.
pub fn spawn_formation<S: SceneGraph + ?Sized>(
    registry: &mut Registry,
    scene: &mut S,
    config: &GameConfig,
) -> Result<u32, SceneError> {
    let speed = initial_speed(config.max_speed);
    let mut spawned = 0;

    for slot in formation(config.rows, config.columns) {
        let invader = InvaderComponent {
            limits: generate_limits(slot.position),
            move_state: SweepState::default(),
            does_move: true,
            speed,
        };
        spawn_entity(
            registry,
            scene,
            EntityRole::Invader,
            VisualKind::Invader { glyph: slot.glyph },
            slot.position.extend(0.0),
            (invader, Glyph(slot.glyph)),
        )?;
        spawned += 1;
    }

    Ok(spawned)
}

/// Spawn a bullet at `origin` travelling up toward the formation.
pub fn spawn_bullet<S: SceneGraph + ?Sized>(
    registry: &mut Registry,
    scene: &mut S,
    origin: Vec3,
) -> Result<EntityId, SceneError> {
    spawn_entity(
        registry,
        scene,
        EntityRole::Bullet,
        VisualKind::Bullet,
        origin,
        (Bullet, Velocity(Vec3::Y * BULLET_SPEED)),
    )
}

/// Detach every entity with one of `roles`. Returns how many were removed.
pub fn clear_roles<S: SceneGraph + ?Sized>(
    registry: &mut Registry,
    scene: &mut S,
    roles: &[EntityRole],
) -> usize {
    let doomed: Vec<EntityId> = roles
        .iter()
        .flat_map(|role| registry.ids_with_role(*role))
        .collect();

    let mut removed = 0;
    for id in doomed {
        if registry.detach(scene, id) {
            removed += 1;
        }
    }
    removed
}

/// Detach every invader and bullet. Zones are kept.
pub fn clear_round<S: SceneGraph + ?Sized>(registry: &mut Registry, scene: &mut S) -> usize {
    clear_roles(registry, scene, &[EntityRole::Invader, EntityRole::Bullet])
}
