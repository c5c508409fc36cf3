//! Cleanup system: reclaims bullets that left the play volume.

use invaders_core::components::Bullet;
use invaders_core::constants::PLAY_VOLUME_HALF_EXTENT;
use invaders_core::types::{EntityId, Position};

use crate::registry::Registry;
use crate::scene::SceneGraph;

/// Detach bullets outside the play volume. Detaches are collected first and
/// applied after the query so no query observes a half-removed entity.
/// Returns how many bullets were removed.
pub fn run<S: SceneGraph + ?Sized>(
    registry: &mut Registry,
    scene: &mut S,
    despawn_buffer: &mut Vec<EntityId>,
) -> usize {
    despawn_buffer.clear();

    {
        let mut query = registry.world().query::<(&EntityId, &Position, &Bullet)>();
        for (_entity, (id, pos, _bullet)) in query.iter() {
            if pos.0.abs().max_element() > PLAY_VOLUME_HALF_EXTENT {
                despawn_buffer.push(*id);
            }
        }
    }

    let mut removed = 0;
    for id in despawn_buffer.drain(..) {
        if registry.detach(scene, id) {
            removed += 1;
        }
    }
    removed
}
