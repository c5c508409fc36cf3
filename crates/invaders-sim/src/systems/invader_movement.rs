//! Invader movement system.
//!
//! Advances every moving invader through the sweep FSM and pushes the new
//! pose to the scene. Reads `does_move`; never touches the round counters.

use glam::Quat;

use invaders_core::components::{Glyph, InvaderComponent};
use invaders_core::enums::MeshKind;
use invaders_core::types::{EntityId, Position};
use invaders_formation::sweep::{self, SweepContext};

use crate::registry::Registry;
use crate::scene::SceneGraph;

/// Advance all invaders by `delta` seconds. Returns how many moved.
pub fn run<S: SceneGraph + ?Sized>(
    registry: &mut Registry,
    scene: &mut S,
    paused: bool,
    max_speed: f32,
    delta: f32,
) -> u32 {
    if paused {
        return 0;
    }

    let mut moved = 0;
    for (_entity, (id, pos, invader)) in registry
        .world_mut()
        .query_mut::<(&EntityId, &mut Position, &mut InvaderComponent)>()
    {
        if !invader.does_move {
            continue;
        }

        let update = sweep::evaluate(&SweepContext {
            state: invader.move_state,
            position: pos.0.truncate(),
            limits: invader.limits,
            speed: invader.speed,
            max_speed,
            delta,
        });

        if update.state_changed {
            log::trace!(
                "Invader {id} {:?} -> {:?} at speed {:.3}",
                invader.move_state,
                update.new_state,
                update.new_speed
            );
        }

        invader.move_state = update.new_state;
        invader.limits = update.new_limits;
        invader.speed = update.new_speed;
        pos.0 = update.new_position.extend(pos.0.z);
        scene.set_pose(*id, pos.0, Quat::IDENTITY);
        moved += 1;
    }
    moved
}

/// Set `does_move` on every invader and swap its mesh to match:
/// the numbered glyph while moving, the frozen variant otherwise.
pub fn set_all_moving<S: SceneGraph + ?Sized>(registry: &mut Registry, scene: &mut S, moving: bool) {
    for (_entity, (id, invader, glyph)) in registry
        .world_mut()
        .query_mut::<(&EntityId, &mut InvaderComponent, &Glyph)>()
    {
        invader.does_move = moving;
        let mesh = if moving {
            MeshKind::Glyph { glyph: glyph.0 }
        } else {
            MeshKind::Frozen
        };
        scene.set_visual(*id, mesh);
    }
}
