//! Snapshot builder: collects the visible round state after a tick.

use glam::Vec3;

use invaders_core::components::{Bullet, InvaderComponent};
use invaders_core::events::GameEvent;
use invaders_core::state::{BulletView, InvaderView, RoundSnapshot};
use invaders_core::types::{EntityId, Position, SimTime};

use crate::registry::Registry;
use crate::round::RoundState;

/// Build the snapshot. Invaders and bullets are ordered by id.
pub fn build_snapshot(
    registry: &Registry,
    round: &RoundState,
    time: &SimTime,
    player: Vec3,
    events: Vec<GameEvent>,
) -> RoundSnapshot {
    let world = registry.world();

    let mut invaders: Vec<InvaderView> = world
        .query::<(&EntityId, &Position, &InvaderComponent)>()
        .iter()
        .map(|(_entity, (id, pos, invader))| InvaderView {
            id: *id,
            position: pos.0,
            move_state: invader.move_state,
            speed: invader.speed,
            does_move: invader.does_move,
        })
        .collect();
    invaders.sort_by_key(|view| view.id);

    let mut bullets: Vec<BulletView> = world
        .query::<(&EntityId, &Position, &Bullet)>()
        .iter()
        .map(|(_entity, (id, pos, _bullet))| BulletView {
            id: *id,
            position: pos.0,
        })
        .collect();
    bullets.sort_by_key(|view| view.id);

    RoundSnapshot {
        time: *time,
        phase: round.phase,
        live_invaders: round.live_invader_count,
        lost: round.lost,
        paused: round.paused,
        player,
        invaders,
        bullets,
        stats: round.stats.view(time.elapsed_secs),
        events,
    }
}
