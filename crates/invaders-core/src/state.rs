//! Round snapshot: the complete visible state handed to the shell each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{EntityId, SimTime};

/// Complete round state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub live_invaders: u32,
    pub lost: bool,
    pub paused: bool,
    pub player: Vec3,
    pub invaders: Vec<InvaderView>,
    pub bullets: Vec<BulletView>,
    pub stats: StatsView,
    pub events: Vec<GameEvent>,
}

/// A live invader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvaderView {
    pub id: EntityId,
    pub position: Vec3,
    pub move_state: SweepState,
    pub speed: f32,
    pub does_move: bool,
}

/// A bullet in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub id: EntityId,
    pub position: Vec3,
}

/// Running statistics for the current round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsView {
    pub round: u32,
    pub shots_fired: u32,
    pub invaders_destroyed: u32,
    pub bullets_reclaimed: u32,
    pub elapsed_secs: f64,
}
