//! Round state: the per-round counters and flags owned by the engine.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities. Rebuilt wholesale by
//! the restart protocol.

use invaders_core::enums::GamePhase;
use invaders_core::state::StatsView;

/// Counters and flags for the round in progress.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    pub phase: GamePhase,
    /// Invaders not yet destroyed. Only the collision router decrements it.
    pub live_invader_count: u32,
    pub paused: bool,
    /// Set by the first loss-trigger event of the round.
    pub lost: bool,
    /// Set when the win has been signalled, so it is signalled once.
    pub won: bool,
    pub stats: RoundStats,
}

/// Running statistics for the round.
#[derive(Debug, Clone, Default)]
pub struct RoundStats {
    /// 1-based round number, assigned when the round finishes spawning.
    pub round: u32,
    pub shots_fired: u32,
    pub invaders_destroyed: u32,
    pub bullets_reclaimed: u32,
}

impl RoundStats {
    pub fn view(&self, elapsed_secs: f64) -> StatsView {
        StatsView {
            round: self.round,
            shots_fired: self.shots_fired,
            invaders_destroyed: self.invaders_destroyed,
            bullets_reclaimed: self.bullets_reclaimed,
            elapsed_secs,
        }
    }
}
