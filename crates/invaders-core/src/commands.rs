//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameCommand {
    /// Fire a bullet from the ship's current position.
    Fire,
    /// Move the ship (the AR camera) to a new position.
    MovePlayer { x: f32, y: f32, z: f32 },
    /// Freeze the invaders.
    Pause,
    /// Unfreeze the invaders unless the round was lost.
    Resume,
    /// Tear the round down and spawn a fresh one.
    Restart,
    /// Store new settings for the next restart.
    Configure { config: GameConfig },
}
