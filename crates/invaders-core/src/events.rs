//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new round finished spawning.
    RoundStarted { round: u32, invaders: u32 },
    /// A bullet left the ship.
    BulletFired { bullet: EntityId },
    /// A bullet destroyed an invader.
    InvaderHit {
        bullet: EntityId,
        invader: EntityId,
        remaining: u32,
    },
    /// The sponge swallowed a bullet that missed everything.
    BulletReclaimed { bullet: EntityId },
    /// An invader reached the loss trigger.
    RoundLost { invader: EntityId },
    /// The last invader was destroyed.
    RoundWon { round: u32 },
    Paused,
    Resumed,
}
