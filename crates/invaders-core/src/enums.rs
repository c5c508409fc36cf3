//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of the current round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entities are being (re)built; no round in progress.
    #[default]
    Setup,
    /// Invaders are sweeping and the player may fire.
    Running,
    /// Invaders are frozen by request; bullets in flight keep moving.
    Paused,
    /// An invader reached the loss trigger. Terminal until restart.
    Lost,
    /// Every invader was destroyed. Terminal until restart.
    Won,
}

impl GamePhase {
    /// Whether the round has ended and only a restart can leave this phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Lost | GamePhase::Won)
    }
}

/// The four states of the invader sweep cycle.
///
/// Encoding the state as an enum keeps every value a valid index into the
/// invader's four boundary pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepState {
    /// Moving toward +x.
    #[default]
    SweepRight,
    /// Dropping after reaching the right boundary.
    DropRight,
    /// Moving toward -x.
    SweepLeft,
    /// Dropping after reaching the left boundary.
    DropLeft,
}

impl SweepState {
    /// All states in cycle order.
    pub const ALL: [SweepState; 4] = [
        SweepState::SweepRight,
        SweepState::DropRight,
        SweepState::SweepLeft,
        SweepState::DropLeft,
    ];

    /// Position of this state in the cycle, `0..4`.
    pub fn index(self) -> usize {
        match self {
            SweepState::SweepRight => 0,
            SweepState::DropRight => 1,
            SweepState::SweepLeft => 2,
            SweepState::DropLeft => 3,
        }
    }

    /// The state that follows this one, wrapping around after `DropLeft`.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Whether this is one of the two vertical drop states.
    pub fn is_drop(self) -> bool {
        matches!(self, SweepState::DropRight | SweepState::DropLeft)
    }
}

/// Role of an entity in the collision model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRole {
    Bullet,
    Invader,
    LossTrigger,
    BulletSponge,
}

/// What the scene should build when asked to spawn an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualKind {
    /// An invader showing a numbered glyph.
    Invader { glyph: u32 },
    Bullet,
    LossTrigger,
    BulletSponge,
}

/// Mesh/material swaps requested on an existing entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshKind {
    /// The live invader glyph.
    Glyph { glyph: u32 },
    /// Greyed-out invader after the round was lost.
    Frozen,
}
