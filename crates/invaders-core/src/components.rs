//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::SweepState;

/// Sweep state of a single invader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvaderComponent {
    /// One (x, y) boundary pair per sweep state, indexed by `SweepState::index`.
    /// Sweep states use x; drop states use y, lowered after every drop.
    pub limits: [Vec2; 4],
    /// Current state of the sweep cycle.
    pub move_state: SweepState,
    /// When false the invader is frozen in place.
    pub does_move: bool,
    /// Current travel speed (m/s).
    pub speed: f32,
}

/// Number shown on an invader's glyph mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph(pub u32);

/// Marks an entity as a player bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet;
