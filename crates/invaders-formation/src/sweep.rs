//! Invader sweep finite state machine.
//!
//! Each invader cycles through four states: sweep right, drop, sweep left,
//! drop. Boundary crossings are detected by comparing positions against the
//! invader's own limits, so the pattern does not depend on frame timing.

use glam::Vec2;

use invaders_core::constants::{DROP_STEP, INVADER_SPEED_INCREMENT};
use invaders_core::enums::SweepState;

/// Unit direction of travel for each sweep state, indexed by `SweepState::index`.
pub const MOVE_VECTORS: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, -1.0),
];

/// Input to the sweep FSM for a single invader.
pub struct SweepContext {
    pub state: SweepState,
    /// Invader position in the formation plane (x lateral, y height).
    pub position: Vec2,
    pub limits: [Vec2; 4],
    pub speed: f32,
    /// Ceiling the speed ramp is clamped to.
    pub max_speed: f32,
    /// Seconds elapsed since the previous tick.
    pub delta: f32,
}

/// Output from the sweep FSM.
pub struct SweepUpdate {
    pub new_state: SweepState,
    pub new_position: Vec2,
    pub new_limits: [Vec2; 4],
    pub new_speed: f32,
    pub state_changed: bool,
}

/// Evaluate the FSM for one invader for one tick.
pub fn evaluate(ctx: &SweepContext) -> SweepUpdate {
    let limit = ctx.limits[ctx.state.index()];
    let step = ctx.speed * ctx.delta;

    match ctx.state {
        SweepState::SweepRight if limit.x > 0.0 && ctx.position.x > limit.x => {
            turn_at(ctx, limit.x - step)
        }
        SweepState::SweepLeft if limit.x < 0.0 && ctx.position.x < limit.x => {
            turn_at(ctx, limit.x + step)
        }
        state if state.is_drop() && ctx.position.y < limit.y => complete_drop(ctx),
        _ => integrate(ctx),
    }
}

/// Snap back inside the lateral boundary and start dropping.
fn turn_at(ctx: &SweepContext, x: f32) -> SweepUpdate {
    SweepUpdate {
        new_state: ctx.state.next(),
        new_position: Vec2::new(x, ctx.position.y),
        new_limits: ctx.limits,
        new_speed: ctx.speed,
        state_changed: true,
    }
}

/// Finish a drop: lower both drop bounds for the next sweep and speed up.
fn complete_drop(ctx: &SweepContext) -> SweepUpdate {
    let mut limits = ctx.limits;
    limits[SweepState::DropRight.index()].y -= DROP_STEP;
    limits[SweepState::DropLeft.index()].y -= DROP_STEP;

    SweepUpdate {
        new_state: ctx.state.next(),
        new_position: ctx.position,
        new_limits: limits,
        new_speed: (ctx.speed + INVADER_SPEED_INCREMENT).min(ctx.max_speed),
        state_changed: true,
    }
}

/// Continuous motion along the current state's direction.
fn integrate(ctx: &SweepContext) -> SweepUpdate {
    let direction = MOVE_VECTORS[ctx.state.index()];
    SweepUpdate {
        new_state: ctx.state,
        new_position: ctx.position + direction * ctx.speed * ctx.delta,
        new_limits: ctx.limits,
        new_speed: ctx.speed,
        state_changed: false,
    }
}
