//! ECS systems that operate on the registry each tick.
//!
//! Systems are plain functions over the registry and the collaborators
//! they need. They do not own state; all state lives in components or in
//! the engine's `RoundState`.

pub mod cleanup;
pub mod collision_router;
pub mod invader_movement;
pub mod projectile;
pub mod snapshot;
