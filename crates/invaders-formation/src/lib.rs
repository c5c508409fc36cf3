//! Formation logic for AR Invaders.
//!
//! Implements the invader sweep state machine and the grid layout that
//! seeds each invader's boundaries. No ECS dependency, operates on plain data.

pub mod layout;
pub mod sweep;

pub use invaders_core as core;

#[cfg(test)]
mod tests;
