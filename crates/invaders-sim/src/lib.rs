//! Simulation engine for AR Invaders.
//!
//! Owns the hecs ECS world, runs the invader and bullet systems each tick,
//! routes collision notifications from the broad phase, and drives the round
//! lifecycle. Rendering, physics and UI are reached only through the
//! collaborator traits in [`scene`] and [`presenter`].

pub mod engine;
pub mod error;
pub mod presenter;
pub mod registry;
pub mod round;
pub mod scene;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use invaders_core as core;
