//! Headless invaders runner.
//!
//! This crate wires the simulation engine to an in-process scene, a
//! broad-phase contact detector and an optional autopilot, and drives the
//! result from a game loop thread.

pub mod autopilot;
pub mod broad_phase;
pub mod config;
pub mod game_loop;
pub mod session;
pub mod state;

pub use invaders_core as core;
