//! Core types and definitions for the AR Invaders simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, collision groups, configuration, state snapshots,
//! events, and constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod groups;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
