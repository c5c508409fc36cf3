//! Error types for the simulation engine.

use thiserror::Error;

use invaders_core::config::ConfigError;
use invaders_core::enums::VisualKind;

/// Failures reported by the scene collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("scene refused to spawn {kind:?}")]
    Refused { kind: VisualKind },
    #[error("scene is full ({capacity} entities)")]
    CapacityExhausted { capacity: usize },
}

/// Fatal engine errors. A round cannot start when one of these occurs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("spawn protocol failed: {0}")]
    Spawn(#[from] SceneError),
}
