//! Loading game settings from disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

use invaders_core::config::{ConfigError, GameConfig};

/// Errors surfaced by the runner.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop has shut down")]
    Disconnected,
    #[error("failed to spawn game loop thread: {0}")]
    Thread(std::io::Error),
    #[error("game loop thread panicked")]
    Panicked,
}

/// Parse settings from a JSON document. Missing fields take their defaults.
pub fn parse_config(json: &str) -> Result<GameConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Read settings from a JSON file and validate them.
pub fn load_config(path: &Path) -> Result<GameConfig, AppError> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    log::debug!("Loaded settings from {}", path.display());
    Ok(config)
}

/// Command-line overrides applied on top of loaded settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub max_speed: Option<f32>,
    pub rows: Option<u32>,
    pub columns: Option<u32>,
}

impl Overrides {
    pub fn apply(self, mut config: GameConfig) -> Result<GameConfig, ConfigError> {
        if let Some(max_speed) = self.max_speed {
            config.max_speed = max_speed;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        config.validate()?;
        Ok(config)
    }
}
