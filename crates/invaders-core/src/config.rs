//! Round configuration supplied by the settings UI.
//!
//! Values are read at spawn time. A round keeps the configuration it was
//! spawned with; changes apply at the next restart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Settings that shape a round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ceiling for invader speed (m/s). Speed ramps toward it on every drop.
    pub max_speed: f32,
    /// Number of invader rows.
    pub rows: u32,
    /// Number of invaders per row.
    pub columns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_speed: MAX_MAX_SPEED,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// Reasons a configuration cannot start a round.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max speed {0} is outside {min}..={max}", min = MIN_MAX_SPEED, max = MAX_MAX_SPEED)]
    MaxSpeedOutOfRange(f32),
    #[error("row count {0} is outside 1..={max}", max = MAX_ROWS)]
    RowsOutOfRange(u32),
    #[error("column count {0} is outside 1..={max}", max = MAX_COLUMNS)]
    ColumnsOutOfRange(u32),
    #[error("{columns} columns span wider than the sweep range")]
    FormationTooWide { columns: u32 },
}

impl GameConfig {
    /// Total invaders a round spawns with.
    pub fn invader_count(&self) -> u32 {
        self.rows * self.columns
    }

    /// Check every value against the accepted ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_MAX_SPEED..=MAX_MAX_SPEED).contains(&self.max_speed) {
            return Err(ConfigError::MaxSpeedOutOfRange(self.max_speed));
        }
        if !(1..=MAX_ROWS).contains(&self.rows) {
            return Err(ConfigError::RowsOutOfRange(self.rows));
        }
        if !(1..=MAX_COLUMNS).contains(&self.columns) {
            return Err(ConfigError::ColumnsOutOfRange(self.columns));
        }
        // Outermost invader must still have a positive right limit and a
        // negative left limit, or it would never turn around.
        let outermost = (self.columns as f32 - 1.0) / 2.0 * INVADER_SPACING;
        if outermost >= SWEEP_HALF_WIDTH {
            return Err(ConfigError::FormationTooWide {
                columns: self.columns,
            });
        }
        Ok(())
    }
}
