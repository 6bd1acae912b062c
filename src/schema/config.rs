//! Configuration types for the Game of Life application.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// File extension conventionally used by pattern files.
pub const PATTERN_FILE_EXTENSION: &str = "life";

fn default_origin_row() -> usize {
    20
}

fn default_origin_column() -> usize {
    40
}

fn default_generations_per_second() -> u32 {
    1
}

/// Top-level simulation configuration.
///
/// Defaults match the original application: a 60x180 grid (1:3 aspect
/// ratio), patterns placed at origin (20, 40), one generation per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub columns: usize,
    /// Row where loaded patterns are anchored.
    #[serde(default = "default_origin_row")]
    pub origin_row: usize,
    /// Column where loaded patterns are anchored.
    #[serde(default = "default_origin_column")]
    pub origin_column: usize,
    /// Initial tick rate.
    #[serde(default = "default_generations_per_second")]
    pub generations_per_second: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 60,
            columns: 180,
            origin_row: default_origin_row(),
            origin_column: default_origin_column(),
            generations_per_second: default_generations_per_second(),
        }
    }
}

impl SimConfig {
    /// Total cell count (rows * columns).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows * self.columns
    }

    /// Tick interval derived from the configured rate: 1000/g milliseconds.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.generations_per_second.max(1)))
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.generations_per_second == 0 {
            return Err(ConfigError::InvalidSpeed);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, columns) must be non-zero")]
    InvalidDimensions,
    #[error("Generations per second must be non-zero")]
    InvalidSpeed,
}
