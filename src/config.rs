//! Game configuration
//!
//! Built-in defaults, optionally overridden by a JSON file and then by
//! command line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default constants
pub mod defaults {
    pub const ROWS: usize = 6;
    pub const COLUMNS: usize = 10;
    pub const BLOCK_WIDTH: f32 = 50.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_MARGIN: f32 = 2.0;
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const BALL_SIZE: f32 = 20.0;
    /// Downward speed given to the ball on start (units per tick)
    pub const LAUNCH_SPEED: f32 = 8.0;
    /// Paddle bounces add a uniform value from [-SPIN, SPIN] to the x velocity
    pub const SPIN: f32 = 2.0;
    pub const TICK_MS: u64 = 16;
    pub const RENDER_MS: u64 = 8;
}

/// Open space between the block grid and the bottom of the playfield
pub const OPEN_AREA_HEIGHT: f32 = 400.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub block_width: f32,
    pub block_height: f32,
    pub block_margin: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
    pub launch_speed: f32,
    pub spin: f32,
    pub tick_ms: u64,
    pub render_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: defaults::ROWS,
            columns: defaults::COLUMNS,
            block_width: defaults::BLOCK_WIDTH,
            block_height: defaults::BLOCK_HEIGHT,
            block_margin: defaults::BLOCK_MARGIN,
            paddle_width: defaults::PADDLE_WIDTH,
            paddle_height: defaults::PADDLE_HEIGHT,
            ball_size: defaults::BALL_SIZE,
            launch_speed: defaults::LAUNCH_SPEED,
            spin: defaults::SPIN,
            tick_ms: defaults::TICK_MS,
            render_ms: defaults::RENDER_MS,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::Invalid(format!(
                "block grid must have at least one row and column, got {}x{}",
                self.rows, self.columns
            )));
        }
        let sizes = [
            ("block_width", self.block_width),
            ("block_height", self.block_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        let non_negative = [
            ("block_margin", self.block_margin),
            ("launch_speed", self.launch_speed),
            ("spin", self.spin),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")));
            }
        }
        if self.tick_ms == 0 || self.render_ms == 0 {
            return Err(ConfigError::Invalid("tick and render periods must be non-zero".into()));
        }
        Ok(())
    }

    /// Width of one grid cell: a block plus its margin on both sides
    pub fn cell_width(&self) -> f32 {
        2.0 * self.block_margin + self.block_width
    }

    pub fn cell_height(&self) -> f32 {
        2.0 * self.block_margin + self.block_height
    }

    pub fn screen_width(&self) -> f32 {
        self.columns as f32 * self.cell_width()
    }

    pub fn screen_height(&self) -> f32 {
        OPEN_AREA_HEIGHT + self.rows as f32 * self.cell_height()
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn render_period(&self) -> Duration {
        Duration::from_millis(self.render_ms)
    }
}
