//! Engine configuration.

use crate::{
    BoardError, DEFAULT_BINGO_BONUS, DEFAULT_BINGO_TILES, DEFAULT_REACH, Grid, ModifierLayout,
    STANDARD_DIMENSION, ScoringRules,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board size, rack size, scoring knobs and premium layout.
///
/// Every key is optional in TOML; missing keys take the standard values.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length of the board (odd).
    dimension: usize,

    /// Tiles a player holds.
    rack_size: usize,

    /// Points for using a full rack in one word.
    bingo_bonus: u32,

    /// Rack tiles that count as a full rack.
    bingo_tiles: usize,

    /// Premium squares relative to the center.
    layout: ModifierLayout,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dimension: STANDARD_DIMENSION,
            rack_size: DEFAULT_REACH,
            bingo_bonus: DEFAULT_BINGO_BONUS,
            bingo_tiles: DEFAULT_BINGO_TILES,
            layout: ModifierLayout::standard(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(dimension = config.dimension, rack_size = config.rack_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Builds an empty grid with this size and layout.
    pub fn grid(&self) -> Result<Grid, BoardError> {
        Grid::new(self.dimension, &self.layout)
    }

    /// Scoring knobs.
    pub fn scoring(&self) -> ScoringRules {
        ScoringRules {
            bingo_bonus: self.bingo_bonus,
            bingo_tiles: self.bingo_tiles,
        }
    }
}

/// Config file could not be read or parsed.
///
/// Records where in this crate the failure was raised.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// What went wrong, including the underlying I/O or TOML message.
    pub message: String,
    /// Line that raised the error.
    pub line: u32,
    /// File that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Captures `message` with the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message,
            line: location.line(),
            file: location.file(),
        }
    }
}
