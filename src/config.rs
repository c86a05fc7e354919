//! TOML application configuration: board size, engine settings and weights

use std::path::Path;

use log::warn;

use crate::board::{DEFAULT_COLS, DEFAULT_ROWS, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};
use crate::engine::EngineConfig;
use crate::error::ConfigError;
use crate::eval::EvalWeights;

/// Deepest search the configuration accepts
pub const MAX_CONFIG_DEPTH: u8 = 12;

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub engine: EngineConfig,
    pub weights: EvalWeights,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in [{MIN_ROWS}, {MAX_ROWS}]"
            )));
        }
        if !(MIN_COLS..=MAX_COLS).contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in [{MIN_COLS}, {MAX_COLS}]"
            )));
        }
        if self.engine.depth == 0 || self.engine.depth > MAX_CONFIG_DEPTH {
            return Err(ConfigError::Validation(format!(
                "engine.depth must be in [1, {MAX_CONFIG_DEPTH}]"
            )));
        }
        if self.engine.max_nodes == Some(0) {
            return Err(ConfigError::Validation(
                "engine.max_nodes must be > 0".into(),
            ));
        }
        if self.engine.time_limit_ms == Some(0) {
            return Err(ConfigError::Validation(
                "engine.time_limit_ms must be > 0".into(),
            ));
        }
        if self.weights.win_score <= 0 || self.weights.win_score > EvalWeights::MAX_WIN_SCORE {
            return Err(ConfigError::Validation(format!(
                "weights.win_score must be in [1, {}]",
                EvalWeights::MAX_WIN_SCORE
            )));
        }
        let others = [
            ("three_in_row", self.weights.three_in_row),
            ("two_in_row", self.weights.two_in_row),
            ("center_weight", self.weights.center_weight),
            ("threat", self.weights.threat),
            ("block_weight", self.weights.block_weight),
        ];
        for (name, value) in others {
            if value.unsigned_abs() > EvalWeights::MAX_WEIGHT.unsigned_abs() {
                return Err(ConfigError::Validation(format!(
                    "weights.{name} must be within +/-{}",
                    EvalWeights::MAX_WEIGHT
                )));
            }
        }
        if self.weights.threat > 0 {
            return Err(ConfigError::Validation(
                "weights.threat must be <= 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
