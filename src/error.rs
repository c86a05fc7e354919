//! Error types for the rule engine and configuration loading

use std::path::PathBuf;

use crate::board::{MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};

/// Reasons a column drop is rejected. The board is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(
        "invalid board size {rows}x{cols} (rows must be {min_rows}..={max_rows}, cols {min_cols}..={max_cols})",
        min_rows = MIN_ROWS,
        max_rows = MAX_ROWS,
        min_cols = MIN_COLS,
        max_cols = MAX_COLS
    )]
    InvalidConfiguration { rows: usize, cols: usize },

    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
