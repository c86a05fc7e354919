//! Scoring weights for Connect Four evaluation
//!
//! The weights are a plain value rather than global constants so several
//! engine configurations can coexist (and be loaded from TOML).

/// Weights applied by [`evaluate`](super::evaluate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Completed four, and the terminal win/loss magnitude
    pub win_score: i32,
    /// Window with three own pieces and one empty cell
    pub three_in_row: i32,
    /// Window with two own pieces and two empty cells
    pub two_in_row: i32,
    /// Per own piece in the center column
    pub center_weight: i32,
    /// Window with three opponent pieces and one empty cell (negative)
    pub threat: i32,
    /// Per playable column where the opponent would win immediately
    pub block_weight: i32,
}

impl EvalWeights {
    pub const WIN_SCORE: i32 = 100_000;
    pub const THREE_IN_ROW: i32 = 100;
    pub const TWO_IN_ROW: i32 = 10;
    pub const CENTER_WEIGHT: i32 = 3;
    pub const THREAT: i32 = -80;
    pub const BLOCK_WEIGHT: i32 = 50;

    /// Largest accepted `win_score`; leaves headroom for the depth bonus in search
    pub const MAX_WIN_SCORE: i32 = i32::MAX / 4;
    /// Largest accepted magnitude for every other weight
    pub const MAX_WEIGHT: i32 = 1_000_000;
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            win_score: Self::WIN_SCORE,
            three_in_row: Self::THREE_IN_ROW,
            two_in_row: Self::TWO_IN_ROW,
            center_weight: Self::CENTER_WEIGHT,
            threat: Self::THREAT,
            block_weight: Self::BLOCK_WEIGHT,
        }
    }
}
