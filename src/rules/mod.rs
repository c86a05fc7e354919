//! Game rules for Connect Four
//!
//! Placement is gravity-constrained and handled by [`Board`](crate::board::Board);
//! this module holds the line detection shared by the board, the evaluator,
//! and the GUI.

pub mod win;

// Re-exports for convenient access
pub use win::{count_line, has_four_at, winning_line, would_win, DIRECTIONS};
