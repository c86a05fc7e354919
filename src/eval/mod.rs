//! Evaluation module for Connect Four positions
//!
//! This module scores a position for one side. The evaluation considers:
//! - Every 4-cell window along the four axes
//! - Center column control
//! - Immediate opponent wins that still need blocking

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_window, for_each_window};
pub use patterns::EvalWeights;
