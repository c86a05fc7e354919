//! Search module for the Connect Four AI
//!
//! Contains:
//! - Alpha-beta minimax with an optional node/time budget
//! - An unpruned reference search
//! - Root-parallel search over the legal columns

pub mod alphabeta;
pub mod parallel;


pub use alphabeta::{SearchBudget, SearchResult, SearchStats, Searcher};
pub use parallel::search_parallel;
