//! Connect Four rule engine and minimax AI
//!
//! A connect-four-family game engine with adversarial move selection:
//! - Gravity board from 4x4 up to 16x16 (classic 6x7 by default)
//! - Four in a row wins, checked incrementally through the last drop
//! - Windowed heuristic evaluation with configurable weights
//! - Minimax with alpha-beta pruning and deterministic tie-breaking
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, move application and undo
//! - [`rules`]: Line detection
//! - [`eval`]: Position evaluation and weights
//! - [`search`]: Alpha-beta search (sequential, root-parallel, budgeted)
//! - [`engine`]: Main AI engine integrating all components
//! - [`agent`]: Automated players (engine, network, random)
//! - [`env`]: Reinforcement-learning environment adapter
//! - [`config`]: TOML configuration
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use connect_four::{Board, Engine, GameStatus};
//!
//! let mut board = Board::default();
//! let engine = Engine::with_depth(4);
//!
//! // Play a few plies engine against engine
//! for _ in 0..6 {
//!     let col = engine.get_move(&board).expect("game not over");
//!     board.apply_move(col).unwrap();
//! }
//! assert_eq!(board.status(), GameStatus::InProgress);
//! assert_eq!(board.piece_count(), 6);
//! ```
//!
//! # Search
//!
//! The AI engine picks a move in this order:
//! 1. No move on a finished board
//! 2. Center column during the opening
//! 3. Alpha-beta search to the configured depth

pub mod agent;
pub mod board;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

pub use agent::{Agent, NetworkAgent, RandomAgent, SearchAgent};
pub use board::{Board, Cell, GameStatus, Player, Pos};
pub use config::AppConfig;
pub use engine::{Engine, EngineConfig, MoveResult, SearchType};
pub use env::{Connect4Env, Step};
pub use error::{ConfigError, GameError, MoveError};
pub use eval::{evaluate, EvalWeights};
pub use search::{SearchBudget, SearchResult, Searcher};
