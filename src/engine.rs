//! Main AI engine integrating the search components
//!
//! The engine picks a column for the side to move:
//!
//! 1. **Finished game**: no move
//! 2. **Opening**: play the center column while few pieces are down
//! 3. **Alpha-Beta**: depth-bounded minimax, optionally root-parallel or
//!    under a node/time budget with iterative deepening
//!
//! # Example
//!
//! ```
//! use connect_four::{Board, Engine};
//!
//! let engine = Engine::new();
//! let board = Board::default();
//!
//! // Empty board: the opening rule answers with the center column
//! assert_eq!(engine.best_move(&board, 2), Some(3));
//! ```

use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::eval::{evaluate, EvalWeights};
use crate::search::{search_parallel, SearchBudget, SearchResult, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Center column played by the opening rule, no search
    Opening,
    /// Sequential alpha-beta search
    AlphaBeta,
    /// Root-parallel alpha-beta search
    Parallel,
    /// Game already finished
    NoMove,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best column found, if any
    pub best_move: Option<usize>,
    /// Backed-up score of the move for the side to move
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Depth actually completed
    pub depth: u8,
    /// Whether the requested depth was completed
    pub completed: bool,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMove,
            depth: 0,
            completed: true,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn opening(col: usize, time_ms: u64) -> Self {
        Self {
            best_move: Some(col),
            score: 0,
            search_type: SearchType::Opening,
            depth: 0,
            completed: true,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            depth: result.depth,
            completed: result.completed,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Engine settings, loadable from the `[engine]` table of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Play the center while at most this many pieces are on the board
    pub opening_moves: usize,
    /// Search root columns on the rayon pool
    pub parallel: bool,
    /// Node budget; enables iterative deepening
    pub max_nodes: Option<u64>,
    /// Time budget in milliseconds; enables iterative deepening
    pub time_limit_ms: Option<u64>,
}

impl EngineConfig {
    pub const DEFAULT_DEPTH: u8 = 2;
    pub const DEFAULT_OPENING_MOVES: usize = 4;

    /// Budget derived from `max_nodes` and `time_limit_ms`
    pub fn budget(&self) -> SearchBudget {
        SearchBudget {
            max_nodes: self.max_nodes,
            time_limit: self.time_limit_ms.map(Duration::from_millis),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            opening_moves: Self::DEFAULT_OPENING_MOVES,
            parallel: false,
            max_nodes: None,
            time_limit_ms: None,
        }
    }
}

/// Main AI engine for Connect Four.
///
/// Stateless between calls: every search builds its own [`Searcher`], so a
/// shared `&Engine` can serve several boards.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
    weights: EvalWeights,
}

impl Engine {
    /// Engine with default depth 2 and default weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig, weights: EvalWeights) -> Self {
        Self { config, weights }
    }

    /// Default engine searching `depth` plies.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self::with_config(
            EngineConfig {
                depth,
                ..EngineConfig::default()
            },
            EvalWeights::default(),
        )
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    /// Best column at the configured depth.
    #[must_use]
    pub fn get_move(&self, board: &Board) -> Option<usize> {
        self.best_move(board, self.config.depth)
    }

    /// Best column searching `max_depth` plies (0 is treated as 1).
    ///
    /// Returns `None` only when the board has no legal move.
    #[must_use]
    pub fn best_move(&self, board: &Board, max_depth: u8) -> Option<usize> {
        self.get_move_with_stats(board, max_depth).best_move
    }

    /// Best column with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, max_depth: u8) -> MoveResult {
        let start = Instant::now();
        let elapsed = |start: Instant| start.elapsed().as_millis() as u64;

        if board.valid_moves().is_empty() {
            return MoveResult::no_move(elapsed(start));
        }

        if let Some(col) = self.opening_move(board) {
            debug!(
                "{} opening move: column {col} ({} pieces on board)",
                board.current_player().name(),
                board.piece_count()
            );
            return MoveResult::opening(col, elapsed(start));
        }

        let budget = self.config.budget();
        let (result, search_type) = if self.config.parallel && budget.is_unlimited() {
            (
                search_parallel(board, max_depth, &self.weights),
                SearchType::Parallel,
            )
        } else {
            let mut searcher = Searcher::with_budget(self.weights, budget);
            (searcher.search(board, max_depth), SearchType::AlphaBeta)
        };

        let result = MoveResult::from_search(result, search_type, elapsed(start));
        debug!(
            "{} plays column {:?}: score {} depth {}{} nodes {} in {}ms ({:?})",
            board.current_player().name(),
            result.best_move,
            result.score,
            result.depth,
            if result.completed { "" } else { " (budget hit)" },
            result.nodes,
            result.time_ms,
            result.search_type
        );
        result
    }

    /// Static evaluation of `board` for `player` with the engine's weights.
    #[must_use]
    pub fn evaluate(&self, board: &Board, player: Player) -> i32 {
        evaluate(board, player, &self.weights)
    }

    /// Center column if the opening rule applies
    fn opening_move(&self, board: &Board) -> Option<usize> {
        let center = board.center_col();
        (board.piece_count() <= self.config.opening_moves && board.is_valid_move(center))
            .then_some(center)
    }
}
