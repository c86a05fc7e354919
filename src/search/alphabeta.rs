//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Connect Four AI.
//! It uses plain minimax (maximizing for the side to move at the root,
//! minimizing for the opponent) with alpha-beta pruning.
//!
//! # Features
//!
//! - Make/undo on a single private working board, no per-node allocation
//! - Ascending column order with strict improvement, so ties go to the
//!   lowest column and pruning never changes the chosen move
//! - Optional node/time budget with iterative deepening (anytime search)
//! - Unpruned reference search for verification
//!
//! # Example
//!
//! ```
//! use connect_four::board::Board;
//! use connect_four::eval::EvalWeights;
//! use connect_four::search::Searcher;
//!
//! let mut searcher = Searcher::new(EvalWeights::default());
//! let board = Board::from_moves(6, 7, &[0, 6, 1, 6, 2, 5]).unwrap();
//!
//! let result = searcher.search(&board, 2);
//! assert_eq!(result.best_move, Some(3));
//! ```

use std::time::{Duration, Instant};

use crate::board::{Board, GameStatus, Player};
use crate::eval::{evaluate, EvalWeights};

/// Infinity score for alpha-beta bounds
pub(crate) const INF: i32 = i32::MAX;

/// Limits for an anytime search. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchBudget {
    /// Maximum number of nodes to visit
    pub max_nodes: Option<u64>,
    /// Wall-clock limit for the whole search
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    /// No limits: search exactly to the requested depth
    pub const UNLIMITED: SearchBudget = SearchBudget {
        max_nodes: None,
        time_limit: None,
    };

    #[inline]
    pub fn is_unlimited(&self) -> bool {
        self.max_nodes.is_none() && self.time_limit.is_none()
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total beta cutoffs
    pub beta_cutoffs: u64,
    /// Cutoffs on the first move tried at a node
    pub first_move_cutoffs: u64,
    /// Heuristic evaluations at the horizon
    pub leaf_evaluations: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }

    /// Merge another stats into this one (for combining worker stats)
    pub(crate) fn merge(&mut self, other: &SearchStats) {
        self.beta_cutoffs += other.beta_cutoffs;
        self.first_move_cutoffs += other.first_move_cutoffs;
        self.leaf_evaluations += other.leaf_evaluations;
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best column found, `None` only when no move is legal
    pub best_move: Option<usize>,
    /// Backed-up score of the best move from the root player's view
    pub score: i32,
    /// Deepest fully completed depth
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
    /// Whether the requested depth was reached before the budget ran out
    pub completed: bool,
}

impl SearchResult {
    pub(crate) fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stats: SearchStats::default(),
            completed: true,
        }
    }
}

/// Best root move of one iteration
#[derive(Debug, Clone, Copy)]
struct RootOutcome {
    best_move: Option<usize>,
    score: i32,
}

/// Depth-bounded minimax searcher.
///
/// A searcher owns its counters and weights, never the board: every call
/// clones the caller's board once and walks it with make/undo.
#[derive(Debug, Clone)]
pub struct Searcher {
    weights: EvalWeights,
    budget: SearchBudget,
    nodes: u64,
    stats: SearchStats,
    start_time: Option<Instant>,
    stopped: bool,
}

impl Searcher {
    /// Create a searcher without a budget
    pub fn new(weights: EvalWeights) -> Self {
        Self::with_budget(weights, SearchBudget::UNLIMITED)
    }

    /// Create a searcher that stops when `budget` is exhausted
    pub fn with_budget(weights: EvalWeights, budget: SearchBudget) -> Self {
        Self {
            weights,
            budget,
            nodes: 0,
            stats: SearchStats::default(),
            start_time: None,
            stopped: false,
        }
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Diagnostics of the last search
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn reset_counters(&mut self) {
        self.nodes = 0;
        self.stats = SearchStats::default();
        self.start_time = Some(Instant::now());
        self.stopped = false;
    }

    /// Find the best column for the side to move.
    ///
    /// `max_depth` counts plies including the root move; 0 is treated as 1.
    /// Returns a result with `best_move == None` only when the board has no
    /// legal move (finished game).
    pub fn search(&mut self, board: &Board, max_depth: u8) -> SearchResult {
        self.reset_counters();
        let max_depth = max_depth.max(1);
        if board.valid_moves().is_empty() {
            return SearchResult::no_move();
        }

        let root = board.current_player();
        let mut work = board.clone();

        if self.budget.is_unlimited() {
            let outcome = self.search_root(&mut work, max_depth, root);
            return self.finish(outcome, max_depth, true);
        }

        // Anytime: keep the deepest iteration that finished
        let mut best: Option<RootOutcome> = None;
        let mut reached = 0;
        for depth in 1..=max_depth {
            let outcome = self.search_root(&mut work, depth, root);
            if self.stopped {
                if best.is_none() && outcome.best_move.is_some() {
                    best = Some(outcome);
                }
                break;
            }
            best = Some(outcome);
            reached = depth;
        }

        let outcome = match best {
            Some(outcome) => outcome,
            None => RootOutcome {
                best_move: board.valid_moves().first().copied(),
                score: 0,
            },
        };
        self.finish(outcome, reached, reached == max_depth)
    }

    /// Full-width minimax without pruning.
    ///
    /// Same scoring and tie-breaking as [`Searcher::search`], ignores the
    /// budget. Exponentially slower; intended for verification.
    pub fn search_unpruned(&mut self, board: &Board, max_depth: u8) -> SearchResult {
        self.reset_counters();
        let max_depth = max_depth.max(1);
        if board.valid_moves().is_empty() {
            return SearchResult::no_move();
        }

        let root = board.current_player();
        let mut work = board.clone();
        let mut outcome = RootOutcome {
            best_move: None,
            score: -INF,
        };

        for col in 0..work.cols() {
            if work.apply_move(col).is_err() {
                continue;
            }
            let score = self.minimax(&mut work, max_depth - 1, false, root);
            work.undo_move();

            if outcome.best_move.is_none() || score > outcome.score {
                outcome = RootOutcome {
                    best_move: Some(col),
                    score,
                };
            }
        }
        self.finish(outcome, max_depth, true)
    }

    /// Score a single root column with a full window.
    ///
    /// Used by root-parallel workers. `board` must be at the root position
    /// and is restored before returning.
    pub(crate) fn score_root_move(&mut self, board: &mut Board, col: usize, depth: u8) -> i32 {
        self.reset_counters();
        let root = board.current_player();
        if board.apply_move(col).is_err() {
            return -INF;
        }
        let score = self.alpha_beta(board, depth.max(1) - 1, false, -INF, INF, root);
        board.undo_move();
        score
    }

    fn finish(&self, outcome: RootOutcome, depth: u8, completed: bool) -> SearchResult {
        SearchResult {
            best_move: outcome.best_move,
            score: if outcome.best_move.is_some() {
                outcome.score
            } else {
                0
            },
            depth,
            nodes: self.nodes,
            stats: self.stats,
            completed,
        }
    }

    /// Root-level search. Alpha is raised by earlier siblings; a later column
    /// only replaces the incumbent on a strictly better score.
    fn search_root(&mut self, board: &mut Board, depth: u8, root: Player) -> RootOutcome {
        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for col in 0..board.cols() {
            if board.apply_move(col).is_err() {
                continue;
            }
            let score = self.alpha_beta(board, depth - 1, false, alpha, INF, root);
            board.undo_move();

            if self.stopped {
                break;
            }

            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(col);
            }
            alpha = alpha.max(score);
        }

        RootOutcome {
            best_move,
            score: best_score,
        }
    }

    /// Fail-soft alpha-beta. Scores are always from `root`'s perspective.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        root: Player,
    ) -> i32 {
        self.nodes += 1;
        if self.budget_exhausted() {
            self.stopped = true;
            return 0;
        }

        if board.is_terminal() {
            return self.terminal_score(board.status(), root, depth);
        }
        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            return evaluate(board, root, &self.weights);
        }

        let mut best = if maximizing { -INF } else { INF };
        let mut tried = 0;

        for col in 0..board.cols() {
            if board.apply_move(col).is_err() {
                continue;
            }
            let score = self.alpha_beta(board, depth - 1, !maximizing, alpha, beta, root);
            board.undo_move();
            tried += 1;

            if self.stopped {
                return best;
            }

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                if tried == 1 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        best
    }

    /// Plain minimax, same leaves as `alpha_beta`
    fn minimax(&mut self, board: &mut Board, depth: u8, maximizing: bool, root: Player) -> i32 {
        self.nodes += 1;

        if board.is_terminal() {
            return self.terminal_score(board.status(), root, depth);
        }
        if depth == 0 {
            self.stats.leaf_evaluations += 1;
            return evaluate(board, root, &self.weights);
        }

        let mut best = if maximizing { -INF } else { INF };
        for col in 0..board.cols() {
            if board.apply_move(col).is_err() {
                continue;
            }
            let score = self.minimax(board, depth - 1, !maximizing, root);
            board.undo_move();

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    /// Score of a finished game. Remaining depth is added so that faster wins
    /// and slower losses are preferred.
    #[inline]
    fn terminal_score(&self, status: GameStatus, root: Player, depth: u8) -> i32 {
        match status {
            GameStatus::Won(winner) if winner == root => {
                self.weights.win_score.saturating_add(i32::from(depth))
            }
            GameStatus::Won(_) => -self.weights.win_score.saturating_add(i32::from(depth)),
            GameStatus::Draw | GameStatus::InProgress => 0,
        }
    }

    /// Check the node and time budget
    #[inline]
    fn budget_exhausted(&self) -> bool {
        if self.stopped {
            return true;
        }
        if let Some(max_nodes) = self.budget.max_nodes {
            if self.nodes > max_nodes {
                return true;
            }
        }
        if let (Some(start), Some(limit)) = (self.start_time, self.budget.time_limit) {
            if start.elapsed() >= limit {
                return true;
            }
        }
        false
    }
}
