//! Root-parallel search
//!
//! Each legal root column is scored on its own board clone with a full
//! alpha-beta window, one rayon task per column. Workers share nothing, so
//! the reduction (highest score, then lowest column) picks the same column
//! as the sequential search.

use rayon::prelude::*;

use crate::board::Board;
use crate::eval::EvalWeights;

use super::alphabeta::{SearchResult, SearchStats, Searcher};

/// Search every root column in parallel to `max_depth` plies (0 is treated as 1).
pub fn search_parallel(board: &Board, max_depth: u8, weights: &EvalWeights) -> SearchResult {
    let max_depth = max_depth.max(1);
    let moves = board.valid_moves();
    if moves.is_empty() {
        return SearchResult::no_move();
    }

    // Collect keeps the ascending column order of `moves`
    let scored: Vec<(usize, i32, u64, SearchStats)> = moves
        .par_iter()
        .map(|&col| {
            let mut searcher = Searcher::new(*weights);
            let mut local_board = board.clone();
            let score = searcher.score_root_move(&mut local_board, col, max_depth);
            (col, score, searcher.nodes(), searcher.stats())
        })
        .collect();

    let mut best_move = None;
    let mut best_score = 0;
    let mut nodes = 0;
    let mut stats = SearchStats::default();

    for (col, score, worker_nodes, worker_stats) in scored {
        nodes += worker_nodes;
        stats.merge(&worker_stats);
        if best_move.is_none() || score > best_score {
            best_move = Some(col);
            best_score = score;
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        depth: max_depth,
        nodes,
        stats,
        completed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_takes_immediate_win() {
        let board = Board::from_moves(6, 7, &[0, 6, 1, 6, 2, 5]).unwrap();
        let result = search_parallel(&board, 3, &EvalWeights::default());
        assert_eq!(result.best_move, Some(3));
        assert!(result.completed);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let weights = EvalWeights::default();
        let positions: [&[usize]; 3] = [&[3, 3, 2, 4, 4], &[0, 1, 2, 3, 4, 5, 6, 0], &[]];
        for moves in positions {
            let board = Board::from_moves(6, 7, moves).unwrap();
            for depth in 1..=4 {
                let parallel = search_parallel(&board, depth, &weights);
                let sequential = Searcher::new(weights).search(&board, depth);
                assert_eq!(parallel.best_move, sequential.best_move, "{moves:?} depth {depth}");
                assert_eq!(parallel.score, sequential.score, "{moves:?} depth {depth}");
            }
        }
    }

    #[test]
    fn test_parallel_finished_game() {
        let board = Board::from_moves(6, 7, &[3, 0, 3, 0, 3, 0, 3]).unwrap();
        let result = search_parallel(&board, 2, &EvalWeights::default());
        assert_eq!(result.best_move, None);
    }
}
