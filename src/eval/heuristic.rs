//! Heuristic evaluation function for Connect Four positions
//!
//! This module provides the leaf evaluation for the minimax search.
//! It evaluates board positions based on:
//! - Terminal status (win/loss/draw)
//! - Window scoring over every run of four cells
//! - Center column control
//! - Blocking urgency against immediate opponent wins

use crate::board::{Board, Cell, GameStatus, Grid, Player, Pos, CONNECT};
use crate::rules::{would_win, DIRECTIONS};

use super::patterns::EvalWeights;

/// Evaluate the board from the perspective of the given player.
///
/// Returns a score where:
/// - Positive values indicate advantage for `player`
/// - Negative values indicate disadvantage for `player`
/// - `weights.win_score` indicates a won game, its negation a lost one
///
/// The score is not symmetric: `evaluate(b, One)` is generally not
/// `-evaluate(b, Two)`, so callers must keep one fixed perspective (the
/// minimax search always evaluates for the root player).
#[must_use]
pub fn evaluate(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    match board.status() {
        GameStatus::Won(winner) if winner == player => return weights.win_score,
        GameStatus::Won(_) => return -weights.win_score,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    let mut score = 0i32;
    for_each_window(board.grid(), |window| {
        score = score.saturating_add(evaluate_window(window, player, weights));
    });

    score
        .saturating_add(center_score(board, player, weights))
        .saturating_add(block_score(board, player, weights))
        .max(-i32::MAX)
}

/// Score one 4-cell window.
#[must_use]
pub fn evaluate_window(window: [Cell; CONNECT], player: Player, weights: &EvalWeights) -> i32 {
    let own = player.cell();
    let opp = player.opponent().cell();
    let mine = window.iter().filter(|&&c| c == own).count();
    let theirs = window.iter().filter(|&&c| c == opp).count();
    let empty = CONNECT - mine - theirs;

    match (mine, theirs, empty) {
        (4, _, _) => weights.win_score,
        (3, _, 1) => weights.three_in_row,
        (2, _, 2) => weights.two_in_row,
        (_, 3, 1) => weights.threat,
        _ => 0,
    }
}

/// Visit every horizontal, vertical and diagonal run of four cells exactly once.
pub fn for_each_window<F: FnMut([Cell; CONNECT])>(grid: &Grid, mut f: F) {
    let reach = CONNECT as i32 - 1;
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            for &(dr, dc) in &DIRECTIONS {
                if !grid.contains(row + dr * reach, col + dc * reach) {
                    continue;
                }
                let mut window = [Cell::Empty; CONNECT];
                for (i, slot) in window.iter_mut().enumerate() {
                    let r = row + dr * i as i32;
                    let c = col + dc * i as i32;
                    *slot = grid.get(Pos::new(r as u8, c as u8));
                }
                f(window);
            }
        }
    }
}

/// Bonus for each own piece in the center column
fn center_score(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let center = board.center_col();
    let own = player.cell();
    let count = (0..board.rows())
        .filter(|&row| board.get(row, center) == own)
        .count() as i32;
    count.saturating_mul(weights.center_weight)
}

/// Bonus for each playable column the opponent could win with next move.
///
/// Rewards positions where the evaluating side still has a forcing reason
/// to play that column.
fn block_score(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let opponent = player.opponent();
    let urgent = (0..board.cols())
        .filter(|&col| board.has_room(col) && would_win(board, col, opponent))
        .count() as i32;
    urgent.saturating_mul(weights.block_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights() -> EvalWeights {
        EvalWeights::default()
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::default();
        assert_eq!(evaluate(&board, Player::One, &weights()), 0);
        assert_eq!(evaluate(&board, Player::Two, &weights()), 0);
    }

    #[test]
    fn test_window_count_classic_board() {
        let mut windows = 0;
        for_each_window(Board::default().grid(), |_| windows += 1);
        assert_eq!(windows, 69);

        let mut small = 0;
        for_each_window(Board::new(4, 4).unwrap().grid(), |_| small += 1);
        assert_eq!(small, 10);
    }

    #[test]
    fn test_evaluate_window_cases() {
        let w = weights();
        let (e, o, t) = (Cell::Empty, Cell::One, Cell::Two);
        assert_eq!(evaluate_window([o, o, o, o], Player::One, &w), w.win_score);
        assert_eq!(evaluate_window([o, o, e, o], Player::One, &w), w.three_in_row);
        assert_eq!(evaluate_window([e, o, o, e], Player::One, &w), w.two_in_row);
        assert_eq!(evaluate_window([t, t, e, t], Player::One, &w), w.threat);
        assert_eq!(evaluate_window([o, o, t, e], Player::One, &w), 0);
        assert_eq!(evaluate_window([o, e, e, e], Player::One, &w), 0);
        assert_eq!(evaluate_window([t, t, t, o], Player::One, &w), 0);
    }

    #[test]
    fn test_evaluate_center_bonus() {
        let board = Board::from_moves(6, 7, &[3]).unwrap();
        // Single center piece: no window has two pieces, only the center bonus
        assert_eq!(evaluate(&board, Player::One, &weights()), weights().center_weight);
        assert_eq!(evaluate(&board, Player::Two, &weights()), 0);
    }

    #[test]
    fn test_evaluate_terminal_shortcut() {
        let w = weights();
        let board = Board::from_moves(6, 7, &[3, 0, 3, 0, 3, 0, 3]).unwrap();
        assert_eq!(evaluate(&board, Player::One, &w), w.win_score);
        assert_eq!(evaluate(&board, Player::Two, &w), -w.win_score);
    }

    #[test]
    fn test_evaluate_draw_is_zero() {
        let mut board = Board::default();
        for col in [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, 4, 5, 4, 5,
            4, 5, 5, 4, 5, 4, 5, 4, 6, 6, 6, 6, 6, 6,
        ] {
            board.apply_move(col).unwrap();
        }
        assert_eq!(board.status(), GameStatus::Draw);
        assert_eq!(evaluate(&board, Player::One, &weights()), 0);
    }

    #[test]
    fn test_opponent_three_costs_threat_and_earns_block() {
        let w = weights();
        // Two holds (5,0),(5,1),(5,2) with (5,3) open: one threat window and
        // one column where Two would win immediately.
        let board = Board::from_moves(6, 7, &[6, 0, 6, 1, 5, 2]).unwrap();

        let base = EvalWeights { threat: 0, block_weight: 0, ..w };
        let with_threat = EvalWeights { block_weight: 0, ..w };
        let with_block = EvalWeights { threat: 0, ..w };

        let b = evaluate(&board, Player::One, &base);
        assert_eq!(evaluate(&board, Player::One, &with_threat), b + w.threat);
        assert_eq!(evaluate(&board, Player::One, &with_block), b + w.block_weight);
        assert_eq!(
            evaluate(&board, Player::One, &w),
            b + w.threat + w.block_weight
        );
    }

    #[test]
    fn test_block_bonus_counts_each_winning_column() {
        let w = EvalWeights {
            win_score: 100_000,
            three_in_row: 0,
            two_in_row: 0,
            center_weight: 0,
            threat: 0,
            block_weight: 7,
        };
        // Two: (5,1),(5,2),(5,3); columns 0 and 4 both finish the row
        let board = Board::from_moves(6, 7, &[6, 1, 6, 2, 5, 3]).unwrap();
        assert_eq!(board.current_player(), Player::One);
        assert_eq!(evaluate(&board, Player::One, &w), 14);
    }

    #[test]
    fn test_three_in_row_bonus() {
        let w = EvalWeights {
            win_score: 100_000,
            three_in_row: 1,
            two_in_row: 0,
            center_weight: 0,
            threat: 0,
            block_weight: 0,
        };
        // One: (5,0),(5,1),(5,2); only the window 0..=3 is three-plus-empty
        let board = Board::from_moves(6, 7, &[0, 6, 1, 6, 2, 5]).unwrap();
        assert_eq!(evaluate(&board, Player::One, &w), 1);
    }
}
