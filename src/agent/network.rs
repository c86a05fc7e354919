//! Network-driven player
//!
//! The network itself lives outside the crate. This module only defines the
//! input encoding and turns the network's per-column outputs into a legal
//! move.

use super::Agent;
use crate::board::{Board, Cell, Player};

/// Encode `board` from `perspective`'s point of view.
///
/// Row-major `rows * cols` values (own piece 1.0, opponent -1.0, empty 0.0)
/// followed by one turn indicator: 1.0 if `perspective` is to move, else -1.0.
pub fn encode_board(board: &Board, perspective: Player) -> Vec<f32> {
    let own = perspective.cell();
    let mut input = Vec::with_capacity(board.rows() * board.cols() + 1);
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            input.push(match board.get(row, col) {
                Cell::Empty => 0.0,
                cell if cell == own => 1.0,
                _ => -1.0,
            });
        }
    }
    input.push(if board.current_player() == perspective {
        1.0
    } else {
        -1.0
    });
    input
}

/// Agent that scores columns with an external network.
///
/// `F` maps the [`encode_board`] input to one output per column.
pub struct NetworkAgent<F> {
    network: F,
    name: String,
}

impl<F> NetworkAgent<F>
where
    F: FnMut(&[f32]) -> Vec<f32>,
{
    pub fn new(network: F) -> Self {
        Self::with_name(network, "Network")
    }

    pub fn with_name(network: F, name: impl Into<String>) -> Self {
        Self {
            network,
            name: name.into(),
        }
    }
}

impl<F> Agent for NetworkAgent<F>
where
    F: FnMut(&[f32]) -> Vec<f32>,
{
    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let moves = board.valid_moves();
        if moves.is_empty() {
            return None;
        }

        let input = encode_board(board, board.current_player());
        let output = (self.network)(&input);

        // Missing or NaN outputs rank below everything; ties keep the lower column
        let score = |col: usize| match output.get(col) {
            Some(v) if !v.is_nan() => *v,
            _ => f32::NEG_INFINITY,
        };
        let mut best = moves[0];
        for &col in &moves[1..] {
            if score(col) > score(best) {
                best = col;
            }
        }
        Some(best)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_board_perspective() {
        let board = Board::from_moves(4, 4, &[0, 3]).unwrap();
        let one = encode_board(&board, Player::One);
        let two = encode_board(&board, Player::Two);

        assert_eq!(one.len(), 17);
        // Bottom row starts at index 12
        assert_eq!(&one[12..16], &[1.0, 0.0, 0.0, -1.0]);
        assert_eq!(&two[12..16], &[-1.0, 0.0, 0.0, 1.0]);
        // One is to move
        assert_eq!(one[16], 1.0);
        assert_eq!(two[16], -1.0);
        assert!(one[..12].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_network_agent_picks_highest_legal_output() {
        // Column 1 scores highest but is full
        let board = Board::from_moves(4, 4, &[1, 1, 1, 1]).unwrap();
        let mut agent = NetworkAgent::new(|_: &[f32]| vec![0.1, 9.0, 0.5, 0.2]);
        assert_eq!(agent.choose_move(&board), Some(2));
    }

    #[test]
    fn test_network_agent_tie_goes_to_lower_column() {
        let board = Board::default();
        let mut agent = NetworkAgent::new(|_: &[f32]| vec![0.0, 3.0, 1.0, 3.0, 0.0, 3.0, 0.0]);
        assert_eq!(agent.choose_move(&board), Some(1));
    }

    #[test]
    fn test_network_agent_bad_outputs() {
        let board = Board::default();

        let mut short = NetworkAgent::new(|_: &[f32]| vec![-5.0, -7.0]);
        assert_eq!(short.choose_move(&board), Some(0));

        let mut nan = NetworkAgent::new(|_: &[f32]| vec![f32::NAN, -1.0, f32::NAN]);
        assert_eq!(nan.choose_move(&board), Some(1));

        let mut empty = NetworkAgent::new(|_: &[f32]| Vec::new());
        assert_eq!(empty.choose_move(&board), Some(0));
    }

    #[test]
    fn test_network_agent_receives_encoding() {
        let board = Board::from_moves(6, 7, &[3]).unwrap();
        let expected = encode_board(&board, Player::Two);
        let mut seen = Vec::new();
        {
            let mut agent = NetworkAgent::with_name(
                |input: &[f32]| {
                    seen = input.to_vec();
                    vec![0.0; 7]
                },
                "probe",
            );
            assert_eq!(agent.name(), "probe");
            assert_eq!(agent.choose_move(&board), Some(0));
        }
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_network_agent_finished_game() {
        let board = Board::from_moves(6, 7, &[3, 0, 3, 0, 3, 0, 3]).unwrap();
        let mut agent = NetworkAgent::new(|_: &[f32]| vec![1.0; 7]);
        assert_eq!(agent.choose_move(&board), None);
    }
}
