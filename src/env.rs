//! Reinforcement-learning environment adapter
//!
//! Wraps a [`Board`] in the `reset`/`step` shape external trainers expect.
//! Rewards are only terminal outcomes from the mover's point of view; illegal
//! moves come back as errors and any shaping is left to the trainer.

use crate::board::{Board, Cell, GameStatus, Player};
use crate::error::GameError;

/// Outcome of one environment step
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Flattened board after the move
    pub state: Vec<f32>,
    /// +1.0 mover won, -1.0 mover lost, 0.0 otherwise
    pub reward: f32,
    /// Game finished (win or draw)
    pub done: bool,
}

/// Connect Four as an episodic environment
#[derive(Debug, Clone, Default)]
pub struct Connect4Env {
    board: Board,
}

impl Connect4Env {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(rows, cols)?,
        })
    }

    /// Start a new episode and return the initial state
    pub fn reset(&mut self) -> Vec<f32> {
        self.board.reset();
        self.state()
    }

    /// Drop a piece for the side to move.
    ///
    /// On error the board is unchanged.
    pub fn step(&mut self, col: usize) -> Result<Step, GameError> {
        let mover = self.board.current_player();
        let status = self.board.apply_move(col)?;
        let reward = match status {
            GameStatus::Won(winner) if winner == mover => 1.0,
            GameStatus::Won(_) => -1.0,
            GameStatus::Draw | GameStatus::InProgress => 0.0,
        };
        Ok(Step {
            state: self.state(),
            reward,
            done: status.is_terminal(),
        })
    }

    /// Row-major cells: empty 0.0, Player One 1.0, Player Two 2.0
    pub fn state(&self) -> Vec<f32> {
        self.board
            .grid()
            .to_rows()
            .into_iter()
            .flatten()
            .map(|cell| match cell {
                Cell::Empty => 0.0,
                Cell::One => 1.0,
                Cell::Two => 2.0,
            })
            .collect()
    }

    pub fn valid_moves(&self) -> Vec<usize> {
        self.board.valid_moves()
    }

    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Length of the state vector
    pub fn state_size(&self) -> usize {
        self.board.rows() * self.board.cols()
    }

    /// Number of actions (columns)
    pub fn action_size(&self) -> usize {
        self.board.cols()
    }
}
