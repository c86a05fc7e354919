//! Board structure with turn, status and undo tracking

use super::grid::Grid;
use super::{
    Cell, GameStatus, Player, Pos, DEFAULT_COLS, DEFAULT_ROWS, MAX_COLS, MAX_ROWS, MIN_COLS,
    MIN_ROWS,
};
use crate::error::{GameError, MoveError};
use crate::rules::has_four_at;

/// Game board: grid, side to move, and derived status.
///
/// All mutation goes through [`Board::apply_move`] and its inverse
/// [`Board::undo_move`]. `Clone` produces a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    /// Pieces per column
    heights: Vec<u8>,
    current: Player,
    status: GameStatus,
    last_move: Option<Pos>,
    history: Vec<MoveRecord>,
}

/// Record of a move for undo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MoveRecord {
    pos: Pos,
    prev_last_move: Option<Pos>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] when a dimension is
    /// outside `MIN_*..=MAX_*`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) || !(MIN_COLS..=MAX_COLS).contains(&cols) {
            return Err(GameError::InvalidConfiguration { rows, cols });
        }
        Ok(Self {
            grid: Grid::new(rows, cols),
            heights: vec![0; cols],
            current: Player::One,
            status: GameStatus::InProgress,
            last_move: None,
            history: Vec::with_capacity(rows * cols),
        })
    }

    /// Build a board by replaying columns from the initial position
    pub fn from_moves(rows: usize, cols: usize, moves: &[usize]) -> Result<Self, GameError> {
        let mut board = Self::new(rows, cols)?;
        for &col in moves {
            board.apply_move(col)?;
        }
        Ok(board)
    }

    /// Return to the initial position, keeping the dimensions
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.rows(), self.cols());
        self.heights.iter_mut().for_each(|h| *h = 0);
        self.current = Player::One;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        self.history.clear();
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Index of the center column
    #[inline]
    pub fn center_col(&self) -> usize {
        self.cols() / 2
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get cell at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.grid.get(Pos::new(row as u8, col as u8))
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Total pieces on the board
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.history.len()
    }

    /// Columns played so far, oldest first
    pub fn move_history(&self) -> Vec<usize> {
        self.history.iter().map(|r| r.pos.col as usize).collect()
    }

    /// Whether the top cell of `col` is empty (ignores game status)
    #[inline]
    pub fn has_room(&self, col: usize) -> bool {
        col < self.cols() && (self.heights[col] as usize) < self.rows()
    }

    /// Row a piece dropped into `col` would land on
    #[inline]
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if self.has_room(col) {
            Some(self.rows() - 1 - self.heights[col] as usize)
        } else {
            None
        }
    }

    /// Check whether dropping into `col` is currently legal
    #[inline]
    pub fn is_valid_move(&self, col: usize) -> bool {
        !self.is_terminal() && self.has_room(col)
    }

    /// Legal columns in ascending order. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.cols()).filter(|&col| self.has_room(col)).collect()
    }

    /// Drop the current player's piece into `col`.
    ///
    /// On error the board is unchanged. On success the returned status is
    /// `Won(mover)`, `Draw`, or `InProgress` (and the turn passes).
    pub fn apply_move(&mut self, col: usize) -> Result<GameStatus, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if col >= self.cols() {
            return Err(MoveError::ColumnOutOfRange {
                col,
                cols: self.cols(),
            });
        }
        let Some(row) = self.landing_row(col) else {
            return Err(MoveError::ColumnFull(col));
        };

        let mover = self.current;
        let pos = Pos::new(row as u8, col as u8);
        self.grid.set(pos, mover.cell());
        self.heights[col] += 1;
        self.history.push(MoveRecord {
            pos,
            prev_last_move: self.last_move,
        });
        self.last_move = Some(pos);

        if has_four_at(&self.grid, pos, mover) {
            self.status = GameStatus::Won(mover);
        } else if self.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current = mover.opponent();
        }
        Ok(self.status)
    }

    /// Revert the most recent move. Returns the column it was played in.
    pub fn undo_move(&mut self) -> Option<usize> {
        let record = self.history.pop()?;
        let col = record.pos.col as usize;
        let mover = self.grid.get(record.pos).player()?;

        self.grid.clear(record.pos);
        self.heights[col] -= 1;
        self.current = mover;
        self.status = GameStatus::InProgress;
        self.last_move = record.prev_last_move;
        Some(col)
    }

    /// True when no column has room
    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == self.rows() * self.cols()
    }

    /// Read-only copy of the grid for rendering, row 0 (top) first
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.grid.to_rows()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: Grid::new(DEFAULT_ROWS, DEFAULT_COLS),
            heights: vec![0; DEFAULT_COLS],
            current: Player::One,
            status: GameStatus::InProgress,
            last_move: None,
            history: Vec::with_capacity(DEFAULT_ROWS * DEFAULT_COLS),
        }
    }
}
