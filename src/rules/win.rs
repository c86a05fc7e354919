//! Win condition checking
//!
//! A win is four or more same-player pieces in a row along one of the four
//! axes. Detection is incremental: only lines through the last placed piece
//! are examined, and both directions of each axis are summed so that a piece
//! landing in the middle of a run is counted.

use crate::board::{Board, Grid, Player, Pos, CONNECT};

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (-1, 1), // Diagonal "/"
    (1, 1),  // Diagonal "\"
];

/// Count contiguous `player` pieces through `pos` along one axis.
///
/// The cell at `pos` itself is counted as belonging to `player` whatever it
/// holds, which lets callers test hypothetical drops.
pub fn count_line(grid: &Grid, pos: Pos, dr: i32, dc: i32, player: Player) -> usize {
    let target = player.cell();
    let mut count = 1;
    for sign in [1i32, -1i32] {
        let mut r = i32::from(pos.row) + dr * sign;
        let mut c = i32::from(pos.col) + dc * sign;
        while grid.get_signed(r, c) == Some(target) {
            count += 1;
            r += dr * sign;
            c += dc * sign;
        }
    }
    count
}

/// Fast four-in-a-row check through a specific position. No allocation.
#[inline]
pub fn has_four_at(grid: &Grid, pos: Pos, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| count_line(grid, pos, dr, dc, player) >= CONNECT)
}

/// Whether `player` dropping into `col` would complete a line right now.
///
/// Ignores whose turn it is and whether the game has ended; returns `false`
/// for a full or out-of-range column.
pub fn would_win(board: &Board, col: usize, player: Player) -> bool {
    match board.landing_row(col) {
        Some(row) => has_four_at(board.grid(), Pos::new(row as u8, col as u8), player),
        None => false,
    }
}

/// Cells of the winning run through `pos`, ordered along the axis.
///
/// Returns `None` if the piece at `pos` is not part of a line of four.
pub fn winning_line(grid: &Grid, pos: Pos) -> Option<Vec<Pos>> {
    let cell = grid.get(pos);
    cell.player()?;

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        let mut r = i32::from(pos.row) - dr;
        let mut c = i32::from(pos.col) - dc;
        while grid.get_signed(r, c) == Some(cell) {
            line.insert(0, Pos::new(r as u8, c as u8));
            r -= dr;
            c -= dc;
        }

        // Extend in positive direction
        r = i32::from(pos.row) + dr;
        c = i32::from(pos.col) + dc;
        while grid.get_signed(r, c) == Some(cell) {
            line.push(Pos::new(r as u8, c as u8));
            r += dr;
            c += dc;
        }

        if line.len() >= CONNECT {
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn grid_with(rows: usize, cols: usize, cells: &[(u8, u8, Cell)]) -> Grid {
        let mut grid = Grid::new(rows, cols);
        for &(r, c, cell) in cells {
            grid.set(Pos::new(r, c), cell);
        }
        grid
    }

    #[test]
    fn test_count_line_sums_both_directions() {
        // One at (5,0), (5,1), (5,3); (5,2) is the pivot
        let grid = grid_with(
            6,
            7,
            &[(5, 0, Cell::One), (5, 1, Cell::One), (5, 3, Cell::One)],
        );
        assert_eq!(count_line(&grid, Pos::new(5, 2), 0, 1, Player::One), 4);
        assert_eq!(count_line(&grid, Pos::new(5, 2), 0, 1, Player::Two), 1);
    }

    #[test]
    fn test_has_four_at_straddling_piece() {
        let grid = grid_with(
            6,
            7,
            &[
                (5, 1, Cell::Two),
                (5, 2, Cell::Two),
                (5, 3, Cell::Two),
                (5, 4, Cell::Two),
            ],
        );
        // Every piece of the run sees the whole run
        for col in 1..=4 {
            assert!(has_four_at(&grid, Pos::new(5, col), Player::Two));
        }
        assert!(!has_four_at(&grid, Pos::new(5, 5), Player::One));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let grid = grid_with(
            6,
            7,
            &[(5, 0, Cell::One), (4, 1, Cell::One), (3, 2, Cell::One)],
        );
        assert!(!has_four_at(&grid, Pos::new(3, 2), Player::One));
    }

    #[test]
    fn test_diagonals() {
        let rising = grid_with(
            6,
            7,
            &[
                (5, 0, Cell::One),
                (4, 1, Cell::One),
                (3, 2, Cell::One),
                (2, 3, Cell::One),
            ],
        );
        assert!(has_four_at(&rising, Pos::new(4, 1), Player::One));

        let falling = grid_with(
            6,
            7,
            &[
                (2, 3, Cell::Two),
                (3, 4, Cell::Two),
                (4, 5, Cell::Two),
                (5, 6, Cell::Two),
            ],
        );
        assert!(has_four_at(&falling, Pos::new(3, 4), Player::Two));
    }

    #[test]
    fn test_would_win() {
        let board = Board::from_moves(6, 7, &[0, 6, 1, 6, 2]).unwrap();
        assert!(would_win(&board, 3, Player::One));
        assert!(!would_win(&board, 3, Player::Two));
        assert!(!would_win(&board, 4, Player::One));
        assert!(!would_win(&board, 9, Player::One));
    }

    #[test]
    fn test_winning_line_positions() {
        let board = Board::from_moves(6, 7, &[0, 0, 1, 1, 3, 3, 2]).unwrap();
        let line = winning_line(board.grid(), Pos::new(5, 2)).unwrap();
        assert_eq!(
            line,
            vec![Pos::new(5, 0), Pos::new(5, 1), Pos::new(5, 2), Pos::new(5, 3)]
        );
        assert_eq!(winning_line(board.grid(), Pos::new(4, 0)), None);
    }

    #[test]
    fn test_winning_line_empty_cell() {
        let grid = Grid::new(6, 7);
        assert_eq!(winning_line(&grid, Pos::new(0, 0)), None);
    }
}
