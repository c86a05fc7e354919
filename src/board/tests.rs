use super::*;
use crate::error::{GameError, MoveError};

/// A full 6x7 game in which neither side ever gets four in a row
const DRAW_SEQUENCE: [usize; 42] = [
    0, 1, 0, 1, 0, 1, //
    1, 0, 1, 0, 1, 0, //
    2, 3, 2, 3, 2, 3, //
    3, 2, 3, 2, 3, 2, //
    4, 5, 4, 5, 4, 5, //
    5, 4, 5, 4, 5, 4, //
    6, 6, 6, 6, 6, 6,
];

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
    assert_eq!(Player::One.cell(), Cell::One);
    assert_eq!(Cell::Two.player(), Some(Player::Two));
    assert_eq!(Cell::Empty.player(), None);
}

#[test]
fn test_new_board() {
    let board = Board::new(6, 7).unwrap();
    assert_eq!(board.rows(), 6);
    assert_eq!(board.cols(), 7);
    assert_eq!(board.current_player(), Player::One);
    assert_eq!(board.status(), GameStatus::InProgress);
    assert!(!board.is_terminal());
    assert_eq!(board.last_move(), None);
    assert_eq!(board.valid_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    assert!(board.snapshot().iter().flatten().all(|c| c.is_empty()));
}

#[test]
fn test_default_is_classic_size() {
    let board = Board::default();
    assert_eq!(board, Board::new(DEFAULT_ROWS, DEFAULT_COLS).unwrap());
    assert_eq!(board.center_col(), 3);
}

#[test]
fn test_board_size_limits() {
    assert_eq!(
        Board::new(3, 7).unwrap_err(),
        GameError::InvalidConfiguration { rows: 3, cols: 7 }
    );
    assert!(Board::new(6, 3).is_err());
    assert!(Board::new(17, 7).is_err());
    assert!(Board::new(4, 4).is_ok());
    assert!(Board::new(16, 16).is_ok());
}

#[test]
fn test_gravity() {
    let mut board = Board::default();
    board.apply_move(3).unwrap();
    board.apply_move(3).unwrap();
    assert_eq!(board.get(5, 3), Cell::One);
    assert_eq!(board.get(4, 3), Cell::Two);
    assert_eq!(board.get(3, 3), Cell::Empty);
    assert_eq!(board.last_move(), Some(Pos::new(4, 3)));
    assert_eq!(board.landing_row(3), Some(3));
}

#[test]
fn test_players_alternate() {
    let mut board = Board::default();
    for (i, col) in [0, 1, 2, 3, 4, 5].into_iter().enumerate() {
        let expected = if i % 2 == 0 { Player::One } else { Player::Two };
        assert_eq!(board.current_player(), expected);
        assert_eq!(board.apply_move(col), Ok(GameStatus::InProgress));
    }
}

#[test]
fn test_invalid_moves_leave_board_untouched() {
    let mut board = Board::new(4, 4).unwrap();
    for _ in 0..4 {
        board.apply_move(0).unwrap();
    }
    let before = board.clone();

    assert_eq!(board.apply_move(0), Err(MoveError::ColumnFull(0)));
    assert_eq!(
        board.apply_move(4),
        Err(MoveError::ColumnOutOfRange { col: 4, cols: 4 })
    );
    assert_eq!(board, before);
    assert_eq!(board.valid_moves(), vec![1, 2, 3]);
}

#[test]
fn test_vertical_win_column_three() {
    // Player One stacks column 3 while Player Two answers in column 0
    let mut board = Board::default();
    for _ in 0..3 {
        assert_eq!(board.apply_move(3), Ok(GameStatus::InProgress));
        assert_eq!(board.apply_move(0), Ok(GameStatus::InProgress));
    }
    assert_eq!(board.apply_move(3), Ok(GameStatus::Won(Player::One)));
    assert_eq!(board.winner(), Some(Player::One));
    // Winner keeps the turn marker; nothing else is accepted
    assert_eq!(board.current_player(), Player::One);
    assert_eq!(board.apply_move(1), Err(MoveError::GameOver));
    assert!(board.valid_moves().is_empty());
}

#[test]
fn test_horizontal_win_completed_in_the_middle() {
    // One: 0, 1, 3 then 2 completes 0-1-2-3 from the inside
    let mut board = Board::default();
    for col in [0, 0, 1, 1, 3, 3] {
        board.apply_move(col).unwrap();
    }
    assert_eq!(board.status(), GameStatus::InProgress);
    assert_eq!(board.apply_move(2), Ok(GameStatus::Won(Player::One)));
}

#[test]
fn test_diagonal_up_win() {
    // "/" from (5,0) to (2,3)
    let board = Board::from_moves(6, 7, &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]).unwrap();
    assert_eq!(board.status(), GameStatus::Won(Player::One));
}

#[test]
fn test_diagonal_down_win() {
    // "\" from (2,3) to (5,6)
    let board = Board::from_moves(6, 7, &[6, 5, 5, 4, 4, 3, 4, 3, 3, 0, 3]).unwrap();
    assert_eq!(board.status(), GameStatus::Won(Player::One));
}

#[test]
fn test_no_win_before_fourth_piece() {
    let board = Board::from_moves(6, 7, &[0, 6, 1, 6, 2]).unwrap();
    assert_eq!(board.status(), GameStatus::InProgress);
    assert_eq!(board.current_player(), Player::Two);
}

#[test]
fn test_full_board_draw() {
    let mut board = Board::default();
    for (i, &col) in DRAW_SEQUENCE.iter().enumerate() {
        let status = board.apply_move(col).unwrap();
        if i + 1 < DRAW_SEQUENCE.len() {
            assert_eq!(status, GameStatus::InProgress, "unexpected end at move {i}");
        } else {
            assert_eq!(status, GameStatus::Draw);
        }
    }
    assert!(board.is_terminal());
    assert_eq!(board.winner(), None);
    assert!(board.valid_moves().is_empty());
    for col in 0..7 {
        assert_eq!(board.apply_move(col), Err(MoveError::GameOver));
    }
}

#[test]
fn test_undo_restores_previous_board() {
    let mut board = Board::from_moves(6, 7, &[3, 2, 3]).unwrap();
    let before = board.clone();
    board.apply_move(4).unwrap();
    assert_eq!(board.undo_move(), Some(4));
    assert_eq!(board, before);
}

#[test]
fn test_undo_reopens_finished_game() {
    let mut board = Board::from_moves(6, 7, &[3, 0, 3, 0, 3, 0]).unwrap();
    let before = board.clone();
    board.apply_move(3).unwrap();
    assert!(board.is_terminal());
    board.undo_move();
    assert_eq!(board, before);
    assert_eq!(board.current_player(), Player::One);
}

#[test]
fn test_undo_on_empty_board() {
    let mut board = Board::default();
    assert_eq!(board.undo_move(), None);
}

#[test]
fn test_reset() {
    let mut board = Board::from_moves(5, 5, &[0, 1, 2]).unwrap();
    board.reset();
    assert_eq!(board, Board::new(5, 5).unwrap());
}

#[test]
fn test_clone_is_independent() {
    let board = Board::from_moves(6, 7, &[3]).unwrap();
    let mut copy = board.clone();
    copy.apply_move(3).unwrap();
    assert_eq!(board.piece_count(), 1);
    assert_eq!(copy.piece_count(), 2);
    assert_eq!(board.get(4, 3), Cell::Empty);
}

#[test]
fn test_move_history() {
    let board = Board::from_moves(6, 7, &[3, 2, 4]).unwrap();
    assert_eq!(board.move_history(), vec![3, 2, 4]);
    assert_eq!(board.piece_count(), 3);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 6) < Pos::new(1, 0));
    assert!(Pos::new(2, 1) < Pos::new(2, 2));
}
