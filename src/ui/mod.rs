//! GUI module for the Connect Four game
//!
//! This module provides a native Rust GUI using egui/eframe. It owns no rule
//! logic: clicks go to [`Board::apply_move`](crate::Board::apply_move) and
//! automated turns go through the [`Agent`](crate::agent::Agent) trait.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::ConnectFourApp;
pub use game_state::{GameMode, GameState, OpponentKind};
