//! Theme constants for the Connect Four GUI

use egui::Color32;

use crate::board::Player;

// Board colors - classic blue frame
pub const BOARD_BG: Color32 = Color32::from_rgb(30, 80, 180);
pub const HOLE: Color32 = Color32::from_rgb(20, 22, 28);

// Piece colors
pub const PLAYER_ONE: Color32 = Color32::from_rgb(220, 50, 50);
pub const PLAYER_ONE_HIGHLIGHT: Color32 = Color32::from_rgb(245, 110, 110);
pub const PLAYER_TWO: Color32 = Color32::from_rgb(240, 200, 40);
pub const PLAYER_TWO_HIGHLIGHT: Color32 = Color32::from_rgb(255, 230, 120);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_column() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 30)
}

pub fn piece_color(player: Player) -> Color32 {
    match player {
        Player::One => PLAYER_ONE,
        Player::Two => PLAYER_TWO,
    }
}

pub fn piece_highlight(player: Player) -> Color32 {
    match player {
        Player::One => PLAYER_ONE_HIGHLIGHT,
        Player::Two => PLAYER_TWO_HIGHLIGHT,
    }
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);
pub const STATUS_BAD: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.42;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
