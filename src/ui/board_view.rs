//! Board rendering for the Connect Four GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use crate::board::{Board, Player, Pos};

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<&[Pos]>,
        accept_input: bool,
    ) -> Option<usize> {
        let rows = board.rows() as f32;
        let cols = board.cols() as f32;
        let available = ui.available_size() - Vec2::splat(20.0);

        // Square cells that fit the available space
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / cols)
            .min((available.y - 2.0 * BOARD_MARGIN) / rows)
            .max(8.0);
        let size = Vec2::new(
            cols * self.cell_size + 2.0 * BOARD_MARGIN,
            rows * self.cell_size + 2.0 * BOARD_MARGIN,
        );

        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(10), BOARD_BG);

        let hovered_col = if accept_input && !board.is_terminal() {
            response
                .hover_pos()
                .and_then(|p| self.screen_to_column(p, board.cols()))
        } else {
            None
        };

        if let Some(col) = hovered_col {
            self.draw_column_highlight(&painter, col, board.rows());
        }

        self.draw_cells(&painter, board);

        if let Some(pos) = board.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if let Some(col) = hovered_col {
            if let Some(row) = board.landing_row(col) {
                self.draw_drop_preview(&painter, Pos::new(row as u8, col as u8), board.current_player());
            }
            if response.clicked() {
                return Some(col);
            }
        }

        None
    }

    /// Draw every hole, filled or empty
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let pos = Pos::new(row as u8, col as u8);
                let center = self.board_to_screen(pos);
                match board.get(row, col).player() {
                    Some(player) => self.draw_piece(painter, center, radius, player),
                    None => {
                        painter.circle_filled(center, radius, HOLE);
                    }
                }
            }
        }
    }

    /// Draw a single piece with a small highlight
    fn draw_piece(&self, painter: &Painter, center: Pos2, radius: f32, player: Player) {
        painter.circle_filled(
            center + Vec2::new(1.5, 1.5),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, piece_color(player));
        painter.circle_stroke(
            center,
            radius * 0.75,
            Stroke::new(radius * 0.08, piece_highlight(player)),
        );
    }

    fn draw_column_highlight(&self, painter: &Painter, col: usize, rows: usize) {
        let min = self.board_rect.min + Vec2::new(BOARD_MARGIN + col as f32 * self.cell_size, BOARD_MARGIN);
        let rect = Rect::from_min_size(min, Vec2::new(self.cell_size, rows as f32 * self.cell_size));
        painter.rect_filled(rect, CornerRadius::same(6), hover_column());
    }

    /// Translucent piece where a click would land
    fn draw_drop_preview(&self, painter: &Painter, pos: Pos, player: Player) {
        let color = piece_color(player);
        let preview = Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 110);
        painter.circle_filled(
            self.board_to_screen(pos),
            self.cell_size * PIECE_RADIUS_RATIO,
            preview,
        );
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                stroke,
            );
        }

        let radius = self.cell_size * PIECE_RADIUS_RATIO + 2.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Column under a screen position
    pub fn screen_to_column(&self, screen_pos: Pos2, cols: usize) -> Option<usize> {
        let x = screen_pos.x - self.board_rect.min.x - BOARD_MARGIN;
        if x < 0.0 {
            return None;
        }
        let col = (x / self.cell_size).floor() as usize;
        (col < cols).then_some(col)
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
