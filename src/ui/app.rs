//! Main application for the Connect Four GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState, OpponentKind};
use super::theme::*;
use crate::board::{GameStatus, Player};
use crate::config::AppConfig;
use crate::engine::Engine;
use crate::error::GameError;

/// Main Connect Four application
pub struct ConnectFourApp {
    state: GameState,
    board_view: BoardView,
}

impl ConnectFourApp {
    /// Create the app from a validated configuration
    pub fn new(config: &AppConfig, mode: GameMode) -> Result<Self, GameError> {
        let engine = Engine::with_config(config.engine, config.weights);
        Ok(Self {
            state: GameState::new(config.board.rows, config.board.cols, engine, mode)?,
            board_view: BoardView::default(),
        })
    }

    fn mode_label(mode: GameMode) -> String {
        match mode {
            GameMode::PvP => "Human vs Human".to_string(),
            GameMode::PvE { human, opponent } => {
                let opponent = match opponent {
                    OpponentKind::Engine => "Engine",
                    OpponentKind::Random => "Random",
                };
                format!("Human ({}) vs {opponent}", human.name())
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let modes = [
                        GameMode::PvP,
                        GameMode::PvE {
                            human: Player::One,
                            opponent: OpponentKind::Engine,
                        },
                        GameMode::PvE {
                            human: Player::Two,
                            opponent: OpponentKind::Engine,
                        },
                        GameMode::PvE {
                            human: Player::One,
                            opponent: OpponentKind::Random,
                        },
                        GameMode::PvE {
                            human: Player::Two,
                            opponent: OpponentKind::Random,
                        },
                    ];
                    for mode in modes {
                        if ui.button(format!("New Game ({})", Self::mode_label(mode))).clicked() {
                            self.state.set_mode(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Restart (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.state.show_eval, "Evaluation (E)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(Self::mode_label(self.state.mode));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("CONNECT FOUR").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.state.show_eval {
                    ui.add_space(10.0);
                    self.render_eval_card(ui);
                }

                if self.state.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.board.current_player();
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, piece_color(player));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(player.name()).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_BUSY)
                    } else if self.state.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            let elapsed = self
                .state
                .ai_thinking_elapsed()
                .unwrap_or_else(|| self.state.move_timer.elapsed());
            ui.label(
                RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                    .size(20.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                        .clicked()
                    {
                        self.state.undo();
                    }
                });
                ui.add_space(4.0);
                btn_frame.show(ui, |ui| {
                    if ui
                        .add(egui::Label::new(RichText::new("Restart").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                        .clicked()
                    {
                        self.state.reset();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.board.piece_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render evaluation card
    fn render_eval_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("EVALUATION").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let score = self.state.evaluation();
            let color = match score {
                s if s > 0 => STATUS_OK,
                s if s < 0 => STATUS_BAD,
                _ => TEXT_SECONDARY,
            };
            ui.label(
                RichText::new(format!("{score:+}"))
                    .size(20.0)
                    .strong()
                    .color(color),
            );
            ui.label(
                RichText::new(format!("for {}", self.state.board.current_player().name()))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );

            if let Some(reply) = &self.state.last_ai_reply {
                ui.add_space(6.0);
                let column = reply
                    .column
                    .map_or_else(|| "-".to_string(), |c| c.to_string());
                ui.label(
                    RichText::new(format!(
                        "{}: column {column} in {}ms",
                        reply.agent_name,
                        reply.elapsed.as_millis()
                    ))
                    .size(10.0)
                    .color(TEXT_MUTED),
                );
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let text = match self.state.board.status() {
            GameStatus::Won(player) => format!("{} wins!", player.name()),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => return,
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(text).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0)).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input = self.state.is_human_turn() && !self.state.is_ai_thinking();
            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.winning_line.as_deref(),
                accept_input,
            );

            if let Some(col) = clicked {
                if let Err(msg) = self.state.try_drop(col) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::E) {
                self.state.show_eval = !self.state.show_eval;
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for ConnectFourApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling the agent thread and the move timer
        if self.state.is_ai_thinking() || !self.state.is_game_over() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
