//! Game state management for the Connect Four GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::agent::{Agent, RandomAgent, SearchAgent};
use crate::board::{Board, GameStatus, Player, Pos};
use crate::engine::Engine;
use crate::error::{GameError, MoveError};
use crate::rules::winning_line;

/// Automated opponent selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentKind {
    /// Minimax engine
    Engine,
    /// Uniform random legal column
    Random,
}

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    PvP,
    /// Player vs automated opponent
    PvE { human: Player, opponent: OpponentKind },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human: Player::One,
            opponent: OpponentKind::Engine,
        }
    }
}

/// Answer from the background agent thread
#[derive(Debug, Clone)]
pub struct AiReply {
    pub column: Option<usize>,
    pub agent_name: String,
    pub elapsed: Duration,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<AiReply>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub engine: Engine,
    pub show_eval: bool,
    pub winning_line: Option<Vec<Pos>>,
    pub last_ai_reply: Option<AiReply>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(rows: usize, cols: usize, engine: Engine, mode: GameMode) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(rows, cols)?,
            mode,
            engine,
            show_eval: true,
            winning_line: None,
            last_ai_reply: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
        })
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.winning_line = None;
        self.last_ai_reply = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.message = None;
    }

    /// Switch mode and start a new game
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human, .. } => self.board.current_player() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_game_over() && !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human drop into `col`
    pub fn try_drop(&mut self, col: usize) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_game_over() && !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.execute_move(col).map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, col: usize) -> Result<GameStatus, MoveError> {
        let mover = self.board.current_player();
        let status = self.board.apply_move(col)?;
        debug!("{} drops into column {col}: {status:?}", mover.name());

        self.move_timer.stop();
        self.message = None;

        if let (GameStatus::Won(_), Some(pos)) = (status, self.board.last_move()) {
            self.winning_line = winning_line(self.board.grid(), pos);
        } else if !status.is_terminal() {
            self.move_timer.start();
        }
        Ok(status)
    }

    /// Agent for the automated side, if the mode has one
    fn make_agent(&self) -> Option<Box<dyn Agent + Send>> {
        match self.mode {
            GameMode::PvE {
                opponent: OpponentKind::Engine,
                ..
            } => Some(Box::new(SearchAgent::new(self.engine.clone()))),
            GameMode::PvE {
                opponent: OpponentKind::Random,
                ..
            } => Some(Box::new(RandomAgent::new())),
            GameMode::PvP => None,
        }
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }
        let Some(mut agent) = self.make_agent() else {
            return;
        };

        let board = self.board.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let start = Instant::now();
            let column = agent.choose_move(&board);
            let _ = tx.send(AiReply {
                column,
                agent_name: agent.name().to_string(),
                elapsed: start.elapsed(),
            });
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let reply = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(reply) => reply,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        match reply.column {
            Some(col) => {
                if let Err(e) = self.execute_move(col) {
                    self.message = Some(format!("{} made an illegal move: {e}", reply.agent_name));
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
        self.last_ai_reply = Some(reply);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Static evaluation for the side to move
    pub fn evaluation(&self) -> i32 {
        self.engine.evaluate(&self.board, self.board.current_player())
    }

    /// Undo back to the previous human turn
    pub fn undo(&mut self) {
        if self.is_ai_thinking() || self.board.undo_move().is_none() {
            return;
        }
        // PvE: also take back the human move that preceded the AI reply
        if self.is_ai_turn() {
            self.board.undo_move();
        }

        self.winning_line = None;
        self.message = None;
        self.move_timer.start();
    }
}
