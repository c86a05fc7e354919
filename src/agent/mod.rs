//! Automated players
//!
//! Anything that can pick a column for the side to move implements
//! [`Agent`]. The GUI and the tests drive every automated player through
//! this one trait.

pub mod network;
pub mod random;

use crate::board::Board;
use crate::engine::Engine;

pub use network::{encode_board, NetworkAgent};
pub use random::RandomAgent;

/// Core trait for automated players
pub trait Agent {
    /// Column to play for the side to move, `None` if no column is legal
    fn choose_move(&mut self, board: &Board) -> Option<usize>;

    /// Display name
    fn name(&self) -> &str;
}

/// Agent backed by the minimax engine at its configured depth
#[derive(Debug, Clone)]
pub struct SearchAgent {
    engine: Engine,
    name: String,
}

impl SearchAgent {
    pub fn new(engine: Engine) -> Self {
        let name = format!("Minimax (depth {})", engine.config().depth);
        Self { engine, name }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Default for SearchAgent {
    fn default() -> Self {
        Self::new(Engine::new())
    }
}

impl Agent for SearchAgent {
    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        self.engine.get_move(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_agent_plays_engine_move() {
        let board = Board::from_moves(6, 7, &[0, 6, 1, 6, 2, 5]).unwrap();
        let mut agent = SearchAgent::new(Engine::with_depth(3));
        assert_eq!(agent.choose_move(&board), Some(3));
        assert_eq!(agent.name(), "Minimax (depth 3)");
    }

    #[test]
    fn test_agents_as_trait_objects() {
        let board = Board::default();
        let mut agents: Vec<Box<dyn Agent + Send>> = vec![
            Box::new(SearchAgent::new(Engine::new())),
            Box::new(RandomAgent::with_seed(7)),
            Box::new(NetworkAgent::new(|input: &[f32]| vec![0.0; input.len()])),
        ];
        for agent in &mut agents {
            let col = agent.choose_move(&board).unwrap();
            assert!(board.is_valid_move(col), "{}", agent.name());
        }
    }

    #[test]
    fn test_agents_on_finished_game() {
        let board = Board::from_moves(6, 7, &[3, 0, 3, 0, 3, 0, 3]).unwrap();
        assert_eq!(SearchAgent::default().choose_move(&board), None);
        assert_eq!(RandomAgent::with_seed(1).choose_move(&board), None);
    }
}
