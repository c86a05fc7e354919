//! Uniform random legal-column player

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Agent;
use crate::board::Board;

/// Plays a uniformly random legal column
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
    name: String,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible sequence of choices
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        RandomAgent {
            rng,
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        board.valid_moves().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_only_legal_columns() {
        // Columns 0 and 1 full on a 4x4 board
        let board = Board::from_moves(4, 4, &[0, 1, 0, 1, 1, 0, 1, 0]).unwrap();
        let mut agent = RandomAgent::with_seed(42);
        for _ in 0..50 {
            let col = agent.choose_move(&board).unwrap();
            assert!(col == 2 || col == 3);
        }
    }

    #[test]
    fn test_random_agent_seed_is_reproducible() {
        let board = Board::default();
        let mut a = RandomAgent::with_seed(9);
        let mut b = RandomAgent::with_seed(9);
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board), b.choose_move(&board));
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut board = Board::default();
        let mut agent = RandomAgent::with_seed(3);
        while let Some(col) = agent.choose_move(&board) {
            board.apply_move(col).unwrap();
        }
        assert!(board.is_terminal());
    }
}
