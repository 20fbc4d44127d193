use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Mark, Move};

use super::agent::Agent;

/// An agent that picks uniformly at random from its legal moves.
pub struct RandomAgent {
    mark: Mark,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(mark: Mark) -> Self {
        RandomAgent {
            mark,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fixed-seed variant for reproducible games.
    pub fn seeded(mark: Mark, seed: u64) -> Self {
        RandomAgent {
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, board: &Board) -> Move {
        let moves = board.successor_moves(self.mark);
        assert!(!moves.is_empty(), "no legal moves for {}", self.mark);
        let idx = self.rng.random_range(0..moves.len());
        moves[idx]
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_legal_moves() {
        let mut board = Board::default();
        assert!(board.place(2, 3, Mark::X));
        assert!(board.place(2, 2, Mark::O));

        let mut agent = RandomAgent::seeded(Mark::X, 7);
        for _ in 0..100 {
            let mv = agent.choose_move(&board);
            assert!(board.is_valid_move(mv.row, mv.col, Mark::X));
            assert_eq!(mv.mark, Mark::X);
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::default();
        let mut a = RandomAgent::seeded(Mark::O, 42);
        let mut b = RandomAgent::seeded(Mark::O, 42);
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board), b.choose_move(&board));
        }
    }

    #[test]
    fn test_random_agent_name() {
        assert_eq!(RandomAgent::new(Mark::X).name(), "Random");
    }
}
