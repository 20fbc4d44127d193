use tracing::info;

use crate::ai::Agent;

use super::{Board, GameOutcome, Mark, Move};

/// A turn-taking match between two agents over one board.
///
/// The board is expected to arrive with its opening placements already
/// applied (one for each mark, on adjacent interior cells).
pub struct GameSession {
    board: Board,
    agents: [Box<dyn Agent>; 2],
    current: usize,
}

impl GameSession {
    /// Build a session; `first` takes the first turn. The two agents must
    /// play opposing marks.
    pub fn new(board: Board, first: Box<dyn Agent>, second: Box<dyn Agent>) -> Self {
        assert!(
            first.mark() != second.mark(),
            "both agents play {}",
            first.mark()
        );
        GameSession {
            board,
            agents: [first, second],
            current: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.winner()
    }

    /// The mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.agents[self.current].mark()
    }

    /// Let the current agent take its turn, then hand the turn over.
    ///
    /// Returns `None` when the mover has no reachable cell; the turn passes
    /// to the opponent (when both sides are blocked, `winner()` already
    /// reports a draw and the game loop never gets here).
    pub fn step(&mut self) -> Option<Move> {
        let agent = &mut self.agents[self.current];
        let played = if self.board.successor_moves(agent.mark()).is_empty() {
            info!("{} has no legal moves and passes", agent.mark());
            None
        } else {
            let mv = agent.choose_move(&self.board);
            assert!(
                self.board.place(mv.row, mv.col, mv.mark),
                "{} agent returned illegal move {mv}",
                agent.name()
            );
            Some(mv)
        };
        self.current = 1 - self.current;
        played
    }

    /// Run the game loop to completion and return the final outcome.
    pub fn play(&mut self) -> GameOutcome {
        loop {
            match self.board.winner() {
                GameOutcome::InProgress => {
                    self.step();
                }
                outcome => return outcome,
            }
        }
    }
}
