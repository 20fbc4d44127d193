use crate::game::{Board, Mark, Move};

/// Capability interface for anything that can play one side of the game:
/// given the current board, produce a move for the mark it owns.
///
/// The caller is responsible for checking `Board::winner()` before asking
/// for a move; agents may assume at least one legal move exists.
pub trait Agent {
    /// Choose the next move on `board` for this agent's mark.
    fn choose_move(&mut self, board: &Board) -> Move;

    /// The mark this agent plays.
    fn mark(&self) -> Mark;

    /// Display name for logging.
    fn name(&self) -> &str;
}
