//! Core game logic: board representation, marks, move legality, win
//! detection and the turn-taking session.

mod board;
mod mark;
mod session;

pub use board::{Board, GameOutcome, Move, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH};
pub use mark::Mark;
pub use session::GameSession;
