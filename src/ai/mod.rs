//! Move-choosing agents: the minimax engine plus human and random players
//! behind a common trait.

mod agent;
mod human;
mod minimax;
mod random;

pub use agent::Agent;
pub use human::HumanAgent;
pub use minimax::{
    MinimaxAgent, MinimaxEngine, SearchNode, SearchReport, DRAW_SCORE, LOSS_SCORE, WIN_SCORE,
};
pub use random::RandomAgent;
