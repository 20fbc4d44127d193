use crate::game::{Board, Mark};

use super::runs;

/// Static evaluation of a board from one mark's perspective.
pub trait Heuristic: Send {
    /// Score the position for `mark`; positive favors `mark`.
    fn evaluate(&self, board: &Board, mark: Mark) -> i32;
}

/// Scores runs one and two cells short of the win length, bucketed by how
/// many open ends they have. Offensive patterns are weighted roughly 2.5x
/// the matching defensive ones; the exact weights are tuned and must not
/// drift, since identical boards have to keep producing identical scores.
pub struct RunHeuristic;

impl RunHeuristic {
    const OWN_WEIGHTS: [(i32, i32, usize); 4] = [(200, 2, 1), (150, 1, 1), (20, 2, 2), (5, 1, 2)];
    const OPP_WEIGHTS: [(i32, i32, usize); 4] = [(80, 2, 1), (40, 1, 1), (15, 2, 2), (2, 1, 2)];

    fn side_score(board: &Board, mark: Mark, weights: &[(i32, i32, usize)]) -> i32 {
        let win = board.win_length();
        weights
            .iter()
            .map(|&(weight, open, short_of_win)| {
                weight * runs::count_runs(board, mark, open, win - short_of_win) as i32
            })
            .sum()
    }
}

impl Heuristic for RunHeuristic {
    fn evaluate(&self, board: &Board, mark: Mark) -> i32 {
        let own = Self::side_score(board, mark, &Self::OWN_WEIGHTS);
        let opp = Self::side_score(board, mark.other(), &Self::OPP_WEIGHTS);
        own - opp
    }
}
