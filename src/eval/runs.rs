//! Maximal same-mark runs on the board, the raw material for both win
//! detection and the cutoff heuristic.

use std::collections::HashSet;

use crate::game::{Board, Mark};

/// A maximal straight sequence of one mark's cells in a single direction,
/// recorded by its two endpoints. Endpoints are normalized (lowest row
/// first, then lowest column) so identity does not depend on which end was
/// discovered first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    start_row: usize,
    start_col: usize,
    end_row: usize,
    end_col: usize,
    row_dir: isize,
    col_dir: isize,
    length: usize,
}

impl Run {
    /// Build a run from two endpoints, normalizing their order.
    ///
    /// Panics if either endpoint is off the board: callers derive endpoints
    /// from cells they have already scanned, so an out-of-bounds endpoint
    /// means the scanning logic itself is broken.
    pub fn new(board: &Board, p1: (usize, usize), p2: (usize, usize)) -> Self {
        assert!(
            board.in_bounds(p1.0 as isize, p1.1 as isize)
                && board.in_bounds(p2.0 as isize, p2.1 as isize),
            "run endpoints {p1:?} -> {p2:?} out of bounds"
        );

        let (start, end) = if p1.0 < p2.0 || (p1.0 == p2.0 && p1.1 < p2.1) {
            (p1, p2)
        } else {
            (p2, p1)
        };

        let row_dir = if start.0 < end.0 { 1 } else { 0 };
        let col_dir = match start.1.cmp(&end.1) {
            std::cmp::Ordering::Less => 1,
            std::cmp::Ordering::Greater => -1,
            std::cmp::Ordering::Equal => 0,
        };
        let length = end.0.abs_diff(start.0).max(end.1.abs_diff(start.1)) + 1;

        Run {
            start_row: start.0,
            start_col: start.1,
            end_row: end.0,
            end_col: end.1,
            row_dir,
            col_dir,
            length,
        }
    }

    pub fn start(&self) -> (usize, usize) {
        (self.start_row, self.start_col)
    }

    pub fn end(&self) -> (usize, usize) {
        (self.end_row, self.end_col)
    }

    pub fn direction(&self) -> (isize, isize) {
        (self.row_dir, self.col_dir)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether (row, col) is one of this run's cells.
    fn covers(&self, row: usize, col: usize) -> bool {
        (0..self.length).any(|step| {
            let r = self.start_row as isize + step as isize * self.row_dir;
            let c = self.start_col as isize + step as isize * self.col_dir;
            r == row as isize && c == col as isize
        })
    }

    /// Whether `other` is a (not necessarily strict) sub-segment of this
    /// run: same direction and both of its endpoints among this run's
    /// cells. Collinearity alone is not enough.
    pub fn contains(&self, other: &Run) -> bool {
        if self.row_dir != other.row_dir || self.col_dir != other.col_dir {
            return false;
        }
        self.covers(other.start_row, other.start_col) && self.covers(other.end_row, other.end_col)
    }
}

/// The longest run of `mark` extending strictly forward from (row, col) in
/// direction (d_row, d_col). Returns `None` when the start cell does not
/// hold `mark` or the run would have a single cell.
pub fn longest_run_from(
    board: &Board,
    mark: Mark,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
) -> Option<Run> {
    if board.get(row, col) != Some(mark) {
        return None;
    }

    let (mut r, mut c) = (row as isize, col as isize);
    let mut length = 1;
    while board.in_bounds(r + d_row, c + d_col)
        && board.get((r + d_row) as usize, (c + d_col) as usize) == Some(mark)
    {
        r += d_row;
        c += d_col;
        length += 1;
    }

    if length > 1 {
        Some(Run::new(board, (row, col), (r as usize, c as usize)))
    } else {
        None
    }
}

/// Every maximal run of `mark` on the board. Each cell is probed in the
/// four canonical directions; candidates are folded in with maximal-run
/// deduplication so no retained run is a sub-segment of another.
pub fn all_runs(board: &Board, mark: Mark) -> HashSet<Run> {
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

    let mut runs = HashSet::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.get(row, col) != Some(mark) {
                continue;
            }
            for (d_row, d_col) in DIRECTIONS {
                if let Some(run) = longest_run_from(board, mark, row, col, d_row, d_col) {
                    add_or_replace(&mut runs, run);
                }
            }
        }
    }
    runs
}

/// Insert `candidate` unless an existing run already contains it; any
/// existing runs the candidate contains are evicted first.
fn add_or_replace(runs: &mut HashSet<Run>, candidate: Run) {
    if runs.iter().any(|existing| existing.contains(&candidate)) {
        return;
    }
    runs.retain(|existing| !candidate.contains(existing));
    runs.insert(candidate);
}

/// Count of in-bounds empty cells immediately beyond the run's endpoints,
/// along its own direction. Returns -1 (matching no openness bucket) if the
/// run's endpoint cells are empty or disagree, which would mean the run was
/// not produced by a board scan.
pub fn open_ends(board: &Board, run: &Run) -> i32 {
    let (start_row, start_col) = run.start();
    let (end_row, end_col) = run.end();
    let (d_row, d_col) = run.direction();

    let start_cell = board.get(start_row, start_col);
    let end_cell = board.get(end_row, end_col);
    if start_cell.is_none() || start_cell != end_cell {
        return -1;
    }

    let mut open = 0;
    let before = (start_row as isize - d_row, start_col as isize - d_col);
    if board.in_bounds(before.0, before.1)
        && board.get(before.0 as usize, before.1 as usize).is_none()
    {
        open += 1;
    }
    let beyond = (end_row as isize + d_row, end_col as isize + d_col);
    if board.in_bounds(beyond.0, beyond.1)
        && board.get(beyond.0 as usize, beyond.1 as usize).is_none()
    {
        open += 1;
    }
    open
}

/// Number of `mark`'s maximal runs with exactly `length` cells and exactly
/// `open` open ends.
pub fn count_runs(board: &Board, mark: Mark, open: i32, length: usize) -> usize {
    all_runs(board, mark)
        .iter()
        .filter(|run| run.length() == length && open_ends(board, run) == open)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::default();
        for &(row, col, mark) in marks {
            assert!(board.place(row, col, mark), "setup move ({row}, {col})");
        }
        board
    }

    #[test]
    fn test_run_identity_ignores_endpoint_order() {
        let board = Board::default();
        let a = Run::new(&board, (2, 1), (2, 4));
        let b = Run::new(&board, (2, 4), (2, 1));
        assert_eq!(a, b);
        assert_eq!(a.start(), (2, 1));
        assert_eq!(a.direction(), (0, 1));
        assert_eq!(a.length(), 4);
    }

    #[test]
    fn test_anti_diagonal_direction() {
        let board = Board::default();
        let run = Run::new(&board, (3, 1), (1, 3));
        assert_eq!(run.start(), (1, 3));
        assert_eq!(run.end(), (3, 1));
        assert_eq!(run.direction(), (1, -1));
        assert_eq!(run.length(), 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_run_with_out_of_bounds_endpoint_panics() {
        let board = Board::default();
        let _ = Run::new(&board, (2, 1), (2, 6));
    }

    #[test]
    fn test_contains_requires_direction_and_endpoints() {
        let board = Board::default();
        let long = Run::new(&board, (2, 0), (2, 4));
        let inner = Run::new(&board, (2, 1), (2, 3));
        let vertical = Run::new(&board, (0, 2), (2, 2));
        let overlapping = Run::new(&board, (2, 3), (2, 5));

        assert!(long.contains(&inner));
        assert!(long.contains(&long));
        assert!(!inner.contains(&long));
        assert!(!long.contains(&vertical));
        // shares the cells (2,3)..(2,4) but sticks out past the end
        assert!(!long.contains(&overlapping));
    }

    #[test]
    fn test_longest_run_extends_forward_only() {
        let board = board_with(&[
            (2, 1, Mark::X),
            (2, 2, Mark::X),
            (2, 3, Mark::X),
        ]);

        let from_middle = longest_run_from(&board, Mark::X, 2, 2, 0, 1).unwrap();
        assert_eq!(from_middle.start(), (2, 2));
        assert_eq!(from_middle.end(), (2, 3));
        assert_eq!(from_middle.length(), 2);
    }

    #[test]
    fn test_longest_run_single_cell_is_none() {
        let board = board_with(&[(2, 2, Mark::X)]);
        assert_eq!(longest_run_from(&board, Mark::X, 2, 2, 0, 1), None);
        assert_eq!(longest_run_from(&board, Mark::X, 2, 2, 1, 0), None);
    }

    #[test]
    fn test_longest_run_wrong_start_cell_is_none() {
        let board = board_with(&[(2, 2, Mark::X), (2, 3, Mark::X)]);
        assert_eq!(longest_run_from(&board, Mark::O, 2, 2, 0, 1), None);
        assert_eq!(longest_run_from(&board, Mark::X, 2, 4, 0, 1), None);
    }

    #[test]
    fn test_all_runs_keeps_only_the_maximal_run() {
        let board = board_with(&[
            (2, 1, Mark::X),
            (2, 2, Mark::X),
            (2, 3, Mark::X),
            (2, 4, Mark::X),
        ]);

        let runs = all_runs(&board, Mark::X);
        assert_eq!(runs.len(), 1);
        let run = runs.iter().next().unwrap();
        assert_eq!(run.start(), (2, 1));
        assert_eq!(run.end(), (2, 4));
        assert_eq!(run.length(), 4);
    }

    #[test]
    fn test_all_runs_dedup_invariant_holds_pairwise() {
        // Crossing runs in several directions
        let board = board_with(&[
            (2, 1, Mark::X),
            (2, 2, Mark::X),
            (2, 3, Mark::X),
            (1, 2, Mark::X),
            (3, 2, Mark::X),
            (1, 1, Mark::X),
            (3, 3, Mark::X),
        ]);

        let runs: Vec<Run> = all_runs(&board, Mark::X).into_iter().collect();
        for (i, a) in runs.iter().enumerate() {
            for (j, b) in runs.iter().enumerate() {
                if i != j {
                    assert!(!a.contains(b), "{a:?} contains {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_open_ends_counts_in_bounds_empty_cells() {
        let mut board = board_with(&[(2, 1, Mark::X), (2, 2, Mark::X)]);
        let run = longest_run_from(&board, Mark::X, 2, 1, 0, 1).unwrap();
        assert_eq!(open_ends(&board, &run), 2);

        // block one end
        assert!(board.place(2, 0, Mark::O));
        let run = longest_run_from(&board, Mark::X, 2, 1, 0, 1).unwrap();
        assert_eq!(open_ends(&board, &run), 1);
    }

    #[test]
    fn test_open_ends_at_board_edge() {
        let board = board_with(&[(2, 4, Mark::O), (2, 5, Mark::O)]);
        let run = longest_run_from(&board, Mark::O, 2, 4, 0, 1).unwrap();
        // (2,6) is off the board, only (2,3) counts
        assert_eq!(open_ends(&board, &run), 1);
    }

    #[test]
    fn test_open_ends_always_bucketed_for_scanned_runs() {
        let board = board_with(&[
            (0, 0, Mark::X),
            (0, 1, Mark::X),
            (1, 1, Mark::X),
            (2, 2, Mark::X),
            (1, 0, Mark::X),
        ]);
        for run in all_runs(&board, Mark::X) {
            let open = open_ends(&board, &run);
            assert!((0..=2).contains(&open), "open ends {open} for {run:?}");
        }
    }

    #[test]
    fn test_open_ends_rejects_stale_run() {
        // A run built over empty cells never comes out of all_runs; the
        // defensive check reports it as -1.
        let board = Board::default();
        let stale = Run::new(&board, (2, 1), (2, 3));
        assert_eq!(open_ends(&board, &stale), -1);
    }

    #[test]
    fn test_count_runs_filters_by_length_and_openness() {
        let board = board_with(&[
            (2, 1, Mark::X),
            (2, 2, Mark::X),
            (2, 3, Mark::X),
            (4, 0, Mark::O),
            (4, 1, Mark::O),
        ]);

        assert_eq!(count_runs(&board, Mark::X, 2, 3), 1);
        assert_eq!(count_runs(&board, Mark::X, 1, 3), 0);
        assert_eq!(count_runs(&board, Mark::X, 2, 2), 0);
        // O's pair touches the left edge: one open end
        assert_eq!(count_runs(&board, Mark::O, 1, 2), 1);
        assert_eq!(count_runs(&board, Mark::O, 2, 2), 0);
    }
}
