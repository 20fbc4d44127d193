use std::fmt;

use crate::eval::runs;

use super::Mark;

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 6;
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// The placement of `mark` at an empty, legally reachable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub mark: Mark,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-based for display, matching the printed grid
        write!(f, "[{},{}]", self.row + 1, self.col + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Mark),
    Draw,
}

/// Grid state as a value type: cloning yields an independent snapshot,
/// so no two owners ever alias the same mutable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    cells: Vec<Option<Mark>>,
}

impl Board {
    /// Create an empty board with the given dimensions and win length.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        Board {
            rows,
            cols,
            win_length,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Get the mark at a position, `None` if empty.
    /// Panics if (row, col) is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        assert!(
            self.in_bounds(row as isize, col as isize),
            "cell ({row}, {col}) out of bounds"
        );
        self.cells[row * self.cols + col]
    }

    /// Check if a signed (row, col) pair lies on the board.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Place a piece if the move is valid. Returns whether the board changed;
    /// an invalid move is a silent no-op.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if !self.is_valid_move(row, col, mark) {
            return false;
        }
        self.cells[row * self.cols + col] = Some(mark);
        true
    }

    /// A move is valid when the cell is in bounds and empty, and either the
    /// mark has no pieces on the board yet (first placement is free) or one
    /// of the 8 neighboring cells holds the same mark. Neighbors falling off
    /// the board edge are skipped, not errors.
    pub fn is_valid_move(&self, row: usize, col: usize, mark: Mark) -> bool {
        if !self.in_bounds(row as isize, col as isize) {
            return false;
        }
        if self.cells[row * self.cols + col].is_some() {
            return false;
        }

        if !self.has_mark(mark) {
            return true;
        }

        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (nr, nc) = (row as isize + dr, col as isize + dc);
                if self.in_bounds(nr, nc)
                    && self.cells[nr as usize * self.cols + nc as usize] == Some(mark)
                {
                    return true;
                }
            }
        }
        false
    }

    /// All valid moves for `mark`, in row-major scan order. The order is an
    /// iteration detail but must stay deterministic for reproducible search.
    pub fn successor_moves(&self, mark: Mark) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.is_valid_move(row, col, mark) {
                    moves.push(Move { row, col, mark });
                }
            }
        }
        moves
    }

    /// Resolve the board outcome from the current position.
    ///
    /// A mark wins when it owns at least one maximal run of exactly
    /// `win_length` cells, counted across all openness buckets. Because only
    /// maximal runs are retained, a connected run strictly longer than
    /// `win_length` never counts as a win here; that behavior is intentional
    /// and relied upon by callers.
    pub fn winner(&self) -> GameOutcome {
        let mut x_wins = 0;
        let mut o_wins = 0;
        for open in 0..=2 {
            x_wins += runs::count_runs(self, Mark::X, open, self.win_length);
            o_wins += runs::count_runs(self, Mark::O, open, self.win_length);
        }

        // Simultaneous wins cannot arise under alternating play; handled
        // defensively by comparing counts.
        if x_wins > 0 && o_wins > 0 {
            return match x_wins.cmp(&o_wins) {
                std::cmp::Ordering::Greater => GameOutcome::Win(Mark::X),
                std::cmp::Ordering::Less => GameOutcome::Win(Mark::O),
                std::cmp::Ordering::Equal => GameOutcome::Draw,
            };
        }
        if x_wins > 0 {
            return GameOutcome::Win(Mark::X);
        }
        if o_wins > 0 {
            return GameOutcome::Win(Mark::O);
        }

        if self.successor_moves(Mark::X).is_empty() && self.successor_moves(Mark::O).is_empty() {
            return GameOutcome::Draw;
        }
        GameOutcome::InProgress
    }

    fn has_mark(&self, mark: Mark) -> bool {
        self.cells.iter().any(|&c| c == Some(mark))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_WIN_LENGTH)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "+---".repeat(self.cols) + "+";
        for row in 0..self.rows {
            writeln!(f, "{separator}")?;
            for col in 0..self.cols {
                let symbol = match self.get(row, col) {
                    Some(mark) => mark.symbol(),
                    None => ' ',
                };
                write!(f, "| {symbol} ")?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{separator}")
    }
}
