use std::io::{self, BufRead, Write};

use crate::game::{Board, Mark, Move};

use super::agent::Agent;

/// An agent driven by typed `row,col` coordinates (1-based, matching the
/// printed grid). Re-prompts until the input parses and the move is legal.
pub struct HumanAgent {
    mark: Mark,
}

impl HumanAgent {
    pub fn new(mark: Mark) -> Self {
        HumanAgent { mark }
    }
}

/// Parse a 1-based "row,col" pair into 0-based coordinates.
fn parse_coordinates(input: &str) -> Option<(usize, usize)> {
    let (row, col) = input.trim().split_once(',')?;
    let row: usize = row.trim().parse().ok()?;
    let col: usize = col.trim().parse().ok()?;
    // 1-based on the way in
    Some((row.checked_sub(1)?, col.checked_sub(1)?))
}

impl Agent for HumanAgent {
    fn choose_move(&mut self, board: &Board) -> Move {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("Player {} make a move (row,col): ", self.mark);
            let _ = io::stdout().flush();

            let Some(Ok(line)) = lines.next() else {
                panic!("stdin closed while waiting for a move");
            };
            match parse_coordinates(&line) {
                Some((row, col)) if board.is_valid_move(row, col, self.mark) => {
                    return Move {
                        row,
                        col,
                        mark: self.mark,
                    };
                }
                _ => println!("Invalid move."),
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Human"
    }
}
