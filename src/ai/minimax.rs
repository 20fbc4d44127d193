use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::eval::{Heuristic, RunHeuristic};
use crate::game::{Board, GameOutcome, Mark, Move};

use super::agent::Agent;

/// Utility values for terminal positions, always from the root mark's
/// perspective.
pub const WIN_SCORE: i32 = 1000;
pub const LOSS_SCORE: i32 = -1000;
pub const DRAW_SCORE: i32 = 0;

/// One position in the search tree: a board snapshot, the mark to move,
/// and the distance from the root in plies.
pub struct SearchNode {
    board: Board,
    mover: Mark,
    depth: usize,
}

impl SearchNode {
    pub fn new(board: Board, mover: Mark, depth: usize) -> Self {
        SearchNode {
            board,
            mover,
            depth,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mover(&self) -> Mark {
        self.mover
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Materialize this node's children: one clone of the board per legal
    /// move of the mover, with the opposing mark to move one ply deeper.
    /// Only the immediate children are built; deeper layers wait until the
    /// recursion reaches them.
    pub fn expand(&self) -> Vec<SearchNode> {
        self.board
            .successor_moves(self.mover)
            .into_iter()
            .map(|mv| {
                let mut next = self.board.clone();
                next.place(mv.row, mv.col, mv.mark);
                SearchNode::new(next, self.mover.other(), self.depth + 1)
            })
            .collect()
    }
}

/// Outcome of one top-level decision.
#[derive(Debug, Clone, Copy)]
pub struct SearchReport {
    /// Best move found
    pub chosen: Move,
    /// Minimax value of the chosen move
    pub value: i32,
    /// Number of nodes materialized during the search
    pub nodes: u64,
    /// Wall-clock time spent deciding
    pub elapsed: Duration,
}

/// Fixed-depth, full-width minimax. No pruning, no caching, no move
/// ordering: every legal line is evaluated to the configured ply depth.
pub struct MinimaxEngine {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxEngine {
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(RunHeuristic))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        assert!(depth >= 1, "search depth must be at least one ply");
        MinimaxEngine { depth, heuristic }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pick the move for `mark` that maximizes the minimized value.
    ///
    /// Ties resolve to the first move reaching the maximum, in
    /// `successor_moves` order. The caller must ensure at least one legal
    /// move exists (check `winner()` first); this is asserted.
    pub fn decide(&self, board: &Board, mark: Mark) -> SearchReport {
        let start = Instant::now();
        // Plain instrumentation; atomic only as a safety margin, the search
        // itself is strictly single-threaded.
        let nodes = AtomicU64::new(0);

        let legal = board.successor_moves(mark);
        assert!(!legal.is_empty(), "no legal moves for {mark}");

        let mut best: Option<(Move, i32)> = None;
        for mv in legal {
            let mut next = board.clone();
            next.place(mv.row, mv.col, mv.mark);
            nodes.fetch_add(1, Ordering::Relaxed);

            let child = SearchNode::new(next, mark.other(), 1);
            let value = self.min_value(&child, mark, &nodes);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        let (chosen, value) = best.expect("legal moves were evaluated");
        let elapsed = start.elapsed();
        let nodes = nodes.into_inner();
        debug!(%chosen, value, nodes, ?elapsed, "minimax decision");

        SearchReport {
            chosen,
            value,
            nodes,
            elapsed,
        }
    }

    fn max_value(&self, node: &SearchNode, root: Mark, nodes: &AtomicU64) -> i32 {
        // Depth cutoff is checked before the terminal check; a node sitting
        // at the ply limit is scored by the heuristic even if the game is
        // over there.
        if node.depth() == self.depth {
            return self.heuristic.evaluate(node.board(), root);
        }
        match node.board().winner() {
            GameOutcome::Win(mark) if mark == root => return WIN_SCORE,
            GameOutcome::Win(_) => return LOSS_SCORE,
            GameOutcome::Draw => return DRAW_SCORE,
            GameOutcome::InProgress => {}
        }

        let mut value = i32::MIN;
        for child in node.expand() {
            nodes.fetch_add(1, Ordering::Relaxed);
            value = value.max(self.min_value(&child, root, nodes));
        }
        value
    }

    fn min_value(&self, node: &SearchNode, root: Mark, nodes: &AtomicU64) -> i32 {
        if node.depth() == self.depth {
            return self.heuristic.evaluate(node.board(), root);
        }
        match node.board().winner() {
            GameOutcome::Win(mark) if mark == root => return WIN_SCORE,
            GameOutcome::Win(_) => return LOSS_SCORE,
            GameOutcome::Draw => return DRAW_SCORE,
            GameOutcome::InProgress => {}
        }

        let mut value = i32::MAX;
        for child in node.expand() {
            nodes.fetch_add(1, Ordering::Relaxed);
            value = value.min(self.max_value(&child, root, nodes));
        }
        value
    }
}

/// Agent wrapper around the engine: owns its mark and search depth.
pub struct MinimaxAgent {
    mark: Mark,
    engine: MinimaxEngine,
}

impl MinimaxAgent {
    pub fn new(mark: Mark, depth: usize) -> Self {
        MinimaxAgent {
            mark,
            engine: MinimaxEngine::new(depth),
        }
    }
}

impl Agent for MinimaxAgent {
    fn choose_move(&mut self, board: &Board) -> Move {
        let report = self.engine.decide(board, self.mark);
        info!(
            "{} made move {} and generated {} nodes in {:.2?}",
            self.mark, report.chosen, report.nodes, report.elapsed
        );
        report.chosen
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
