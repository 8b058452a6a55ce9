use log::debug;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::{Rng, thread_rng};
use web_time::Instant;

use crate::board::Board;
use crate::movegen::allowed_moves;
use crate::types::{Color, Move};

const MIN_SCORE: i32 = i32::MIN;
const MAX_SCORE: i32 = i32::MAX;

/// Plain fixed-depth minimax over material evaluation.
///
/// Ties at the root are broken by a uniform draw from `rng`, so repeated
/// searches of the same position vary among equally good moves.
pub struct Searcher<R: Rng> {
    rng: R,
    nodes: u64,
}

impl Searcher<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(thread_rng())
    }
}

impl Default for Searcher<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Searcher<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, nodes: 0 }
    }

    /// Searches the best move for `turn`, looking `depth` plies ahead.
    /// Returns `None` only when `turn` has no legal move.
    /// A depth of 0 is searched as depth 1.
    pub fn search(&mut self, board: &Board, depth: u8, turn: Color) -> Option<Move> {
        let start_time = Instant::now();
        self.nodes = 0;

        let mut moves = allowed_moves(board, turn);
        if moves.is_empty() {
            return None;
        }
        let depth = depth.max(1);

        let mut best_score = MIN_SCORE;
        let mut tied = Vec::new();
        for (idx, mv) in moves.iter().enumerate() {
            let next = board.apply_move(mv);
            let score = self.minimax(&next, depth - 1, turn.opponent(), turn, false);
            if score > best_score {
                best_score = score;
                tied.clear();
            }
            if score == best_score {
                tied.push(idx);
            }
        }

        let chosen = *tied.choose(&mut self.rng)?;
        debug!(
            "search {turn:?} depth={depth} candidates={} tied={} score={best_score} nodes={} elapsed={:?}",
            moves.len(),
            tied.len(),
            self.nodes,
            start_time.elapsed()
        );
        Some(moves.swap_remove(chosen))
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores `board` from `perspective` with `to_move` to play.
    /// `maximizing` is true exactly on the plies where `perspective` moves.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        to_move: Color,
        perspective: Color,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return board.evaluate(perspective);
        }
        let moves = allowed_moves(board, to_move);
        if moves.is_empty() {
            return board.evaluate(perspective);
        }

        let mut best = if maximizing { MIN_SCORE } else { MAX_SCORE };
        for mv in &moves {
            let next = board.apply_move(mv);
            let score =
                self.minimax(&next, depth - 1, to_move.opponent(), perspective, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

/// Convenience wrapper around [`Searcher`] using the thread-local RNG.
pub fn best_move(board: &Board, depth: u8, turn: Color) -> Option<Move> {
    Searcher::new().search(board, depth, turn)
}
