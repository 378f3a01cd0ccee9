//! Cost-remaining heuristics for the informed search engines.
//!
//! Each heuristic is a pure function `&Board -> f64`; lower values mean
//! the board is estimated to be closer to the goal. All four share the
//! same contract: a goal board scores `0.0`, a non-goal board with no
//! legal moves scores `f64::INFINITY` (a dead end), and otherwise the
//! estimate below applies. None of them is proven admissible, so
//! best-first search is not guaranteed to return shortest paths.

use crate::board::{Board, Cell, Move};
use std::collections::HashSet;

/// A pluggable cost-remaining estimate for the informed engines.
pub type Heuristic = fn(&Board) -> f64;

/// Returns the base cost `pegs - 1` and the collected legal moves, or
/// `Err` with the terminal score already decided.
fn remaining(board: &Board) -> Result<(f64, Vec<Move>), f64> {
    if board.is_goal() {
        return Err(0.0);
    }
    let moves: Vec<Move> = board.possible_moves().collect();
    if moves.is_empty() {
        return Err(f64::INFINITY);
    }
    Ok((board.peg_count() as f64 - 1.0, moves))
}

/// `pegs - 1 - (pegs with at least one legal move) / pegs`.
///
/// Prefers boards where many distinct pegs can still move.
pub fn max_moves(board: &Board) -> f64 {
    match remaining(board) {
        Ok((base, moves)) => {
            let sources: HashSet<(usize, usize)> = moves.iter().map(|mv| mv.source).collect();
            base - sources.len() as f64 / board.peg_count() as f64
        }
        Err(score) => score,
    }
}

/// `pegs - 1 - moves / (moves + 1)`.
///
/// Prefers boards with a large total move count.
pub fn min_moves(board: &Board) -> f64 {
    match remaining(board) {
        Ok((base, moves)) => {
            let m = moves.len() as f64;
            base - m / (m + 1.0)
        }
        Err(score) => score,
    }
}

/// `pegs - 1 - 1 / (moves + 1)`.
///
/// A weaker variant of `min_moves` that only nudges the base cost.
pub fn max_movable_pegs(board: &Board) -> f64 {
    match remaining(board) {
        Ok((base, moves)) => base - 1.0 / (moves.len() as f64 + 1.0),
        Err(score) => score,
    }
}

/// The all-pairs Manhattan spread: the sum of Manhattan distances over
/// all ordered pairs of pegs, divided by the peg count. Clustered pegs
/// score low, scattered pegs score high.
pub fn manhattan_cost(board: &Board) -> f64 {
    if let Err(score) = remaining(board) {
        return score;
    }

    let mut pegs = Vec::new();
    for r in 0..board.size() {
        for c in 0..board.size() {
            if board.cell(r, c) == Cell::Peg {
                pegs.push((r as isize, c as isize));
            }
        }
    }

    let mut spread = 0.0;
    for &(r, c) in &pegs {
        for &(rr, cc) in &pegs {
            spread += ((r - rr).abs() + (c - cc).abs()) as f64;
        }
    }
    spread / pegs.len() as f64
}
