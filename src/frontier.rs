//! Priority frontier for best-first search.
//!
//! A min-heap of `(Board, Path)` pairs ordered by
//! `heuristic(board) + path length`, with the heuristic supplied at
//! construction. Entries with equal cost pop in heap order, which is not
//! guaranteed stable.

use crate::board::{Board, Move};
use crate::heuristics::Heuristic;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry {
    cost: f64,
    board: Board,
    path: Vec<Move>,
}

// Inverted comparison on the cost so the std max-heap pops the minimum.
// total_cmp gives a total order even for infinite costs.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// A frontier of `(Board, Path)` pairs that pops the entry with the
/// lowest `heuristic + path length` first.
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    heuristic: Heuristic,
}

impl PriorityFrontier {
    pub fn new(heuristic: Heuristic) -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            heuristic,
        }
    }

    /// Inserts a pair, computing its cost as `heuristic(board) + path
    /// length`.
    pub fn push(&mut self, board: Board, path: Vec<Move>) {
        let cost = (self.heuristic)(&board) + path.len() as f64;
        self.heap.push(Entry { cost, board, path });
    }

    /// Removes and returns the cheapest pair, or `None` when exhausted.
    pub fn pop(&mut self) -> Option<(Board, Vec<Move>)> {
        self.heap.pop().map(|entry| (entry.board, entry.path))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
