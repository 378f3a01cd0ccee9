//! Search engines for peg solitaire.
//!
//! Four engines over the immutable `Board` model:
//! - `DepthFirstSearch`: tree search over the full move tree.
//! - `BreadthFirstSearch`: FIFO frontier, optionally with duplicate and
//!   symmetry checking; the first path it yields is a shortest one.
//! - `AStar`: best-first search over a `PriorityFrontier` ordered by
//!   `heuristic + path length`.
//! - `IterativeDeepeningAStar`: bounded-memory best-first search that
//!   re-expands shallow states instead of keeping a frontier.
//!
//! DFS, BFS and A* implement `Iterator<Item = Path>` and lazily yield
//! every goal path in discovery order; consuming only the first item is
//! the usual way to run them. "No solution" is an exhausted iterator (or
//! `None` from `IterativeDeepeningAStar::search`), never a panic. After
//! a search concludes, every engine reports how many states it expanded
//! (`nodes_visited`) and the peak size of its frontier or recursion
//! depth (`peak_space`).

use crate::board::{Board, Move};
use crate::frontier::PriorityFrontier;
use crate::heuristics::Heuristic;
use std::collections::{HashSet, VecDeque};

/// An ordered move sequence leading from a start board to a goal board.
pub type Path = Vec<Move>;

/// Duplicate-state policy for the frontier-based engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicateCheck {
    /// Tree search: identical boards reached along different paths are
    /// re-expanded.
    Off,
    /// Graph search: a successor equal to an already-visited board is
    /// skipped.
    Exact,
    /// Graph search that also records the three rotations of every
    /// visited board, so rotational images count as visited too. Only
    /// sound when the board's direction list is itself invariant under
    /// rotation (`all` always; `ortho` under any quarter turn; `swne`
    /// under a half turn only) — with other direction lists a rotated
    /// "duplicate" may in fact allow different moves.
    Symmetric,
}

/// Append-only set of expanded boards, hashed on grid contents.
struct VisitedSet {
    boards: HashSet<Board>,
    mode: DuplicateCheck,
}

impl VisitedSet {
    fn new(mode: DuplicateCheck) -> Self {
        VisitedSet {
            boards: HashSet::new(),
            mode,
        }
    }

    /// True if the board was already recorded; otherwise records it
    /// (plus its rotations in `Symmetric` mode) and returns false.
    fn check_and_record(&mut self, board: &Board) -> bool {
        if self.mode == DuplicateCheck::Off {
            return false;
        }
        if self.boards.contains(board) {
            return true;
        }
        self.boards.insert(board.clone());
        if self.mode == DuplicateCheck::Symmetric {
            for rotation in board.symmetric_boards() {
                self.boards.insert(rotation);
            }
        }
        false
    }

    fn len(&self) -> usize {
        self.boards.len()
    }
}

/// Depth-first tree search.
///
/// An explicit stack replays the recursive pre-order walk: a state is
/// expanded, its successors are pushed so that the first-generated move
/// is explored first, and the accumulated path is yielded whenever the
/// state is a goal. No deduplication is performed; memory is
/// proportional to the deepest branch explored.
pub struct DepthFirstSearch {
    stack: Vec<(Board, Path)>,
    nodes_visited: u64,
    peak_space: usize,
}

impl DepthFirstSearch {
    pub fn new(start: Board) -> Self {
        DepthFirstSearch {
            stack: vec![(start, Vec::new())],
            nodes_visited: 0,
            peak_space: 0,
        }
    }

    /// States expanded so far.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Deepest recursion depth reached (start state counts as depth 1).
    pub fn peak_space(&self) -> usize {
        self.peak_space
    }
}

impl Iterator for DepthFirstSearch {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        while let Some((state, path)) = self.stack.pop() {
            self.nodes_visited += 1;
            self.peak_space = self.peak_space.max(path.len() + 1);

            let successors: Vec<(Move, Board)> = state.successors().collect();
            for (mv, board) in successors.into_iter().rev() {
                let mut next_path = path.clone();
                next_path.push(mv);
                self.stack.push((board, next_path));
            }

            if state.is_goal() {
                return Some(path);
            }
        }
        None
    }
}

/// Breadth-first search with an explicit FIFO frontier.
///
/// Successors are goal-tested on generation: a successor that is already
/// a goal yields its path immediately and is never enqueued. Because
/// every move removes exactly one peg the state graph is layered by peg
/// count, so the first yielded path is a shortest one whether or not
/// duplicate checking is enabled.
pub struct BreadthFirstSearch {
    frontier: VecDeque<(Board, Path)>,
    // Goal paths discovered while expanding a single state, handed out
    // one `next()` call at a time in discovery order.
    pending: VecDeque<Path>,
    visited: VisitedSet,
    nodes_visited: u64,
    peak_space: usize,
}

impl BreadthFirstSearch {
    pub fn new(start: Board, duplicates: DuplicateCheck) -> Self {
        let mut frontier = VecDeque::new();
        let mut pending = VecDeque::new();
        if start.is_goal() {
            // Already solved: report the zero-length path.
            pending.push_back(Vec::new());
        } else {
            frontier.push_back((start, Vec::new()));
        }
        BreadthFirstSearch {
            frontier,
            pending,
            visited: VisitedSet::new(duplicates),
            nodes_visited: 0,
            peak_space: 0,
        }
    }

    /// States expanded so far.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Largest frontier size observed.
    pub fn peak_space(&self) -> usize {
        self.peak_space
    }

    /// Boards recorded by duplicate checking (0 when it is off).
    pub fn visited_size(&self) -> usize {
        self.visited.len()
    }
}

impl Iterator for BreadthFirstSearch {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        loop {
            if let Some(path) = self.pending.pop_front() {
                return Some(path);
            }

            self.peak_space = self.peak_space.max(self.frontier.len());
            let (state, path) = self.frontier.pop_front()?;
            self.nodes_visited += 1;

            for (mv, board) in state.successors() {
                if self.visited.check_and_record(&board) {
                    continue;
                }
                let mut next_path = path.clone();
                next_path.push(mv);
                if board.is_goal() {
                    self.pending.push_back(next_path);
                } else {
                    self.frontier.push_back((board, next_path));
                }
            }
        }
    }
}

/// Best-first search ordered by `f = heuristic + path length`.
///
/// The cheapest frontier entry is expanded next and goal-tested on
/// dequeue. The first yielded path is only guaranteed shortest when the
/// heuristic is admissible, which is not verified here.
pub struct AStar {
    frontier: PriorityFrontier,
    visited: VisitedSet,
    nodes_visited: u64,
    peak_space: usize,
}

impl AStar {
    pub fn new(start: Board, heuristic: Heuristic, duplicates: DuplicateCheck) -> Self {
        let mut frontier = PriorityFrontier::new(heuristic);
        frontier.push(start, Vec::new());
        AStar {
            frontier,
            visited: VisitedSet::new(duplicates),
            nodes_visited: 0,
            peak_space: 0,
        }
    }

    /// States expanded so far.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Largest frontier size observed.
    pub fn peak_space(&self) -> usize {
        self.peak_space
    }

    /// Boards recorded by duplicate checking (0 when it is off).
    pub fn visited_size(&self) -> usize {
        self.visited.len()
    }
}

impl Iterator for AStar {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        loop {
            self.peak_space = self.peak_space.max(self.frontier.len());
            let (state, path) = self.frontier.pop()?;
            self.nodes_visited += 1;

            let reached_goal = state.is_goal();
            for (mv, board) in state.successors() {
                if self.visited.check_and_record(&board) {
                    continue;
                }
                let mut next_path = path.clone();
                next_path.push(mv);
                self.frontier.push(board, next_path);
            }
            if reached_goal {
                return Some(path);
            }
        }
    }
}

/// Outcome of one bounded descent: a complete path, or the smallest
/// `f` value among the branches the bound cut off.
enum Bounded {
    Found(Path),
    Min(f64),
}

/// Iterative-deepening best-first search.
///
/// The cost bound starts at `heuristic(start)`. Each iteration runs a
/// depth-limited recursion that prunes branches whose
/// `f = path length + heuristic` exceeds the bound and reports the
/// minimum pruned `f`, which becomes the next bound. The search ends
/// with the first complete path, or with no solution once the minimum
/// pruned `f` is infinite. Memory stays proportional to the recursion
/// depth at the price of re-expanding shallow states every iteration.
pub struct IterativeDeepeningAStar {
    start: Board,
    heuristic: Heuristic,
    nodes_visited: u64,
    peak_space: usize,
}

impl IterativeDeepeningAStar {
    pub fn new(start: Board, heuristic: Heuristic) -> Self {
        IterativeDeepeningAStar {
            start,
            heuristic,
            nodes_visited: 0,
            peak_space: 0,
        }
    }

    /// Runs the search to completion.
    pub fn search(&mut self) -> Option<Path> {
        let start = self.start.clone();
        let mut bound = (self.heuristic)(&start);
        loop {
            match self.bounded_search(&start, bound, &mut Vec::new(), 1) {
                Bounded::Found(path) => return Some(path),
                Bounded::Min(next_bound) => {
                    if next_bound.is_infinite() {
                        return None;
                    }
                    bound = next_bound;
                }
            }
        }
    }

    fn bounded_search(&mut self, node: &Board, bound: f64, path: &mut Path, depth: usize) -> Bounded {
        self.nodes_visited += 1;
        self.peak_space = self.peak_space.max(depth);

        let f = path.len() as f64 + (self.heuristic)(node);
        if f > bound {
            return Bounded::Min(f);
        }
        if node.is_goal() {
            return Bounded::Found(path.clone());
        }

        let mut min_pruned = f64::INFINITY;
        for (mv, board) in node.successors() {
            path.push(mv);
            match self.bounded_search(&board, bound, path, depth + 1) {
                Bounded::Found(found) => return Bounded::Found(found),
                Bounded::Min(pruned) => min_pruned = min_pruned.min(pruned),
            }
            path.pop();
        }
        Bounded::Min(min_pruned)
    }

    /// States expanded so far, counting re-expansions across iterations.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Deepest recursion depth reached (start state counts as depth 1).
    pub fn peak_space(&self) -> usize {
        self.peak_space
    }
}
