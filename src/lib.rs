//! # Peg-Solitaire Solver Library
//!
//! This library provides an immutable board model for single-agent
//! peg-solitaire puzzles and a family of search engines that reduce a
//! board to a single remaining peg.
//!
//! It is used by two binaries:
//! - `solve`: Loads a board file, runs a chosen search method and prints
//!   the move sequence together with search statistics.
//! - `play`: Allows interactive play of a board file via the command line.
//!
//! ## Modules
//! - `board`: The grid representation (`Board`), cell types (`Cell`),
//!   jump directions (`Direction`), move application and rotation.
//! - `heuristics`: Cost-remaining estimates (`&Board -> f64`) pluggable
//!   into the informed search engines.
//! - `frontier`: A min-heap of `(Board, Path)` pairs ordered by
//!   `heuristic + path length`, used by best-first search.
//! - `search`: The four engines: depth-first, breadth-first, best-first
//!   (A*-style) and iterative-deepening best-first, plus duplicate and
//!   symmetry checking.
//! - `utils`: Parsing of board/direction text descriptions and seeded
//!   random board generation.

pub mod board;
pub mod frontier;
pub mod heuristics;
pub mod search;
pub mod utils;
