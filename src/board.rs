//! Board model for peg solitaire.
//!
//! This module defines the puzzle's fundamental components:
//! - `Cell`: The three states a grid position can be in.
//! - `Direction`: The eight compass directions a jump may follow, with
//!   the named presets `all`, `ortho` and `swne`.
//! - `Move`: A source/destination coordinate pair describing one jump.
//! - `Board`: The square grid together with its allowed direction list,
//!   legality checks, move generation and application, and rotation.
//!
//! `Board` is a value type: every mutating operation returns a new board
//! and the receiver is never modified. Equality and hashing cover the
//! grid only; the direction list does not participate.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The state of a single grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// An occupied position.
    Peg,
    /// An unoccupied, in-bounds position (a hole).
    Empty,
    /// A position that is not part of the playable area.
    OutOfBounds,
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// This is the same alphabet used by board files: `*` for a peg,
    /// `o` for a hole and `.` for an out-of-bounds position.
    ///
    /// # Examples
    ///
    /// ```
    /// use pegsol_solver::board::Cell;
    /// assert_eq!(Cell::Peg.to_char(), '*');
    /// assert_eq!(Cell::Empty.to_char(), 'o');
    /// assert_eq!(Cell::OutOfBounds.to_char(), '.');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Cell::Peg => '*',
            Cell::Empty => 'o',
            Cell::OutOfBounds => '.',
        }
    }

    /// Parses a board-file character into a cell.
    ///
    /// Returns `None` for characters outside the `*`/`o`/`.` alphabet.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '*' => Some(Cell::Peg),
            'o' => Some(Cell::Empty),
            '.' => Some(Cell::OutOfBounds),
            _ => None,
        }
    }
}

/// A compass direction a jump may follow.
///
/// Directions are row/column deltas on the grid: north decreases the row,
/// south increases it, east increases the column, west decreases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The `all` preset: every compass direction, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The `ortho` preset: the four orthogonal directions.
    pub const ORTHO: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The `swne` preset: the orthogonal directions plus the
    /// northeast/southwest diagonal.
    pub const SWNE: [Direction; 6] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
    ];

    /// The `(row, column)` delta of one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The short label used in board files (`n`, `ne`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::NorthEast => "ne",
            Direction::East => "e",
            Direction::SouthEast => "se",
            Direction::South => "s",
            Direction::SouthWest => "sw",
            Direction::West => "w",
            Direction::NorthWest => "nw",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Direction::North),
            "ne" => Ok(Direction::NorthEast),
            "e" => Ok(Direction::East),
            "se" => Ok(Direction::SouthEast),
            "s" => Ok(Direction::South),
            "sw" => Ok(Direction::SouthWest),
            "w" => Ok(Direction::West),
            "nw" => Ok(Direction::NorthWest),
            other => Err(format!("Unrecognized direction label '{}'", other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One jump: a peg at `source` jumps over the midpoint cell and lands on
/// `destination`. Only valid relative to the board it was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// Coordinate of the peg that jumps.
    pub source: (usize, usize),
    /// Coordinate of the hole the peg lands in.
    pub destination: (usize, usize),
}

impl Move {
    /// The cell exactly midway between source and destination; the peg
    /// there is removed when the move is applied.
    pub fn hop(&self) -> (usize, usize) {
        (
            (self.source.0 + self.destination.0) / 2,
            (self.source.1 + self.destination.1) / 2,
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) --> ({}, {})",
            self.source.0, self.source.1, self.destination.0, self.destination.1
        )
    }
}

/// An immutable square peg-solitaire board.
///
/// The grid is `size` x `size`; every position holds one of the three
/// `Cell` values. The direction list determines which jumps are legal and
/// its order is observable: `possible_moves` iterates positions in
/// row-major order and directions in list order, so "the first move" is
/// well defined for a given board.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Vec<Vec<Cell>>,
    size: usize,
    directions: Vec<Direction>,
}

impl Board {
    /// Creates a board from a grid and an allowed direction list.
    ///
    /// # Panics
    /// Panics if the grid is not square or the direction list is empty.
    /// Both are caller contract violations, not recoverable conditions.
    pub fn new(grid: Vec<Vec<Cell>>, directions: Vec<Direction>) -> Self {
        let size = grid.len();
        assert!(
            grid.iter().all(|row| row.len() == size),
            "Board grid must be square ({} rows)",
            size
        );
        assert!(
            !directions.is_empty(),
            "Board requires a non-empty direction list"
        );
        Board {
            grid,
            size,
            directions,
        }
    }

    /// The side length of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The allowed jump directions, in their configured order.
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Returns the cell at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside the grid.
    pub fn cell(&self, r: usize, c: usize) -> Cell {
        self.grid[r][c]
    }

    /// Counts the pegs remaining on the board.
    pub fn peg_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Peg)
            .count()
    }

    /// Counts the empty (in-bounds) holes on the board.
    pub fn free_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count()
    }

    /// Checks whether the board is in the goal state, i.e. exactly one
    /// peg remains. The scan stops as soon as a second peg is seen.
    pub fn is_goal(&self) -> bool {
        let mut pegs = 0;
        for row in &self.grid {
            for &cell in row {
                if cell == Cell::Peg {
                    pegs += 1;
                    if pegs > 1 {
                        return false;
                    }
                }
            }
        }
        pegs == 1
    }

    /// The coordinate `steps` cells away from `pos` in `dir`, or `None`
    /// if it falls off the grid. A coordinate is out of bounds when
    /// either component is negative or at least `size`.
    fn offset(&self, pos: (usize, usize), dir: Direction, steps: usize) -> Option<(usize, usize)> {
        let (dr, dc) = dir.delta();
        let r = pos.0 as isize + dr * steps as isize;
        let c = pos.1 as isize + dc * steps as isize;
        if r < 0 || c < 0 || r >= self.size as isize || c >= self.size as isize {
            None
        } else {
            Some((r as usize, c as usize))
        }
    }

    /// The cell `steps` cells away from `pos` in `dir`; positions off the
    /// grid read as `OutOfBounds`.
    fn cell_toward(&self, pos: (usize, usize), dir: Direction, steps: usize) -> Cell {
        match self.offset(pos, dir, steps) {
            Some((r, c)) => self.grid[r][c],
            None => Cell::OutOfBounds,
        }
    }

    /// All empty positions, in row-major order.
    fn free_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size)
            .flat_map(move |r| (0..self.size).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.grid[r][c] == Cell::Empty)
    }

    /// All legal moves on this board, produced lazily.
    ///
    /// For every empty cell (row-major) and every configured direction
    /// (list order), a move exists when the cell one step away and the
    /// cell two steps away in that direction both hold pegs: the farther
    /// peg is the source, the empty cell the destination, and the nearer
    /// peg is jumped over. Callers that pick "the first move" depend on
    /// this iteration order.
    pub fn possible_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.free_positions().flat_map(move |destination| {
            self.directions.iter().filter_map(move |&dir| {
                if self.cell_toward(destination, dir, 1) == Cell::Peg
                    && self.cell_toward(destination, dir, 2) == Cell::Peg
                {
                    self.offset(destination, dir, 2).map(|source| Move {
                        source,
                        destination,
                    })
                } else {
                    None
                }
            })
        })
    }

    /// Lazily pairs every legal move with the board it produces.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        self.possible_moves()
            .map(move |mv| (mv, self.make_move(mv.source, mv.destination)))
    }

    /// Applies one jump and returns the resulting board.
    ///
    /// The receiver is unchanged. On the new board the source becomes
    /// empty, the destination holds the peg, and the jumped-over cell
    /// becomes empty.
    ///
    /// # Panics
    /// Panics if the source or destination is out of bounds, the source
    /// is not a peg, the destination is not empty, the midpoint is not a
    /// lattice cell, or the midpoint does not hold a peg. These are
    /// caller contract violations and are never silently corrected.
    pub fn make_move(&self, source: (usize, usize), destination: (usize, usize)) -> Board {
        assert!(
            source.0 < self.size && source.1 < self.size,
            "Move source {:?} is out of bounds",
            source
        );
        assert!(
            destination.0 < self.size && destination.1 < self.size,
            "Move destination {:?} is out of bounds",
            destination
        );
        assert!(
            self.grid[source.0][source.1] == Cell::Peg,
            "Move source {:?} does not hold a peg",
            source
        );
        assert!(
            self.grid[destination.0][destination.1] == Cell::Empty,
            "Move destination {:?} is not empty",
            destination
        );
        assert!(
            (source.0 + destination.0) % 2 == 0 && (source.1 + destination.1) % 2 == 0,
            "Move {:?} --> {:?} has no midpoint cell",
            source,
            destination
        );

        let mv = Move {
            source,
            destination,
        };
        let (hr, hc) = mv.hop();
        assert!(
            self.grid[hr][hc] == Cell::Peg,
            "Hop cell {:?} does not hold a peg",
            (hr, hc)
        );

        let mut next = self.clone();
        next.grid[source.0][source.1] = Cell::Empty;
        next.grid[destination.0][destination.1] = Cell::Peg;
        next.grid[hr][hc] = Cell::Empty;
        next
    }

    /// The board rotated 90 degrees counter-clockwise, with the same
    /// direction list. Rotating four times returns an equal board.
    pub fn rotated(&self) -> Board {
        let n = self.size;
        let mut grid = vec![vec![Cell::OutOfBounds; n]; n];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.grid[c][n - 1 - r];
            }
        }
        Board {
            grid,
            size: n,
            directions: self.directions.clone(),
        }
    }

    /// The 90, 180 and 270 degree rotations of this board.
    ///
    /// Used for symmetry-aware deduplication. Note that treating a
    /// rotation as equivalent is only sound when the direction list is
    /// itself invariant under that rotation; see
    /// `search::DuplicateCheck::Symmetric`.
    pub fn symmetric_boards(&self) -> Vec<Board> {
        let quarter = self.rotated();
        let half = quarter.rotated();
        let three_quarter = half.rotated();
        vec![quarter, half, three_quarter]
    }
}

// Equality and hashing deliberately ignore the direction list: two boards
// are the same search state iff their grids match cell by cell.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl fmt::Display for Board {
    /// Renders the grid with row and column indices, one character per
    /// cell (`*`, `o`, `.`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..self.size {
            write!(f, "{} ", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "{} ", r)?;
            for cell in row {
                write!(f, "{} ", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_rows;

    fn ortho_board(rows: &[&str]) -> Board {
        board_from_rows(rows, Direction::ORTHO.to_vec()).unwrap()
    }

    #[test]
    fn test_cell_char_round_trip() {
        for cell in [Cell::Peg, Cell::Empty, Cell::OutOfBounds] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('x'), None);
    }

    #[test]
    fn test_direction_labels_parse() {
        for dir in Direction::ALL {
            assert_eq!(dir.label().parse::<Direction>().unwrap(), dir);
        }
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_non_square_grid_rejected() {
        Board::new(
            vec![vec![Cell::Peg, Cell::Empty], vec![Cell::Peg]],
            Direction::ORTHO.to_vec(),
        );
    }

    #[test]
    #[should_panic(expected = "non-empty direction list")]
    fn test_empty_direction_list_rejected() {
        Board::new(vec![vec![Cell::Peg]], Vec::new());
    }

    #[test]
    fn test_peg_and_free_counts() {
        let board = ortho_board(&["**o", "o..", "..."]);
        assert_eq!(board.peg_count(), 2);
        assert_eq!(board.free_count(), 2);
    }

    #[test]
    fn test_is_goal_single_peg_only() {
        assert!(ortho_board(&["*oo", "ooo", "ooo"]).is_goal());
        assert!(ortho_board(&["*..", "...", "..."]).is_goal());
        assert!(!ortho_board(&["**o", "ooo", "ooo"]).is_goal());
        assert!(!ortho_board(&["ooo", "ooo", "ooo"]).is_goal());
    }

    #[test]
    fn test_single_row_has_exactly_one_move() {
        // The leftmost peg jumps over the middle peg into the hole.
        let board = ortho_board(&["**o", "...", "..."]);
        let moves: Vec<Move> = board.possible_moves().collect();
        assert_eq!(
            moves,
            vec![Move {
                source: (0, 0),
                destination: (0, 2),
            }]
        );

        let next = board.make_move((0, 0), (0, 2));
        assert!(next.is_goal());
        assert_eq!(next.cell(0, 0), Cell::Empty);
        assert_eq!(next.cell(0, 1), Cell::Empty);
        assert_eq!(next.cell(0, 2), Cell::Peg);
        // The receiver is untouched.
        assert_eq!(board.cell(0, 0), Cell::Peg);
    }

    #[test]
    fn test_move_ordering_row_major_then_direction() {
        // Two holes flank a peg pair; the hole at (0, 0) comes first in
        // row-major order, so the jump into it is generated first.
        let board = ortho_board(&["o**o", "....", "....", "...."]);
        let moves: Vec<Move> = board.possible_moves().collect();
        assert_eq!(
            moves,
            vec![
                Move {
                    source: (0, 2),
                    destination: (0, 0),
                },
                Move {
                    source: (0, 1),
                    destination: (0, 3),
                },
            ]
        );
    }

    #[test]
    fn test_diagonal_moves_require_diagonal_directions() {
        // Pegs at (1, 1) and (2, 0) line up with the hole at (0, 2) along
        // the sw/ne diagonal.
        let rows = ["ooo", "o*o", "*oo"];
        let ortho = ortho_board(&rows);
        assert_eq!(ortho.possible_moves().count(), 0);

        let swne = board_from_rows(&rows, Direction::SWNE.to_vec()).unwrap();
        let moves: Vec<Move> = swne.possible_moves().collect();
        assert_eq!(
            moves,
            vec![Move {
                source: (2, 0),
                destination: (0, 2),
            }]
        );
    }

    #[test]
    fn test_moves_never_cross_out_of_bounds() {
        // The hop cell is out of bounds, so no jump may pass through it.
        let board = ortho_board(&["*.o", "...", "..."]);
        assert_eq!(board.possible_moves().count(), 0);
    }

    #[test]
    fn test_successors_apply_their_moves() {
        let board = ortho_board(&["o**o", "....", "....", "...."]);
        for (mv, next) in board.successors() {
            assert_eq!(next.peg_count(), board.peg_count() - 1);
            assert_eq!(next.cell(mv.destination.0, mv.destination.1), Cell::Peg);
            assert_eq!(next.cell(mv.source.0, mv.source.1), Cell::Empty);
            let (hr, hc) = mv.hop();
            assert_eq!(next.cell(hr, hc), Cell::Empty);
            // Applying a generated move keeps the grid square.
            assert_eq!(next.size(), board.size());
        }
    }

    #[test]
    #[should_panic(expected = "does not hold a peg")]
    fn test_make_move_rejects_empty_source() {
        let board = ortho_board(&["o*o", "...", "..."]);
        board.make_move((0, 0), (0, 2));
    }

    #[test]
    #[should_panic(expected = "is not empty")]
    fn test_make_move_rejects_occupied_destination() {
        let board = ortho_board(&["***", "...", "..."]);
        board.make_move((0, 0), (0, 2));
    }

    #[test]
    #[should_panic(expected = "Hop cell")]
    fn test_make_move_rejects_missing_hop_peg() {
        let board = ortho_board(&["*oo", "...", "..."]);
        board.make_move((0, 0), (0, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_make_move_rejects_out_of_bounds() {
        let board = ortho_board(&["**o", "...", "..."]);
        board.make_move((0, 0), (0, 3));
    }

    #[test]
    #[should_panic(expected = "no midpoint")]
    fn test_make_move_rejects_odd_span() {
        let board = ortho_board(&["**o", "*..", "..."]);
        board.make_move((1, 0), (0, 2));
    }

    #[test]
    fn test_rotation_round_trip() {
        let board = ortho_board(&["**o", "o.*", "*oo"]);
        let once = board.rotated();
        assert_ne!(board, once);
        let full = once.rotated().rotated().rotated();
        assert_eq!(board, full);
    }

    #[test]
    fn test_rotation_round_trip_random_boards() {
        for seed in 0..8 {
            let board = crate::utils::random_board(5, seed);
            assert_eq!(
                board,
                board.rotated().rotated().rotated().rotated(),
                "seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_symmetric_boards_are_the_three_rotations() {
        let board = ortho_board(&["*oo", "ooo", "ooo"]);
        let rotations = board.symmetric_boards();
        assert_eq!(rotations.len(), 3);
        assert_eq!(rotations[0], board.rotated());
        assert_eq!(rotations[1], board.rotated().rotated());
        assert_eq!(rotations[2], board.rotated().rotated().rotated());
        // Rotations preserve peg count.
        for rotation in &rotations {
            assert_eq!(rotation.peg_count(), 1);
        }
    }

    #[test]
    fn test_equality_ignores_directions() {
        let a = board_from_rows(&["**o", "...", "..."], Direction::ORTHO.to_vec()).unwrap();
        let b = board_from_rows(&["**o", "...", "..."], Direction::ALL.to_vec()).unwrap();
        assert_eq!(a, b);

        let c = board_from_rows(&["o**", "...", "..."], Direction::ORTHO.to_vec()).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_formatting() {
        let board = ortho_board(&["**o", "o.*", "..."]);
        let rendered = format!("{}", board);
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.starts_with("  0 1 2 "));
        assert!(rendered.contains("0 * * o "));
        assert!(rendered.contains("1 o . * "));
        assert!(rendered.contains("2 . . . "));
    }
}
