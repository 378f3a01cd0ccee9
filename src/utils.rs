//! Parsing of textual board descriptions and seeded board generation.
//!
//! The board file format is the one the binaries consume: a direction
//! specifier on the first line, a blank separator line, then one line
//! per grid row with `*`/`o`/`.` cells, optionally space-separated.

use crate::board::{Board, Cell, Direction};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Parses a direction specifier: one of the preset names `all`, `ortho`
/// or `swne`, or an explicit list of labels separated by whitespace or
/// commas (e.g. `"n e s w"`).
///
/// # Examples
/// ```
/// use pegsol_solver::board::Direction;
/// use pegsol_solver::utils::parse_directions;
///
/// assert_eq!(parse_directions("ortho").unwrap(), Direction::ORTHO.to_vec());
/// assert_eq!(
///     parse_directions("n, se").unwrap(),
///     vec![Direction::North, Direction::SouthEast]
/// );
/// assert!(parse_directions("north").is_err());
/// ```
pub fn parse_directions(spec: &str) -> Result<Vec<Direction>, String> {
    match spec.trim() {
        "all" => Ok(Direction::ALL.to_vec()),
        "ortho" => Ok(Direction::ORTHO.to_vec()),
        "swne" => Ok(Direction::SWNE.to_vec()),
        other => {
            let directions: Vec<Direction> = other
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(str::parse)
                .collect::<Result<_, _>>()?;
            if directions.is_empty() {
                return Err("Direction specifier is empty".to_string());
            }
            Ok(directions)
        }
    }
}

/// Parses grid rows into a board, one string per row starting from row
/// 0. Whitespace inside a row is ignored; the remaining characters must
/// be `*` (peg), `o` (hole) or `.` (out of bounds), and every row must
/// have exactly as many cells as there are rows.
pub fn board_from_rows(rows: &[&str], directions: Vec<Direction>) -> Result<Board, String> {
    if rows.is_empty() {
        return Err("Board description contains no rows".to_string());
    }
    if directions.is_empty() {
        return Err("Direction list is empty".to_string());
    }

    let size = rows.len();
    let mut grid = Vec::with_capacity(size);
    for (r, row) in rows.iter().enumerate() {
        let cells: Vec<Cell> = row
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Cell::from_char(c)
                    .ok_or_else(|| format!("Unrecognized character '{}' in row {}", c, r))
            })
            .collect::<Result<_, _>>()?;
        if cells.len() != size {
            return Err(format!(
                "Row {} has {} cells (expected {} for a square board)",
                r,
                cells.len(),
                size
            ));
        }
        grid.push(cells);
    }
    Ok(Board::new(grid, directions))
}

/// Parses a complete board file: the first line is a direction
/// specifier, the remaining non-blank lines are the grid rows.
pub fn board_from_str(text: &str) -> Result<Board, String> {
    let mut lines = text.lines();
    let spec = lines
        .next()
        .ok_or_else(|| "Board description is empty".to_string())?;
    let directions = parse_directions(spec)?;
    let rows: Vec<&str> = lines.filter(|line| !line.trim().is_empty()).collect();
    board_from_rows(&rows, directions)
}

/// Generates a deterministic random board: every cell is a peg or a
/// hole (never out of bounds), with roughly three pegs to every two
/// holes, under the `ortho` preset. The same seed always produces the
/// same board.
pub fn random_board(size: usize, seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let grid = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| {
                    if rng.gen_bool(0.6) {
                        Cell::Peg
                    } else {
                        Cell::Empty
                    }
                })
                .collect()
        })
        .collect();
    Board::new(grid, Direction::ORTHO.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction_presets() {
        assert_eq!(parse_directions("all").unwrap(), Direction::ALL.to_vec());
        assert_eq!(parse_directions("ortho").unwrap(), Direction::ORTHO.to_vec());
        assert_eq!(parse_directions("swne").unwrap(), Direction::SWNE.to_vec());
    }

    #[test]
    fn test_parse_explicit_direction_list() {
        assert_eq!(
            parse_directions("n e s w").unwrap(),
            Direction::ORTHO.to_vec()
        );
        assert_eq!(
            parse_directions("ne,sw").unwrap(),
            vec![Direction::NorthEast, Direction::SouthWest]
        );
    }

    #[test]
    fn test_parse_directions_rejects_garbage() {
        let err = parse_directions("n x").unwrap_err();
        assert!(err.contains("Unrecognized direction label 'x'"));
        assert!(parse_directions("").is_err());
        assert!(parse_directions(" , ").is_err());
    }

    #[test]
    fn test_board_from_rows_valid() {
        let board = board_from_rows(&["* * o", "o . *", ". . ."], Direction::ORTHO.to_vec())
            .unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.cell(0, 0), Cell::Peg);
        assert_eq!(board.cell(0, 2), Cell::Empty);
        assert_eq!(board.cell(1, 1), Cell::OutOfBounds);
        assert_eq!(board.peg_count(), 3);
    }

    #[test]
    fn test_board_from_rows_rejects_bad_character() {
        let err =
            board_from_rows(&["**x", "ooo", "ooo"], Direction::ORTHO.to_vec()).unwrap_err();
        assert!(err.contains("Unrecognized character 'x' in row 0"));
    }

    #[test]
    fn test_board_from_rows_rejects_non_square() {
        let err = board_from_rows(&["**", "ooo"], Direction::ORTHO.to_vec()).unwrap_err();
        assert!(err.contains("expected 2"));
        assert!(board_from_rows(&[], Direction::ORTHO.to_vec()).is_err());
    }

    #[test]
    fn test_board_from_rows_rejects_empty_direction_list() {
        assert!(board_from_rows(&["*"], Vec::new()).is_err());
    }

    #[test]
    fn test_board_from_str_full_file() {
        let text = "ortho\n\n* * o\no o o\n* o *\n";
        let board = board_from_str(text).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.peg_count(), 4);
        assert_eq!(board.directions(), &Direction::ORTHO);
    }

    #[test]
    fn test_board_from_str_requires_directions_line() {
        assert!(board_from_str("").is_err());
        assert!(board_from_str("* * o\no o o\n* o *\n").is_err());
    }

    #[test]
    fn test_random_board_is_deterministic_per_seed() {
        assert_eq!(random_board(5, 42), random_board(5, 42));
        assert_ne!(random_board(5, 42), random_board(5, 43));
        let board = random_board(5, 42);
        assert_eq!(board.size(), 5);
        assert_eq!(board.peg_count() + board.free_count(), 25);
    }
}
