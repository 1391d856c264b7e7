//! The puzzle grid and its supporting types.
//!
//! A [`Grid`] is a square matrix of digits where `0` marks an empty cell. The
//! grid carries its own [`Dimensions`] so the solving logic is written once
//! for every box-square configuration, even though the command-line surface
//! only ever constructs the classical 9×9 grid with 3×3 boxes. The reduced
//! 4×4 configuration exists to make exhaustiveness testable.

use std::fmt;

pub mod parse;

/// The classical puzzle from the Wikipedia Sudoku article. It has exactly one
/// solution.
pub const EXAMPLE: [[u8; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

/// A web challenge puzzle with one clue removed, so that it admits more than
/// one solution. Useful for exercising full enumeration rather than
/// single-solution solving.
pub const LOOSE_EXAMPLE: [[u8; 9]; 9] = [
    [0, 0, 0, 0, 0, 1, 0, 9, 4],
    [3, 0, 0, 0, 0, 7, 1, 0, 0],
    [0, 0, 0, 0, 9, 0, 0, 0, 0],
    [7, 0, 6, 5, 0, 0, 2, 0, 9],
    [0, 3, 0, 0, 2, 0, 0, 6, 0],
    [9, 0, 2, 0, 0, 6, 3, 0, 1],
    [0, 0, 0, 0, 5, 0, 0, 0, 0],
    [0, 0, 7, 3, 0, 0, 0, 0, 2],
    [4, 1, 0, 7, 0, 0, 0, 8, 0],
];

/// The shape of a puzzle: overall side length and box side length.
///
/// The side length is always the square of the box side, so every grid splits
/// into non-overlapping boxes and the digit range equals the side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    size: usize,
    box_size: usize,
}

impl Dimensions {
    /// The classical 9×9 grid with 3×3 boxes and digits 1..=9.
    pub const CLASSIC: Self = Self::new(3);

    /// Creates the dimensions with the given box side length.
    #[must_use]
    pub const fn new(box_size: usize) -> Self {
        Self {
            size: box_size * box_size,
            box_size,
        }
    }

    /// Looks up the dimensions for a supported side length.
    ///
    /// Returns `None` unless `size` is one of 4, 9, 16, or 25.
    #[must_use]
    pub const fn for_size(size: usize) -> Option<Self> {
        match size {
            4 => Some(Self::new(2)),
            9 => Some(Self::new(3)),
            16 => Some(Self::new(4)),
            25 => Some(Self::new(5)),
            _ => None,
        }
    }

    /// The side length of the grid.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// The side length of a box.
    #[must_use]
    pub const fn box_size(self) -> usize {
        self.box_size
    }

    /// The largest digit that may be placed in a cell.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn digit_max(self) -> u8 {
        self.size as u8
    }

    /// The total number of cells in the grid.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.size * self.size
    }
}

/// The kind of house (row, column, or box) a [`Violation`] was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A horizontal line of cells.
    Row,
    /// A vertical line of cells.
    Column,
    /// One of the non-overlapping box-square subgrids.
    Box,
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
            Self::Box => write!(f, "box"),
        }
    }
}

/// A pair of equal non-zero digits sharing a house, as reported by
/// [`Grid::first_violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// The duplicated digit.
    pub digit: u8,
    /// The (row, column) of the first occurrence in scan order.
    pub first: (usize, usize),
    /// The (row, column) of the second occurrence in scan order.
    pub second: (usize, usize),
    /// The house the digit is duplicated in.
    pub house: House,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "digit {} appears twice in one {}, at ({}, {}) and ({}, {})",
            self.digit, self.house, self.first.0, self.first.1, self.second.0, self.second.1
        )
    }
}

/// A square puzzle grid of digits, `0` marking an empty cell.
///
/// Cells are stored row-major. During a solve the grid is exclusively owned by
/// the search, which relies on strict place-then-undo discipline; see
/// [`crate::solver::search::Backtracker`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell empty.
    #[must_use]
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![0; dims.cell_count()],
        }
    }

    /// The dimensions of this grid.
    #[must_use]
    pub const fn dims(&self) -> Dimensions {
        self.dims
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.dims.size() + col
    }

    /// Returns the digit at (`row`, `col`), `0` if the cell is empty.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    /// Places `digit` at (`row`, `col`).
    pub fn set(&mut self, row: usize, col: usize, digit: u8) {
        debug_assert!(digit >= 1 && digit <= self.dims.digit_max());
        let idx = self.index(row, col);
        self.cells[idx] = digit;
    }

    /// Empties the cell at (`row`, `col`).
    pub fn clear(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = 0;
    }

    /// Whether the cell at (`row`, `col`) is empty.
    #[must_use]
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == 0
    }

    /// The number of filled cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|&&d| d != 0).count()
    }

    /// The number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.dims.cell_count() - self.clue_count()
    }

    /// Scans for a pair of equal non-zero digits sharing a row, column, or
    /// box, returning the first pair found (rows first, then columns, then
    /// boxes).
    ///
    /// The solver does not run this check itself: its contract requires a
    /// conflict-free starting grid, and starting from an inconsistent one
    /// leaves the reported solution count implementation-defined. The
    /// command line exposes this scan behind `--validate`.
    #[must_use]
    pub fn first_violation(&self) -> Option<Violation> {
        let size = self.dims.size();
        let boxn = self.dims.box_size();

        for r in 0..size {
            let mut seen = vec![None; size + 1];
            for c in 0..size {
                let d = self.get(r, c);
                if d == 0 {
                    continue;
                }
                if let Some(prev) = seen[d as usize] {
                    return Some(Violation {
                        digit: d,
                        first: (r, prev),
                        second: (r, c),
                        house: House::Row,
                    });
                }
                seen[d as usize] = Some(c);
            }
        }

        for c in 0..size {
            let mut seen = vec![None; size + 1];
            for r in 0..size {
                let d = self.get(r, c);
                if d == 0 {
                    continue;
                }
                if let Some(prev) = seen[d as usize] {
                    return Some(Violation {
                        digit: d,
                        first: (prev, c),
                        second: (r, c),
                        house: House::Column,
                    });
                }
                seen[d as usize] = Some(r);
            }
        }

        for br in (0..size).step_by(boxn) {
            for bc in (0..size).step_by(boxn) {
                let mut seen: Vec<Option<(usize, usize)>> = vec![None; size + 1];
                for r in br..br + boxn {
                    for c in bc..bc + boxn {
                        let d = self.get(r, c);
                        if d == 0 {
                            continue;
                        }
                        if let Some(prev) = seen[d as usize] {
                            return Some(Violation {
                                digit: d,
                                first: prev,
                                second: (r, c),
                                house: House::Box,
                            });
                        }
                        seen[d as usize] = Some((r, c));
                    }
                }
            }
        }

        None
    }
}

impl<const N: usize> From<[[u8; N]; N]> for Grid {
    /// Builds a grid from an N×N array of rows.
    ///
    /// # Panics
    ///
    /// If `N` is not a supported side length (4, 9, 16, or 25).
    fn from(rows: [[u8; N]; N]) -> Self {
        let dims = Dimensions::for_size(N).expect("Unsupported grid size");
        let cells = rows.iter().flatten().copied().collect();
        Self { dims, cells }
    }
}

impl fmt::Display for Grid {
    /// Renders the bordered box layout: a dashed divider before the grid and
    /// after every box-th row, `|` separators around each box-th column, and
    /// a blank in place of every empty cell.
    ///
    /// Alignment assumes single-character digits; 16×16 and 25×25 grids solve
    /// fine but render ragged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.dims.size();
        let boxn = self.dims.box_size();
        let divider = "-".repeat(1 + 2 * size + 2 * (size / boxn));

        writeln!(f, "{divider}")?;
        for r in 0..size {
            write!(f, "|")?;
            for c in 0..size {
                let d = self.get(r, c);
                if d == 0 {
                    write!(f, "  ")?;
                } else {
                    write!(f, " {d}")?;
                }
                if (c + 1) % boxn == 0 {
                    write!(f, " |")?;
                }
            }
            writeln!(f)?;
            if (r + 1) % boxn == 0 {
                writeln!(f, "{divider}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_dimensions() {
        let dims = Dimensions::CLASSIC;
        assert_eq!(dims.size(), 9);
        assert_eq!(dims.box_size(), 3);
        assert_eq!(dims.digit_max(), 9);
        assert_eq!(dims.cell_count(), 81);
        assert_eq!(Dimensions::for_size(9), Some(dims));
        assert_eq!(Dimensions::for_size(7), None);
    }

    #[test]
    fn test_grid_from_array_and_accessors() {
        let grid = Grid::from(EXAMPLE);
        assert_eq!(grid.dims(), Dimensions::CLASSIC);
        assert_eq!(grid.get(0, 0), 5);
        assert_eq!(grid.get(8, 8), 9);
        assert!(grid.is_empty_cell(0, 2));
        assert_eq!(grid.clue_count(), 30);
        assert_eq!(grid.empty_count(), 51);
    }

    #[test]
    fn test_set_and_clear_round_trip() {
        let mut grid = Grid::empty(Dimensions::CLASSIC);
        grid.set(4, 7, 3);
        assert_eq!(grid.get(4, 7), 3);
        grid.clear(4, 7);
        assert!(grid.is_empty_cell(4, 7));
        assert_eq!(grid, Grid::empty(Dimensions::CLASSIC));
    }

    #[test]
    fn test_first_violation_none_on_consistent_grid() {
        assert_eq!(Grid::from(EXAMPLE).first_violation(), None);
        assert_eq!(Grid::empty(Dimensions::CLASSIC).first_violation(), None);
    }

    #[test]
    fn test_first_violation_row() {
        let mut grid = Grid::empty(Dimensions::CLASSIC);
        grid.set(2, 1, 5);
        grid.set(2, 7, 5);
        let v = grid.first_violation().unwrap();
        assert_eq!(v.house, House::Row);
        assert_eq!(v.digit, 5);
        assert_eq!(v.first, (2, 1));
        assert_eq!(v.second, (2, 7));
    }

    #[test]
    fn test_first_violation_column() {
        let mut grid = Grid::empty(Dimensions::CLASSIC);
        grid.set(0, 4, 9);
        grid.set(6, 4, 9);
        let v = grid.first_violation().unwrap();
        assert_eq!(v.house, House::Column);
        assert_eq!(v.first, (0, 4));
        assert_eq!(v.second, (6, 4));
    }

    #[test]
    fn test_first_violation_box() {
        let mut grid = Grid::empty(Dimensions::CLASSIC);
        grid.set(3, 0, 2);
        grid.set(5, 2, 2);
        let v = grid.first_violation().unwrap();
        assert_eq!(v.house, House::Box);
        assert_eq!(v.first, (3, 0));
        assert_eq!(v.second, (5, 2));
    }

    #[test]
    fn test_display_bordered_layout() {
        let mut grid = Grid::empty(Dimensions::new(2));
        grid.set(0, 0, 1);
        grid.set(1, 3, 4);
        grid.set(3, 2, 2);
        let expected = "\
-------------
| 1   |     |
|     |   4 |
-------------
|     |     |
|     | 2   |
-------------
";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_display_classic_divider_width() {
        let rendered = Grid::from(EXAMPLE).to_string();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "-".repeat(25));
        // Top divider, 9 cell rows, and a divider after every third row.
        assert_eq!(rendered.lines().count(), 13);
    }
}
