//! Placement conflict predicates.
//!
//! Every function here answers one question about the current grid: would
//! writing digit `d` into the target cell duplicate `d` somewhere it must be
//! unique? The checks are plain linear scans over the nine cells of the
//! affected row, column, and box. No state is mutated and nothing is cached;
//! the enumeration in [`crate::solver::search`] relies on these predicates
//! being exact against whatever the grid holds at the moment of the call.
//!
//! All functions assume the target cell is currently empty. They do not
//! special-case the target cell during the scans, so calling them for an
//! occupied cell reports a conflict of the cell with itself.

use crate::grid::Grid;
use smallvec::SmallVec;

/// Whether digit `d` already occurs in row `r`.
#[must_use]
pub fn row_conflict(grid: &Grid, r: usize, d: u8) -> bool {
    (0..grid.dims().size()).any(|c| grid.get(r, c) == d)
}

/// Whether digit `d` already occurs in column `c`.
#[must_use]
pub fn col_conflict(grid: &Grid, c: usize, d: u8) -> bool {
    (0..grid.dims().size()).any(|r| grid.get(r, c) == d)
}

/// Whether digit `d` already occurs in the box containing (`r`, `c`).
#[must_use]
pub fn box_conflict(grid: &Grid, r: usize, c: usize, d: u8) -> bool {
    let boxn = grid.dims().box_size();
    let top = r - r % boxn;
    let left = c - c % boxn;

    (top..top + boxn).any(|br| (left..left + boxn).any(|bc| grid.get(br, bc) == d))
}

/// Whether placing digit `d` at (`r`, `c`) is forbidden because `d` already
/// occurs in the same row, column, or box.
///
/// The cell at (`r`, `c`) must be empty and `d` must lie in
/// `1..=grid.dims().digit_max()`.
#[must_use]
pub fn gives_conflict(grid: &Grid, r: usize, c: usize, d: u8) -> bool {
    row_conflict(grid, r, d) || col_conflict(grid, c, d) || box_conflict(grid, r, c, d)
}

/// The digits that can be placed at the empty cell (`r`, `c`) without
/// conflicting, in ascending order.
///
/// This is exactly the set of digits the enumerator will try at that cell,
/// in the order it will try them.
#[must_use]
pub fn candidates(grid: &Grid, r: usize, c: usize) -> SmallVec<[u8; 9]> {
    (1..=grid.dims().digit_max())
        .filter(|&d| !gives_conflict(grid, r, c, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Dimensions, EXAMPLE, Grid};

    fn example() -> Grid {
        Grid::from(EXAMPLE)
    }

    #[test]
    fn test_row_conflict() {
        let grid = example();
        // Row 0 holds 5, 3, 7.
        assert!(row_conflict(&grid, 0, 5));
        assert!(row_conflict(&grid, 0, 7));
        assert!(!row_conflict(&grid, 0, 1));
        assert!(!row_conflict(&grid, 0, 9));
    }

    #[test]
    fn test_col_conflict() {
        let grid = example();
        // Column 0 holds 5, 6, 8, 4, 7.
        assert!(col_conflict(&grid, 0, 6));
        assert!(col_conflict(&grid, 0, 4));
        assert!(!col_conflict(&grid, 0, 1));
        assert!(!col_conflict(&grid, 0, 2));
    }

    #[test]
    fn test_box_conflict() {
        let grid = example();
        // Top-left box holds 5, 3, 6, 9, 8; any cell in the box sees them.
        assert!(box_conflict(&grid, 2, 0, 5));
        assert!(box_conflict(&grid, 1, 2, 9));
        assert!(!box_conflict(&grid, 2, 0, 1));
        // Center box holds 6, 8, 3, 2.
        assert!(box_conflict(&grid, 3, 3, 8));
        assert!(!box_conflict(&grid, 3, 3, 9));
    }

    #[test]
    fn test_gives_conflict_combines_all_three() {
        let grid = example();
        // (0, 2): 5 in row, 8 in column, 9 in box, 1 nowhere.
        assert!(gives_conflict(&grid, 0, 2, 5));
        assert!(gives_conflict(&grid, 0, 2, 8));
        assert!(gives_conflict(&grid, 0, 2, 9));
        assert!(!gives_conflict(&grid, 0, 2, 1));
    }

    #[test]
    fn test_no_conflicts_on_empty_grid() {
        let grid = Grid::empty(Dimensions::CLASSIC);
        for d in 1..=9 {
            assert!(!gives_conflict(&grid, 4, 4, d));
        }
    }

    #[test]
    fn test_candidates_ascending_and_exact() {
        let grid = example();
        // (0, 2) excludes row {5, 3, 7}, column {8}, box {6, 9, 8}.
        let cands = candidates(&grid, 0, 2);
        assert_eq!(cands.as_slice(), &[1, 2, 4]);

        let empty = Grid::empty(Dimensions::new(2));
        assert_eq!(candidates(&empty, 0, 0).as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_occupied_cell_conflicts_with_itself() {
        // Not part of the contract, but pin down the scan behavior.
        let grid = example();
        assert!(gives_conflict(&grid, 0, 0, 5));
    }
}
