#![deny(missing_docs)]
//! This crate enumerates the complete solutions of partially filled Sudoku
//! grids by exhaustive backtracking search.
//!
//! The library is split into two small components:
//!
//! 1. **Conflict detection** ([`solver::conflicts`]): pure predicates that
//!    answer whether placing a digit at a cell would duplicate it within the
//!    cell's row, column, or box.
//! 2. **Enumeration** ([`solver::search`]): a depth-first backtracking search
//!    that fills empty cells in row-major order, reports every complete
//!    conflict-free grid to a [`solver::search::SolutionSink`], and restores
//!    the grid on every exit path.
//!
//! There is deliberately no constraint propagation, no candidate heuristics,
//! and no bitboard trickery: the search prunes only on direct conflicts with
//! already-committed digits, which keeps it trivially correct and fully
//! deterministic. The same input always yields the same solutions in the same
//! order.
//!
//! ```
//! use sudoku_solver::grid::{EXAMPLE, Grid};
//! use sudoku_solver::solver::search::{Backtracker, Collector};
//!
//! let mut solver = Backtracker::new(Grid::from(EXAMPLE));
//! let mut sink = Collector::default();
//! let stats = solver.enumerate(&mut sink);
//! assert_eq!(stats.solutions, 1);
//! ```

/// The `grid` module defines the puzzle grid, its text format, and its
/// bordered rendering.
pub mod grid;

/// The `solver` module implements conflict detection and the backtracking
/// enumerator.
pub mod solver;
