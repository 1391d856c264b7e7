//! The backtracking enumerator.
//!
//! [`Backtracker`] owns the grid for the duration of a search and explores
//! every completion by chronological backtracking: find the first empty cell
//! in row-major order, try each digit in ascending order, recurse on the ones
//! the conflict predicates allow, and undo each placement before trying the
//! next. A grid with no empty cell is a solution by induction (every digit in
//! it was checked before being committed) and is handed to the
//! [`SolutionSink`].
//!
//! There is no failure path: a cell with no legal digit simply ends the loop
//! body zero times and the frame returns, which is the backtrack signal to
//! its caller. The search always terminates because every recursive call has
//! strictly fewer empty cells and the branching factor is bounded by the
//! digit range.

use crate::grid::Grid;
use crate::solver::conflicts::candidates;
use std::ops::ControlFlow;

/// Receives the results of an enumeration as they are discovered.
pub trait SolutionSink {
    /// Called once per complete, conflict-free grid, in discovery order.
    ///
    /// The grid reference is only valid for the duration of the call; the
    /// search reuses the buffer immediately afterwards.
    fn solution(&mut self, grid: &Grid);

    /// Called exactly once, after the search has finished, with the total
    /// number of solutions reported.
    fn finished(&mut self, count: u64) {
        let _ = count;
    }
}

/// A sink that renders every solution as a bordered grid on standard output,
/// followed by the final `Found N solution(s)` summary.
#[derive(Debug, Clone, Copy)]
pub struct StdoutSink {
    print_grids: bool,
}

impl StdoutSink {
    /// Creates the sink. With `print_grids` false only the final summary is
    /// printed.
    #[must_use]
    pub const fn new(print_grids: bool) -> Self {
        Self { print_grids }
    }
}

impl SolutionSink for StdoutSink {
    fn solution(&mut self, grid: &Grid) {
        if self.print_grids {
            // The grid's Display ends with its bottom border; println adds
            // the blank separator line.
            println!("{grid}");
        }
    }

    fn finished(&mut self, count: u64) {
        println!("{}", count_summary(count));
    }
}

/// A sink that stores every solution, for tests and programmatic callers.
#[derive(Debug, Default, Clone)]
pub struct Collector {
    /// The solutions in discovery order.
    pub solutions: Vec<Grid>,
    /// The count passed to [`SolutionSink::finished`], once the search ends.
    pub final_count: Option<u64>,
}

impl SolutionSink for Collector {
    fn solution(&mut self, grid: &Grid) {
        self.solutions.push(grid.clone());
    }

    fn finished(&mut self, count: u64) {
        self.final_count = Some(count);
    }
}

/// Formats the end-of-search summary line: `Found N solution`, with an `s`
/// appended whenever `N != 1`.
#[must_use]
pub fn count_summary(count: u64) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("Found {count} solution{suffix}")
}

/// Counters collected during one enumeration.
///
/// The search never reads these to make decisions; the single exception is
/// the solution count, which is compared against an optional cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Complete solutions reported.
    pub solutions: u64,
    /// Digits committed to a cell (and later undone).
    pub placements: u64,
    /// Candidate digits rejected by the conflict predicates.
    pub conflicts: u64,
    /// Deepest recursion reached; equals the number of initially empty cells
    /// whenever at least one solution was found.
    pub max_depth: usize,
}

/// Exhaustive depth-first enumerator over the completions of a grid.
///
/// The traversal is fixed: empty cells are filled in row-major scan order and
/// digits are tried in ascending order, so re-running on the same input
/// explores the same tree and reports solutions in the same order.
///
/// The starting grid's non-zero cells must already satisfy row/column/box
/// uniqueness. The solver does not validate this (use
/// [`Grid::first_violation`] first if the input is untrusted); starting from
/// an inconsistent grid leaves the reported solution count
/// implementation-defined.
#[derive(Debug, Clone)]
pub struct Backtracker {
    grid: Grid,
    limit: Option<u64>,
    stats: SearchStats,
}

impl Backtracker {
    /// Creates an enumerator that runs to exhaustion.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            limit: None,
            stats: SearchStats::default(),
        }
    }

    /// Creates an enumerator that stops after reporting `limit` solutions.
    ///
    /// The search still unwinds cleanly when the cap is hit: every placement
    /// is undone on the way out, so the grid ends in its starting state
    /// exactly as it does after an exhaustive run.
    #[must_use]
    pub fn with_limit(grid: Grid, limit: u64) -> Self {
        Self {
            grid,
            limit: Some(limit),
            stats: SearchStats::default(),
        }
    }

    /// The grid in its current state: the starting position, except while a
    /// search is on the stack.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The counters from the most recent [`enumerate`](Self::enumerate) run.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Enumerates every completion of the grid, reporting each to `sink` and
    /// finally calling [`SolutionSink::finished`] with the total.
    ///
    /// Returns the search counters. Afterwards the grid is byte-identical to
    /// its state at the call: every placement made during the search has been
    /// undone.
    pub fn enumerate<S: SolutionSink>(&mut self, sink: &mut S) -> SearchStats {
        self.stats = SearchStats::default();
        let _ = self.search(sink, 0);
        sink.finished(self.stats.solutions);
        self.stats
    }

    /// The first empty cell in row-major order, or `None` when the grid is
    /// fully assigned.
    fn find_next_empty(&self) -> Option<(usize, usize)> {
        let size = self.grid.dims().size();
        (0..size)
            .flat_map(|r| (0..size).map(move |c| (r, c)))
            .find(|&(r, c)| self.grid.is_empty_cell(r, c))
    }

    fn at_limit(&self) -> bool {
        self.limit.is_some_and(|limit| self.stats.solutions >= limit)
    }

    /// One frame of the depth-first enumeration. `Break` propagates a stop
    /// request from the solution cap; placements are undone on both exits.
    fn search<S: SolutionSink>(&mut self, sink: &mut S, depth: usize) -> ControlFlow<()> {
        if self.at_limit() {
            return ControlFlow::Break(());
        }
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let Some((r, c)) = self.find_next_empty() else {
            // No empty cell left: every digit was conflict-checked before it
            // was committed, so the grid is a solution.
            self.stats.solutions += 1;
            sink.solution(&self.grid);
            if self.at_limit() {
                return ControlFlow::Break(());
            }
            return ControlFlow::Continue(());
        };

        let digit_max = u64::from(self.grid.dims().digit_max());
        let cands = candidates(&self.grid, r, c);
        self.stats.conflicts += digit_max - cands.len() as u64;

        for d in cands {
            self.grid.set(r, c, d);
            self.stats.placements += 1;
            let flow = self.search(sink, depth + 1);
            // Undo unconditionally so sibling digits and the caller's own
            // backtracking see the cell empty again.
            self.grid.clear(r, c);
            flow?;
        }

        ControlFlow::Continue(())
    }
}
