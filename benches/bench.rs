use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sudoku_solver::grid::{Dimensions, EXAMPLE, Grid, LOOSE_EXAMPLE};
use sudoku_solver::solver::search::{Backtracker, SolutionSink};

/// Discards solutions so only the search itself is measured.
struct NullSink;

impl SolutionSink for NullSink {
    fn solution(&mut self, _grid: &Grid) {}
}

fn bench_unique_puzzle(c: &mut Criterion) {
    let grid = Grid::from(EXAMPLE);
    c.bench_function("enumerate_unique_9x9", |b| {
        b.iter(|| {
            let mut solver = Backtracker::new(black_box(grid.clone()));
            solver.enumerate(&mut NullSink).solutions
        });
    });
}

fn bench_capped_loose_puzzle(c: &mut Criterion) {
    let grid = Grid::from(LOOSE_EXAMPLE);
    c.bench_function("enumerate_loose_9x9_first_10", |b| {
        b.iter(|| {
            let mut solver = Backtracker::with_limit(black_box(grid.clone()), 10);
            solver.enumerate(&mut NullSink).solutions
        });
    });
}

fn bench_shidoku_exhaustive(c: &mut Criterion) {
    let grid = Grid::empty(Dimensions::new(2));
    c.bench_function("enumerate_all_4x4", |b| {
        b.iter(|| {
            let mut solver = Backtracker::new(black_box(grid.clone()));
            solver.enumerate(&mut NullSink).solutions
        });
    });
}

criterion_group!(
    benches,
    bench_unique_puzzle,
    bench_capped_loose_puzzle,
    bench_shidoku_exhaustive
);
criterion_main!(benches);
