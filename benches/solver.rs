//! Benchmarks for the sliding-tile puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use npuzzle::heuristics::{manhattan_distance, misplaced_tiles};
use npuzzle::moves::successors;
use npuzzle::tree::{NodeId, State};
use npuzzle::{solve, Board, Goal, Strategy};

fn scrambled(size: usize, steps: usize) -> Board {
    Board::scrambled(size, steps, &mut SmallRng::seed_from_u64(11)).unwrap()
}

/// Benchmark every strategy on the same mid-depth 8-puzzle.
fn bench_strategies_3x3(c: &mut Criterion) {
    let start = scrambled(3, 24);
    let mut group = c.benchmark_group("strategies_3x3");
    group.sample_size(10);
    for strategy in Strategy::ALL {
        group.bench_function(strategy.code(), |b| {
            b.iter(|| solve(black_box(&start), strategy, None))
        });
    }
    group.finish();
}

/// Benchmark A* on a 15-puzzle a few dozen moves from the goal.
fn bench_a_star_4x4(c: &mut Criterion) {
    let start = scrambled(4, 40);
    let mut group = c.benchmark_group("a_star_4x4");
    group.sample_size(10);
    group.bench_function("manhattan", |b| {
        b.iter(|| solve(black_box(&start), Strategy::AStar, None))
    });
    group.finish();
}

/// Benchmark the two heuristics on a scrambled 15-puzzle.
fn bench_heuristics(c: &mut Criterion) {
    let start = scrambled(4, 60);
    let goal = Goal::canonical(4).unwrap();

    c.bench_function("manhattan_distance", |b| {
        b.iter(|| manhattan_distance(black_box(&start), &goal))
    });
    c.bench_function("misplaced_tiles", |b| {
        b.iter(|| misplaced_tiles(black_box(&start), &goal))
    });
}

/// Benchmark successor generation from an interior blank.
fn bench_successors(c: &mut Criterion) {
    let board = Board::new(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
    let state = State::root(board);

    c.bench_function("successors", |b| {
        b.iter(|| successors(NodeId::ROOT, black_box(&state)))
    });
}

criterion_group!(
    benches,
    bench_strategies_3x3,
    bench_a_star_4x4,
    bench_heuristics,
    bench_successors
);
criterion_main!(benches);
