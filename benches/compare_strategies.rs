use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use maze_search::frontier::Strategy;
use maze_search::grid::Grid;
use maze_search::heuristic::Heuristic;
use maze_search::search::search;

const STRATEGIES: [Strategy; 4] = [
    Strategy::BreadthFirst,
    Strategy::DepthFirst,
    Strategy::BestFirst(Heuristic::Manhattan),
    Strategy::BestFirst(Heuristic::Euclidean),
];

fn compare_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Maze search");

    for seed in 0..3u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::random(&mut rng, 64, 64, 0.25);
        let Some(start) = grid.random_free_cell(&mut rng) else {
            continue;
        };
        let Some(goal) = grid.random_free_cell(&mut rng) else {
            continue;
        };

        let (height, width) = grid.dimensions();
        let instance = format!("{height}x{width}:{seed}");

        for strategy in STRATEGIES {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), &instance),
                &grid,
                |b, g| b.iter(|| search(g, start, goal, strategy).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, compare_strategies);
criterion_main!(benches);
