//! Benchmarks for the generation-advance engine.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use game_of_life::compute::{Generation, Grid};

fn seeded_grid(rows: usize, columns: usize) -> Grid {
    let mut grid = Grid::new(rows, columns).unwrap();
    // Deterministic scatter, roughly one cell in three alive
    for row in 0..rows {
        for column in 0..columns {
            if (row * 31 + column * 7) % 3 == 0 {
                grid.set(row, column, true);
            }
        }
    }
    grid
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for size in [60, 128, 256, 512] {
        let grid = seeded_grid(size, size);
        let mut engine = Generation::new(&grid).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| black_box(engine.advance()));
            },
        );
    }

    group.finish();
}

fn bench_advance_default_shape(c: &mut Criterion) {
    // The application's 60x180 grid
    let grid = seeded_grid(60, 180);
    let mut engine = Generation::new(&grid).unwrap();

    c.bench_function("advance_60x180", |b| {
        b.iter(|| black_box(engine.advance()));
    });
}

criterion_group!(benches, bench_advance, bench_advance_default_shape);
criterion_main!(benches);
