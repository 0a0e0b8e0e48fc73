#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tile_lines::prelude::*;

fn line_mode_benchmark(c: &mut Criterion) {
    for mode in LineMode::ALL {
        let mut group = c.benchmark_group(format!("{mode}_line"));

        for length in [10, 100, 1_000, 10_000] {
            let start = Location::new(0, 0);
            let end = Location::new(length, length / 3);

            group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
                b.iter(|| line(mode, black_box(start), black_box(end), false));
            });
        }

        group.finish();
    }
}

fn line_of_sight_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_of_sight");

    let mut map = GridMap::new(MapId(0), 256, 256, ["floor", "rock"]).expect("valid map");
    for row in (0..256).step_by(7) {
        map.set_wall(200, row, true).expect("inside the map");
    }

    for mode in LineMode::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            b.iter(|| {
                first_wall(
                    mode,
                    black_box(map.location(0, 0)),
                    black_box(map.location(255, 130)),
                    &map,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, line_mode_benchmark, line_of_sight_benchmark);
criterion_main!(benches);
