//! Criterion benchmarks for polygon reconstruction and viewport fitting.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyclose::polygon::view::{fit_to_viewport, ViewCfg};
use polyclose::synth::{draw_traverse, ReplayToken, SideCount, TraverseCfg};
use polyclose::{build_polygon, correct_angles};

fn bench_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[3usize, 10, 50, 200] {
        let cfg = TraverseCfg {
            sides: SideCount::Fixed(n),
            ..TraverseCfg::default()
        };
        let corrected = {
            let t = draw_traverse(cfg, ReplayToken { seed: 44, index: 0 });
            correct_angles(&t.observed, n).unwrap().corrected
        };
        group.bench_with_input(BenchmarkId::new("build_polygon", n), &n, |b, _| {
            b.iter(|| {
                let _g = build_polygon(&corrected);
            })
        });
        group.bench_with_input(BenchmarkId::new("fit_to_viewport", n), &n, |b, _| {
            b.iter_batched(
                || build_polygon(&corrected).unwrap(),
                |g| {
                    let _pts = fit_to_viewport(&g, ViewCfg::default());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon);
criterion_main!(benches);
