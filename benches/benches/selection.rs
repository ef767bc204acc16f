// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use blocksel_region::BlockPos;
use blocksel_selector::{RegionSelector, SelectionSession, SelectorKind, Silent};
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_polygon_outline(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/poly2d_outline");

    // Each click appends a vertex; closing recounts the whole prism once.
    for vertices in [8usize, 64, 512] {
        let clicks: Vec<BlockPos> = (0..vertices)
            .map(|i| {
                let angle = i as f64 * core::f64::consts::TAU / vertices as f64;
                BlockPos::new(
                    (200.0 * angle.cos()).round() as i32,
                    0,
                    (200.0 * angle.sin()).round() as i32,
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(vertices), &clicks, |b, clicks| {
            b.iter_batched(
                || {
                    let mut session = SelectionSession::new();
                    session.set_selector_kind(SelectorKind::Polygonal2D);
                    session
                },
                |mut session| {
                    for pos in clicks {
                        session.select_secondary(*pos, &mut Silent);
                    }
                    if let Some(last) = clicks.last() {
                        session.select_secondary(*last, &mut Silent);
                    }
                    black_box(session.selector().area());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/convert");

    let mut source = SelectionSession::new();
    source.select_primary(BlockPos::new(-300, 0, -300), &mut Silent);
    source.select_secondary(BlockPos::new(300, 64, 300), &mut Silent);

    for kind in SelectorKind::ALL {
        group.bench_function(kind.type_name(), |b| {
            b.iter(|| black_box(kind.convert(source.selector(), source.limits()).area()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_polygon_outline, bench_convert);
criterion_main!(benches);
