// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use blocksel_region::{
    AnyRegion, BlockPos, BlockPos2, ConvexPolyhedralRegion, CylinderRegion, EllipsoidRegion,
    Polygonal2DRegion, Region,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn shapes(radius: i32) -> Vec<(&'static str, AnyRegion)> {
    let star = (0..10).map(|i| {
        let r = if i % 2 == 0 { radius } else { radius / 2 };
        let angle = f64::from(i) * core::f64::consts::PI / 5.0;
        BlockPos2::new(
            (f64::from(r) * angle.cos()).round() as i32,
            (f64::from(r) * angle.sin()).round() as i32,
        )
    });
    vec![
        (
            "cylinder",
            CylinderRegion::new(BlockPos2::new(0, 0), BlockPos2::new(radius, radius), 0, 63).into(),
        ),
        (
            "ellipsoid",
            EllipsoidRegion::new(BlockPos::ZERO, BlockPos::new(radius, radius / 2, radius)).into(),
        ),
        ("poly2d", Polygonal2DRegion::new(star, 0, 63).into()),
        (
            "convex",
            ConvexPolyhedralRegion::new([
                BlockPos::new(-radius, 0, 0),
                BlockPos::new(radius, 0, 0),
                BlockPos::new(0, 0, -radius),
                BlockPos::new(0, 0, radius),
                BlockPos::new(0, 63, 0),
            ])
            .into(),
        ),
    ]
}

fn bench_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("region/volume");

    // Volume counts whole rows, so cost should grow with the radius, not its square.
    for radius in [16, 128, 1_024] {
        for (name, region) in shapes(radius) {
            group.bench_with_input(BenchmarkId::new(name, radius), &region, |b, region| {
                b.iter(|| black_box(region.volume()));
            });
        }
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("region/contains");
    let radius = 128;
    let cells: Vec<BlockPos> = (-radius..=radius)
        .step_by(4)
        .flat_map(|x| (-radius..=radius).step_by(4).map(move |z| BlockPos::new(x, 8, z)))
        .collect();
    group.throughput(Throughput::Elements(cells.len() as u64));

    for (name, region) in shapes(radius) {
        group.bench_with_input(BenchmarkId::new(name, radius), &region, |b, region| {
            b.iter(|| cells.iter().filter(|pos| region.contains(**pos)).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_volume, bench_contains);
criterion_main!(benches);
