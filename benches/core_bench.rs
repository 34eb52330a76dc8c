use bezier_curve_editor::{sample_curve, ControlPolygon};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_control_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / count as f32;
            Vec2::new(0.8 * angle.cos(), 0.8 * angle.sin())
        })
        .collect()
}

fn bench_sample_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_curve");

    for &point_count in &[4usize, 8usize] {
        let points = build_control_points(point_count);

        for &sample_count in &[100usize, 1000usize] {
            group.bench_with_input(
                BenchmarkId::new(format!("n{}", point_count), sample_count),
                &sample_count,
                |b, &samples| {
                    b.iter(|| {
                        let curve = sample_curve(black_box(&points), black_box(samples));
                        black_box(curve.len())
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut polygon = ControlPolygon::new();
    for point in build_control_points(4) {
        polygon.add_point(point, 8);
    }

    let query_points: Vec<Vec2> = (0..256)
        .map(|i| {
            let x = ((i * 7) % 100) as f32 / 50.0 - 1.0;
            let y = ((i * 13) % 100) as f32 / 50.0 - 1.0;
            Vec2::new(x, y)
        })
        .collect();

    c.bench_function("hit_test_batch", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for query in &query_points {
                if polygon.hit_test(black_box(*query), 0.1).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_sample_curve, bench_hit_test);
criterion_main!(benches);
