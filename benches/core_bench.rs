use bezier_editor::{evaluate_curve, ControlPointStore, CurveEvaluator};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn build_control_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i as f32 * 37.0) % 600.0;
            let y = (i as f32 * 91.0) % 600.0;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_curve_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_evaluation");

    for &point_count in &[4usize, 128, 999] {
        let points = build_control_points(point_count);

        group.bench_with_input(
            BenchmarkId::new("evaluate_curve_1000", point_count),
            &points,
            |b, points| {
                b.iter(|| {
                    let samples = evaluate_curve(black_box(points), 1000).expect("Grad darstellbar");
                    black_box(samples.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("evaluator_recompute_cached", point_count),
            &points,
            |b, points| {
                let mut evaluator = CurveEvaluator::new(1000);
                evaluator.recompute(points).expect("Grad darstellbar");
                b.iter(|| {
                    evaluator
                        .recompute(black_box(points))
                        .expect("Grad darstellbar");
                    black_box(evaluator.samples().len())
                })
            },
        );
    }

    group.finish();
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut store = ControlPointStore::new(999);
    for p in build_control_points(999) {
        store.append(p).expect("Kapazität reicht");
    }
    let queries = build_control_points(256);

    c.bench_function("find_nearest_999_points", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for q in &queries {
                if store.find_nearest(black_box(*q + Vec2::splat(3.0)), 10.0).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_curve_evaluation, bench_hit_testing);
criterion_main!(benches);
