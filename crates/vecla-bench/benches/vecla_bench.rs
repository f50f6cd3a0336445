//! Benchmarks for vecla operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use vecla_math::{compose_transform, matrix_builder, transform, Matrix, Vec2};

/// Benchmark vector primitives over a batch of points.
fn bench_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector");

    for size in [1000, 10000, 100000].iter() {
        let points: Vec<Vec2> = (0..*size)
            .map(|i| Vec2::new(i as f64, (*size - i) as f64))
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("normalize", size), &points, |b, p| {
            b.iter(|| p.iter().map(|v| black_box(*v).normalize()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("rotate_point_around", size), &points, |b, p| {
            let center = Vec2::new(50.0, 50.0);
            b.iter(|| {
                p.iter()
                    .map(|v| black_box(*v).rotate_point_around(center, 0.3))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark matrix composition and point transforms.
fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");

    let a = Matrix::rotation(0.5);
    let m = Matrix::translation(3.0, 4.0);

    group.bench_function("compose", |b| {
        b.iter(|| compose_transform(black_box(a), black_box(m)))
    });

    let points: Vec<Vec2> = (0..10000).map(|i| Vec2::new(i as f64, 1.0)).collect();
    group.throughput(Throughput::Elements(10000));
    group.bench_function("transform_10k", |b| {
        let t = a * m;
        b.iter(|| points.iter().map(|v| transform(*v, black_box(t))).collect::<Vec<_>>())
    });

    group.finish();
}

/// Benchmark builder chains.
fn bench_builder(c: &mut Criterion) {
    c.bench_function("builder_chain", |b| {
        b.iter(|| {
            matrix_builder()
                .rotate(black_box(0.5))
                .shear(0.1, 0.2)
                .scale(2.0, 3.0)
                .translate(30.0, 40.0)
                .get()
        })
    });
}

criterion_group!(benches, bench_vector, bench_matrix, bench_builder);
criterion_main!(benches);
