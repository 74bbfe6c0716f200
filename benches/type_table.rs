//! Benchmarks for particle type table queries.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use plife::{ParticleTypes, RandomizeParams};

fn table(types: usize) -> ParticleTypes {
    let mut rng = StdRng::seed_from_u64(0);
    ParticleTypes::randomized(types, &RandomizeParams::default(), &mut rng)
        .expect("default params are valid")
}

fn bench_pair_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_lookup");

    for types in [4usize, 16, 64] {
        let t = table(types);
        group.bench_with_input(BenchmarkId::new("radii_and_attract", types), &t, |b, t| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for i in 0..t.size() {
                    for j in 0..t.size() {
                        let (min_r, max_r) = t.radii(i, j).unwrap_or_default();
                        acc += t.attract(i, j).unwrap_or_default() * (max_r - min_r);
                    }
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

fn bench_max_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_radius");

    for types in [16usize, 256] {
        let t = table(types);
        group.bench_with_input(BenchmarkId::new("cached", types), &t, |b, t| {
            b.iter(|| black_box(t.max_radius()))
        });

        let mut t = table(types);
        group.bench_function(BenchmarkId::new("rescan", types), |b| {
            b.iter(|| black_box(t.refresh_max_radius()))
        });
    }

    group.finish();
}

fn bench_randomize(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomize");
    let params = RandomizeParams::default();

    for types in [8usize, 64] {
        group.bench_with_input(BenchmarkId::new("types", types), &types, |b, &types| {
            let mut rng = StdRng::seed_from_u64(1);
            let mut t = ParticleTypes::new(types);
            b.iter(|| black_box(t.randomize(&params, &mut rng)))
        });
    }

    group.finish();
}

fn bench_to_wgsl(c: &mut Criterion) {
    let t = table(16);
    c.bench_function("to_wgsl_16_types", |b| b.iter(|| black_box(t.to_wgsl())));
}

criterion_group!(
    benches,
    bench_pair_lookup,
    bench_max_radius,
    bench_randomize,
    bench_to_wgsl,
);
criterion_main!(benches);
