use std::hint::black_box;

use bench::{apply_medium_runtime_config, apply_small_runtime_config, default_rng, random_keys};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sequence::{SequenceExt, from_slice, iota};

const SIZES: [usize; 3] = [1024, 16384, 262144];

fn bench_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/filter_map_sum");
    apply_medium_runtime_config(&mut group);
    for &size in &SIZES {
        let data = random_keys(&mut default_rng(), size, 20);

        group.bench_function(BenchmarkId::new("sequence", size), |bencher| {
            bencher.iter(|| {
                let total: u64 = from_slice(black_box(&data))
                    .filter(|x| **x % 3 != 0)
                    .map(|x| x >> 2)
                    .sum();
                black_box(total)
            })
        });

        group.bench_function(BenchmarkId::new("iterator", size), |bencher| {
            bencher.iter(|| {
                let total: u64 = black_box(&data)
                    .iter()
                    .filter(|x| **x % 3 != 0)
                    .map(|x| x >> 2)
                    .sum();
                black_box(total)
            })
        });
    }
    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/grouping");
    apply_small_runtime_config(&mut group);
    for &size in &SIZES {
        let data = random_keys(&mut default_rng(), size, 2);

        group.bench_function(BenchmarkId::new("dedup_count", size), |bencher| {
            bencher.iter(|| black_box(from_slice(black_box(&data)).dedup().count()))
        });

        group.bench_function(BenchmarkId::new("chunk_by_count", size), |bencher| {
            bencher.iter(|| {
                black_box(
                    from_slice(black_box(&data))
                        .chunk_by(|a, b| a <= b)
                        .count(),
                )
            })
        });

        group.bench_function(BenchmarkId::new("zip_iota_sum", size), |bencher| {
            bencher.iter(|| {
                let total: u64 = from_slice(black_box(&data))
                    .zip(iota(0_u64))
                    .map(|(x, i)| x ^ i)
                    .sum();
                black_box(total)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipelines, bench_grouping);
criterion_main!(benches);
