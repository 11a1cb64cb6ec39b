use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{
    apply_large_runtime_config, apply_medium_runtime_config, apply_small_runtime_config,
    default_rng, nearly_sorted, random_keys,
};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use sequence::from_slice_mut;
use sort::{SortAlgorithm, algorithm_name, all_algorithms, sort_with};

const BENCH_SIZES: [usize; 3] = [4096, 65536, 262144];

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    FewUnique,
    NearlySorted1pctSwaps,
    Descending,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::FewUnique => "few_unique",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Descending => "descending",
        }
    }

    fn generate(self, size: usize) -> Vec<u64> {
        let mut rng = default_rng();
        match self {
            Self::RandomUniform => random_keys(&mut rng, size, 64),
            Self::FewUnique => random_keys(&mut rng, size, 3),
            Self::NearlySorted1pctSwaps => nearly_sorted(&mut rng, size),
            Self::Descending => (0..size as u64).rev().collect(),
        }
    }
}

const DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::FewUnique,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Descending,
];

fn bench_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime(&mut group, size);
            let base = dist.generate(size);

            for &algo in all_algorithms() {
                if algo == SortAlgorithm::InsertionSort {
                    continue;
                }
                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        timed(iters, &base, |data| {
                            sort_with(algo, from_slice_mut(data), |a, b| a < b)
                        })
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| timed(iters, &base, |data| data.sort_unstable()));
            });
        }

        group.finish();
    }
}

fn timed(iters: u64, base: &[u64], mut run: impl FnMut(&mut [u64])) -> Duration {
    let mut total = Duration::ZERO;
    for _ in 0..iters {
        let mut data = base.to_vec();
        let start = Instant::now();
        run(&mut data);
        total += start.elapsed();
        black_box(&data);
    }
    total
}

fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 16384 {
        apply_small_runtime_config(group);
    } else if size <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
