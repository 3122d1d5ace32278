//! Algorithm throughput with emission suppressed.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::seq::SliceRandom;
use sortrace_algorithms::Algorithm;
use sortrace_array::ObservedArray;
use sortrace_core::Element;

fn permutation(n: usize) -> Vec<Element> {
    let mut values: Vec<Element> = (1..=n as Element).collect();
    values.shuffle(&mut rand::thread_rng());
    values
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_1000");
    let input = permutation(1_000);
    for algo in Algorithm::ALL {
        group.bench_function(algo.name(), |b| {
            b.iter_batched(
                || ObservedArray::silent(input.clone()),
                |mut data| algo.run(&mut data),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
