mod common;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use common::{context, verbose};
use pi_bench::Algorithm;
use pi_bench::accuracy::correct_digits;

const DEPTHS: &[i64] = &[10, 100, 1000];
const AGM_DEPTHS: &[i64] = &[2, 4, 8];
const PRECISIONS: &[u32] = &[28, 100, 500];

fn depths_for(algorithm: Algorithm) -> &'static [i64] {
    match algorithm {
        Algorithm::Agm => AGM_DEPTHS,
        Algorithm::Bbp | Algorithm::Bellard | Algorithm::Chudnovsky => DEPTHS,
    }
}

fn bench_depth(c: &mut Criterion) {
    let ctx = context(28);

    for algorithm in Algorithm::ALL {
        if verbose() {
            for &depth in depths_for(algorithm) {
                let pi = algorithm.compute(depth, &ctx).expect("pi should succeed");
                eprintln!("[{algorithm}/depth/{depth}] correct digits: {}", correct_digits(&pi));
            }
        }

        let mut group = c.benchmark_group(format!("{algorithm}/depth"));
        group.sample_size(10);

        for &depth in depths_for(algorithm) {
            group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
                b.iter(|| black_box(algorithm.compute(depth, &ctx).expect("pi should succeed")))
            });
        }

        group.finish();
    }
}

fn bench_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision");
    group.sample_size(10);

    // Depths chosen so each algorithm roughly saturates 500 digits.
    let cases = [
        (Algorithm::Agm, 10),
        (Algorithm::Bbp, 420),
        (Algorithm::Bellard, 170),
        (Algorithm::Chudnovsky, 36),
    ];

    for &precision in PRECISIONS {
        let ctx = context(precision);
        for (algorithm, depth) in cases {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), precision),
                &depth,
                |b, &depth| {
                    b.iter(|| black_box(algorithm.compute(depth, &ctx).expect("pi should succeed")))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_depth, bench_precision);
criterion_main!(benches);
