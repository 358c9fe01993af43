// ============================================================================
// BigInt Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Kernels - addition, subtraction, multiplication at several digit sizes
// 2. Conversion - parsing and formatting of decimal strings
//
// The kernels are schoolbook by design: expect linear scaling for add/sub
// and quadratic for multiply as digit counts grow.
// ============================================================================

use bigint_engine::numeric::BigInt;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic digit string of the requested length, nonzero leading digit.
fn digit_string(len: usize) -> String {
    (0..len)
        .map(|i| char::from(b'1' + ((i * 7) % 9) as u8))
        .collect()
}

fn benchmark_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    for digits in [16, 128, 1024].iter() {
        let a: BigInt = digit_string(*digits).parse().unwrap();
        let b: BigInt = digit_string(*digits / 2 + 1).parse().unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(digits),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(*a + *b));
            },
        );
    }

    group.finish();
}

fn benchmark_subtraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("subtraction");

    for digits in [16, 128, 1024].iter() {
        let a: BigInt = digit_string(*digits).parse().unwrap();
        let b: BigInt = digit_string(*digits / 2 + 1).parse().unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(digits),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(*a - *b));
            },
        );
    }

    group.finish();
}

fn benchmark_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication");

    for digits in [16, 128, 1024].iter() {
        let a: BigInt = digit_string(*digits).parse().unwrap();
        let b: BigInt = digit_string(*digits).parse().unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(digits),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(*a * *b));
            },
        );
    }

    group.finish();
}

fn benchmark_parse_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for digits in [16, 128, 1024].iter() {
        let text = digit_string(*digits);
        let value: BigInt = text.parse().unwrap();

        group.bench_with_input(BenchmarkId::new("parse", digits), &text, |bench, text| {
            bench.iter(|| black_box(text.parse::<BigInt>().unwrap()));
        });

        group.bench_with_input(
            BenchmarkId::new("format", digits),
            &value,
            |bench, value| {
                bench.iter(|| black_box(value.to_string()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_addition,
    benchmark_subtraction,
    benchmark_multiplication,
    benchmark_parse_format
);
criterion_main!(benches);
