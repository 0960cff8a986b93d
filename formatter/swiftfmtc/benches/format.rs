#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Formatter benchmarks.
//!
//! Measures lexing and full-pipeline throughput across input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swiftfmt::{format_tokens, FormatOptions};
use swiftfmt_lexer::{tokenize, untokenize};

/// Generate N simple functions for benchmarking.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("func f{i}(x: Int) -> Int {{\nreturn x * {i}\n}}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Generate N type bodies with members and a switch.
fn generate_n_types(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "struct T{i} {{\nlet id: Int\nlet names: [String]\nfunc pick(x: Int) -> Int {{\nswitch x {{\ncase 0:\nreturn id\ndefault:\nreturn x\n}}\n}}\n}}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format(source: &str) -> String {
    untokenize(&format_tokens(tokenize(source), FormatOptions::default()))
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for size in [10, 100, 1000] {
        let source = generate_n_functions(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| tokenize(black_box(source)));
        });
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    for size in [10, 100, 1000] {
        let source = generate_n_functions(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| format(black_box(source)));
        });
    }
    group.finish();
}

fn bench_format_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_types");
    for size in [10, 100] {
        let source = generate_n_types(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| format(black_box(source)));
        });
    }
    group.finish();
}

fn bench_idempotent_reformat(c: &mut Criterion) {
    let formatted = format(&generate_n_types(100));
    c.bench_function("reformat_formatted", |b| {
        b.iter(|| format(black_box(&formatted)));
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_format,
    bench_format_types,
    bench_idempotent_reformat
);
criterion_main!(benches);
