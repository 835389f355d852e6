//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package monkeyc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use monkeyc_lex::Lexer;

fn lex_source(source: &str) -> usize {
    Lexer::new(source).count()
}

fn bench_lexer_statement(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_statement");

    let source = "let x = 42;";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("let_statement", |b| {
        b.iter(|| lex_source(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_operators");

    let source = "a == b != c < d > e + f - g * h / i";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("operator_soup", |b| {
        b.iter(|| lex_source(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let source = r#"
        let fib = fn(n) {
            if (n < 2) {
                return n;
            }
            return fib(n - 1) + fib(n - 2);
        };
        let result = fib(10);
        result == 55;
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("fibonacci", |b| b.iter(|| lex_source(black_box(source))));

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statement,
    bench_lexer_operators,
    bench_lexer_program
);
criterion_main!(benches);
