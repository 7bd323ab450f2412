//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package tealc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tealc_lex::tokenize;

fn token_count(source: &str) -> usize {
    tokenize(source).0.len()
}

fn bench_lexer_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "#pragma version 8\nint 1\nreturn\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("three_lines", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    // A realistic contract body, repeated to simulate a large document.
    let unit = concat!(
        "#pragma version 8\n",
        "txn ApplicationID\n",
        "bz create\n",
        "txn OnCompletion\n",
        "int NoOp\n",
        "==\n",
        "bnz handle_noop\n",
        "err\n",
        "create:\n",
        "int 1\n",
        "return\n",
        "handle_noop: // main entry\n",
        "byte \"counter\"\n",
        "app_global_get\n",
        "int 1\n",
        "+\n",
        "byte \"counter\"\n",
        "swap\n",
        "app_global_put\n",
        "int 1\n",
        "return\n",
    );
    let source = unit.repeat(64);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("repeated_contract", |b| {
        b.iter(|| token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(benches, bench_lexer_small, bench_lexer_program);
criterion_main!(benches);
