//! Parser benchmarks.
//!
//! Run with: `cargo bench --package tealc-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tealc_lex::Lexer;
use tealc_util::Handler;

fn parse_line_count(source: &str) -> usize {
    let mut lexer = Lexer::new(source);
    let handler = Handler::new();
    tealc_par::parse(&mut lexer, &handler).len()
}

fn bench_parser_small(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let source = "#pragma version 8\nint 1\nreturn\n";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("three_lines", |b| {
        b.iter(|| parse_line_count(black_box(source)))
    });

    group.finish();
}

fn bench_parser_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_program");

    let unit = concat!(
        "check:\n",
        "txn OnCompletion\n",
        "int NoOp\n",
        "==\n",
        "bnz check\n",
        "byte \"state\"\n",
        "app_global_get\n",
        "gtxn 0 Sender\n",
        "switch check check check\n",
        "return\n",
    );
    let source = unit.repeat(64);
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("repeated_contract", |b| {
        b.iter(|| parse_line_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(benches, bench_parser_small, bench_parser_program);
criterion_main!(benches);
