//! Benchmarks for code fence escaping.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use mdfence::FenceEscaper;

/// Build a document alternating prose and HTML code blocks.
fn sample_document(sections: usize) -> String {
    let mut doc = String::from("# Benchmark\n");
    for i in 0..sections {
        doc.push_str(&format!("\nSection {i} with <inline> markup.\n\n```html\n"));
        doc.push_str("<div class=\"card\">\n  <p>Body</p>\n</div>\n```\n");
    }
    doc
}

fn bench_escape_small(c: &mut Criterion) {
    let doc = sample_document(10);
    let escaper = FenceEscaper::new();
    c.bench_function("escape_small", |b| {
        b.iter(|| escaper.escape(std::hint::black_box(&doc)));
    });
}

fn bench_escape_large(c: &mut Criterion) {
    let doc = sample_document(5_000);
    let escaper = FenceEscaper::new();
    c.bench_function("escape_large", |b| {
        b.iter(|| escaper.escape(std::hint::black_box(&doc)));
    });
}

fn bench_escape_no_fences(c: &mut Criterion) {
    let doc = "Plain prose with <b>tags</b> and no code.\n".repeat(20_000);
    let escaper = FenceEscaper::new();
    c.bench_function("escape_no_fences", |b| {
        b.iter(|| escaper.escape(std::hint::black_box(&doc)));
    });
}

criterion_group!(
    benches,
    bench_escape_small,
    bench_escape_large,
    bench_escape_no_fences
);
criterion_main!(benches);
