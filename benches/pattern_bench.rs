//! OCR pattern engine benchmarks.
//!
//! Run with: cargo bench --bench pattern_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_text(paragraphs: usize) -> String {
    "The fir\u{017f}t hou\u{017f}e was built by him\u{017f}elf, and wliich tlie cliild remembered \
     for many years af\u{017f}terward. Digitized by Google. "
        .repeat(paragraphs)
}

fn bench_apply(c: &mut Criterion) {
    let small = sample_text(5);
    let large = sample_text(500);

    c.bench_function("ocr_apply_small", |b| {
        b.iter(|| corpus_cleanup::ocr::apply(black_box(&small)).unwrap())
    });

    c.bench_function("ocr_apply_large", |b| {
        b.iter(|| corpus_cleanup::ocr::apply(black_box(&large)).unwrap())
    });
}

fn bench_table_compile(c: &mut Criterion) {
    c.bench_function("pattern_table_lookup", |b| {
        b.iter(|| corpus_cleanup::patterns::table().unwrap().patterns().len())
    });
}

criterion_group!(benches, bench_apply, bench_table_compile);
criterion_main!(benches);
