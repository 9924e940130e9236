//! End-to-end per-document pipeline benchmarks.
//!
//! Run with: cargo bench --bench pipeline_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use corpus_cleanup::config::PipelineConfig;
use corpus_cleanup::pipeline::CleaningPipeline;

fn sample_document(paragraphs: usize) -> String {
    "This is an ordinary paragraph of historical prose about a quiet village, repeated many \
     times to simulate a realistic document length for throughput measurement. "
        .repeat(paragraphs)
}

fn bench_pipeline(c: &mut Criterion) {
    let config = PipelineConfig::default();
    let pipeline = CleaningPipeline::new(&config);
    let doc = sample_document(200);

    c.bench_function("pipeline_run_single_document", |b| {
        b.iter(|| pipeline.run(black_box(&doc), &config, None, None).unwrap())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
