//! Benchmarks for wordgraph

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wordgraph::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = "The scientist carefully analyzed the data, wrote a detailed \
     report, and shared the report with the team, but the team requested more data, so the \
     scientist analyzed it again.";

fn benchmark_tokenization(c: &mut Criterion) {
    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenize(black_box(SAMPLE_TEXT)))
    });

    let mut group = c.benchmark_group("tokenize_by_size");
    for size in [1, 10, 100].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| tokenize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_graph_building(c: &mut Criterion) {
    let large_text = SAMPLE_TEXT.repeat(50);

    c.bench_function("graph_build", |b| {
        b.iter(|| WordGraph::from_text(black_box(SAMPLE_TEXT)))
    });
    c.bench_function("graph_build_large", |b| {
        b.iter(|| WordGraph::from_text(black_box(&large_text)))
    });
}

fn benchmark_queries(c: &mut Criterion) {
    let graph = WordGraph::from_text(SAMPLE_TEXT);
    let config = RankConfig::default();

    c.bench_function("bridge_words", |b| {
        b.iter(|| bridge_words(black_box(&graph), "the", "carefully"))
    });
    c.bench_function("shortest_path", |b| {
        b.iter(|| shortest_path(black_box(&graph), "the", "again"))
    });
    c.bench_function("page_rank", |b| {
        b.iter(|| page_rank(black_box(&graph), "the", &config))
    });
    c.bench_function("random_walk", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| random_walk(black_box(&graph), &mut rng))
    });
}

criterion_group!(
    benches,
    benchmark_tokenization,
    benchmark_graph_building,
    benchmark_queries
);
criterion_main!(benches);
