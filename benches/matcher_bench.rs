use std::hint::black_box;

use convbi::{FaqMatcher, MatchConfig};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

mod common;
use common::{SAMPLE_QUESTION, generate_corpus};

/// Corpus preprocessing cost at different sizes
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &size in [100, 1000, 10000].iter() {
        let corpus = generate_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("entries_{size}"), |b| {
            b.iter(|| FaqMatcher::build(black_box(corpus.clone())))
        });
    }

    group.finish();
}

/// Single question against pre-built corpora
fn bench_answer(c: &mut Criterion) {
    let mut group = c.benchmark_group("answer");

    for &size in [100, 1000, 10000].iter() {
        let matcher = FaqMatcher::build(generate_corpus(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("entries_{size}"), |b| {
            b.iter(|| matcher.answer(black_box(SAMPLE_QUESTION)))
        });
    }

    group.finish();
}

/// Sequential scoring vs the rayon path on a large corpus
fn bench_parallel_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_scoring");
    let corpus = generate_corpus(20000);

    for parallel in [false, true] {
        let config = MatchConfig {
            parallel,
            parallel_min_entries: 1,
            ..MatchConfig::default()
        };
        let matcher = match FaqMatcher::build_with_config(corpus.clone(), config) {
            Ok(matcher) => matcher,
            Err(err) => panic!("bench config rejected: {err}"),
        };
        let name = if parallel { "rayon" } else { "sequential" };
        group.bench_function(name, |b| b.iter(|| matcher.answer(black_box(SAMPLE_QUESTION))));
    }

    group.finish();
}

fn bench_top_matches(c: &mut Criterion) {
    let matcher = FaqMatcher::build(generate_corpus(1000));
    c.bench_function("top_matches_k5", |b| {
        b.iter(|| matcher.top_matches(black_box(SAMPLE_QUESTION), 5))
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_answer,
    bench_parallel_scoring,
    bench_top_matches
);
criterion_main!(benches);
