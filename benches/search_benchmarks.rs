//! Criterion benchmarks for search engine core operations.
//!
//! Run with: `cargo bench`
//!
//! Uses a synthetic CRLF corpus so numbers are reproducible across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use corpus_search::{build_suffix_array, fold_case, full_match, multi_words, Corpus, PageRequest};

// ─── Helpers ─────────────────────────────────────────────────────────

const VOCABULARY: &[&str] = &[
    "the", "king", "queen", "love", "death", "sword", "crown", "night", "ghost", "honour",
    "fair", "foul", "blood", "heaven", "earth", "word", "mercy", "brother", "duke", "fool",
];

/// Deterministic pseudo-text of `num_lines` lines, 8 words each.
fn synthetic_corpus(num_lines: usize) -> String {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut lines = Vec::with_capacity(num_lines);
    for _ in 0..num_lines {
        let words: Vec<&str> = (0..8)
            .map(|_| {
                // xorshift64
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                VOCABULARY[(state % VOCABULARY.len() as u64) as usize]
            })
            .collect();
        lines.push(words.join(" "));
    }
    lines.join("\r\n")
}

// ─── Index build ─────────────────────────────────────────────────────

fn bench_suffix_array_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_array_build");
    group.sample_size(10);

    for &num_lines in &[1_000, 10_000, 50_000] {
        let text = fold_case(&synthetic_corpus(num_lines));
        group.bench_with_input(BenchmarkId::from_parameter(num_lines), &text, |b, text| {
            b.iter(|| build_suffix_array(black_box(text.as_bytes())))
        });
    }

    group.finish();
}

// ─── Search paths ────────────────────────────────────────────────────

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let corpus = Corpus::from_text(synthetic_corpus(50_000));

    group.bench_function("lookup_common_word", |b| {
        b.iter(|| corpus.lookup(black_box("king")))
    });

    group.bench_function("lookup_missing", |b| {
        b.iter(|| corpus.lookup(black_box("yorick")))
    });

    group.bench_function("full_match_first_page", |b| {
        b.iter(|| full_match(&corpus, black_box("the king"), PageRequest::default()))
    });

    group.bench_function("full_match_deep_page", |b| {
        b.iter(|| full_match(&corpus, black_box("king"), PageRequest::new(200, 20)))
    });

    group.bench_function("multi_words_two", |b| {
        b.iter(|| multi_words(&corpus, black_box("ghost mercy"), PageRequest::default()))
    });

    group.bench_function("multi_words_four", |b| {
        b.iter(|| multi_words(&corpus, black_box("ghost mercy crown fool"), PageRequest::default()))
    });

    group.bench_function("search_no_match", |b| {
        b.iter(|| corpus.search(black_box("yorick poor"), 20, 1))
    });

    group.finish();
}

criterion_group!(benches, bench_suffix_array_build, bench_search);
criterion_main!(benches);
