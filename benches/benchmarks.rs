use criterion::{BenchmarkId, black_box, criterion_group, criterion_main, Criterion};

use anaexplorer::*;
use anaexplorer::test::*;

pub fn anagram_key_benchmark(c: &mut Criterion) {
    c.bench_function("anagram_key_single_char", |b| b.iter(|| {
        black_box("a").anagram_key()
    }));

    c.bench_function("anagram_key_word_6_chars", |b| b.iter(|| {
        black_box("houses").anagram_key()
    }));

    c.bench_function("anagram_key_word_12_chars", |b| b.iter(|| {
        black_box("benchmarking").anagram_key()
    }));

    c.bench_function("char_frequencies_word_12_chars", |b| b.iter(|| {
        black_box("benchmarking").char_frequencies()
    }));
}

pub fn index_benchmark(c: &mut Criterion) {
    let corpus = get_test_corpus();

    c.bench_with_input(BenchmarkId::new("build_index", "single_thread"), &corpus, |b, corpus| b.iter(|| {
        AnagramExplorer::new_with_params(corpus.clone(), get_test_params())
    }));

    c.bench_with_input(BenchmarkId::new("build_index", "parallel"), &corpus, |b, corpus| b.iter(|| {
        AnagramExplorer::new(corpus.clone())
    }));

    let explorer = AnagramExplorer::new(corpus);

    c.bench_function("most_anagrams", |b| b.iter(|| {
        explorer.get_most_anagrams(LETTERS)
    }));

    c.bench_function("is_valid_anagram_pair", |b| b.iter(|| {
        explorer.is_valid_anagram_pair(black_box(("alerted", "treadle")), &['a', 'l', 't'])
    }));
}

criterion_group!(benches, anagram_key_benchmark, index_benchmark);
criterion_main!(benches);
