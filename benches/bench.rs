//! Criterion benchmarks for wordbench.
//!
//! Compares the two corpus strategies on a synthetic word list:
//! - Corpus construction from a token stream
//! - The replay query pass
//! - Line tokenization at different chunk sizes

use std::hint::black_box;
use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wordbench::corpus::CorpusKind;
use wordbench::query::{NoProgress, QueryRunner};
use wordbench::tokenizer::{LineTokenizer, ingest_reader};

/// Generate a newline-separated word list with repeated entries.
fn generate_wordlist(count: usize, distinct: usize) -> Vec<u8> {
    let syllables = ["ka", "lo", "mi", "ne", "ru", "sa", "to", "vi"];

    let mut out = Vec::new();
    for i in 0..count {
        let mut n = (i * 7919) % distinct;
        loop {
            out.extend_from_slice(syllables[n % syllables.len()].as_bytes());
            n /= syllables.len();
            if n == 0 {
                break;
            }
        }
        out.push(b'\n');
    }
    out
}

fn bench_query_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_pass");
    let wordlist = generate_wordlist(2_000, 500);

    for kind in [CorpusKind::Strcmp, CorpusKind::Uthash] {
        let mut corpus = kind.create();
        let ingested = ingest_reader(Cursor::new(wordlist.clone()), corpus.as_mut(), 16 * 1024)
            .expect("ingest synthetic word list");

        group.throughput(Throughput::Elements(ingested.total_count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(kind), &ingested.replay, |b, replay| {
            b.iter(|| {
                QueryRunner::new()
                    .run(black_box(replay), corpus.as_ref(), &mut NoProgress)
                    .expect("every token is present")
            })
        });
    }

    group.finish();
}

fn bench_corpus_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_build");
    let wordlist = generate_wordlist(10_000, 2_000);
    let tokens: Vec<Vec<u8>> = wordlist
        .split(|&b| b == b'\n')
        .map(|line| line.to_vec())
        .collect();

    group.throughput(Throughput::Elements(tokens.len() as u64));
    for kind in [CorpusKind::Strcmp, CorpusKind::Uthash] {
        group.bench_function(BenchmarkId::from_parameter(kind), |b| {
            b.iter(|| {
                let mut corpus = kind.create();
                for token in &tokens {
                    corpus.insert(black_box(token));
                }
                corpus.len()
            })
        });
    }

    group.finish();
}

fn bench_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");
    let wordlist = generate_wordlist(50_000, 10_000);

    group.throughput(Throughput::Bytes(wordlist.len() as u64));
    for chunk_size in [64, 4 * 1024, 16 * 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    LineTokenizer::with_chunk_size(Cursor::new(black_box(&wordlist)), chunk_size)
                        .count()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_query_pass, bench_corpus_build, bench_tokenizer);
criterion_main!(benches);
