//! Criterion benchmarks for the round engine hot paths.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use tui_wordfall::core::{RoundEngine, WordDeck};
use tui_wordfall::types::WordPair;

fn deck_engine(pair_count: usize) -> RoundEngine {
    let pairs: Vec<WordPair> = (0..pair_count)
        .map(|i| WordPair::new(format!("word{}", i), format!("palabra{}", i)).unwrap())
        .collect();
    RoundEngine::new(Box::new(WordDeck::new(pairs, 12345)))
}

fn bench_spawn_and_resolve(c: &mut Criterion) {
    c.bench_function("spawn_and_correct_tap_100", |b| {
        b.iter_batched(
            || deck_engine(100),
            |mut engine| {
                for _ in 0..100 {
                    let word = engine.spawn_word().unwrap();
                    let target = word.pair.target.clone();
                    black_box(engine.resolve_tap(word.id, &target).unwrap());
                }
                engine
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_snapshot(c: &mut Criterion) {
    c.bench_function("snapshot_with_active_words", |b| {
        let mut engine = deck_engine(100);
        for _ in 0..8 {
            engine.spawn_word().unwrap();
        }
        let mut snap = tui_wordfall::core::RoundSnapshot::default();
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            black_box(&snap);
        });
    });
}

criterion_group!(benches, bench_spawn_and_resolve, bench_snapshot);
criterion_main!(benches);
