//! Concurrency tests for the shared engine handle.
//!
//! Taps and boundary crossings come from independent threads here, the worst
//! case the at-most-one-resolution guarantee has to survive.

use std::thread;

use tui_wordfall::core::{RoundEngine, SharedRoundEngine, WordDeck};
use tui_wordfall::types::{ResultKind, RoundError, WordPair};

fn shared_engine(pair_count: usize) -> SharedRoundEngine {
    let pairs: Vec<WordPair> = (0..pair_count)
        .map(|i| WordPair::new(format!("word{}", i), format!("palabra{}", i)).unwrap())
        .collect();
    SharedRoundEngine::new(RoundEngine::new(Box::new(WordDeck::new(pairs, 31))))
}

#[test]
fn racing_correct_tap_and_boundary_yield_one_resolution() {
    for _ in 0..20 {
        let engine = shared_engine(5);
        let word = engine.spawn_word().unwrap();
        let target = word.pair.target.clone();

        let tap_engine = engine.clone();
        let tap_id = word.id;
        let tap = thread::spawn(move || tap_engine.resolve_tap(tap_id, &target));

        let boundary_engine = engine.clone();
        let boundary_id = word.id;
        let boundary = thread::spawn(move || boundary_engine.resolve_boundary(boundary_id));

        let results = [tap.join().unwrap(), boundary.join().unwrap()];
        let oks: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(oks.len(), 1);
        assert!(results
            .iter()
            .all(|r| r.is_ok() || matches!(r, Err(err) if err.is_race_loss())));

        // Whichever arrived first fully decided the outcome.
        match oks[0].kind {
            ResultKind::Correct => {
                assert_eq!(engine.score(), 1);
                assert_eq!(engine.lives(), 3);
            }
            ResultKind::Incorrect => {
                assert_eq!(engine.score(), 0);
                assert_eq!(engine.lives(), 2);
            }
            ResultKind::GameOver => panic!("one loss cannot end a fresh round"),
        }
    }
}

#[test]
fn stress_many_words_each_resolve_at_most_once() {
    let engine = shared_engine(9);

    let words: Vec<_> = (0..3).map(|_| engine.spawn_word().unwrap()).collect();

    let mut handles = Vec::new();
    for word in &words {
        let tap_engine = engine.clone();
        let id = word.id;
        let target = word.pair.target.clone();
        handles.push(thread::spawn(move || tap_engine.resolve_tap(id, &target)));

        let boundary_engine = engine.clone();
        let id = word.id;
        handles.push(thread::spawn(move || boundary_engine.resolve_boundary(id)));
    }

    let results: Vec<Result<_, RoundError>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    let oks = results.iter().filter(|r| r.is_ok()).count();
    // A resolution can also fail with InvalidState if an earlier boundary
    // loss already ended the round; what can never happen is a double
    // resolution or a panic.
    assert!(oks <= words.len());
    for result in &results {
        match result {
            Ok(_) => {}
            Err(RoundError::UnknownEntity) | Err(RoundError::InvalidState) => {}
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    // Books balance: every successful resolution either scored or cost a life.
    let lives_lost = (3 - engine.lives()) as usize;
    assert_eq!(engine.score() as usize + lives_lost, oks);
}
