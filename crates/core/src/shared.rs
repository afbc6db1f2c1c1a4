//! Mutex-guarded engine handle for multi-threaded hosts.
//!
//! Taps and boundary crossings arrive from independent sources (input thread
//! vs. simulation thread). The at-most-one-resolution guarantee holds only if
//! mutations are applied atomically with respect to each other, so hosts that
//! are not single-threaded go through this handle instead of owning the
//! engine directly. Every operation completes synchronously; nothing blocks
//! beyond the lock itself.

use std::sync::{Arc, Mutex, MutexGuard};

use tui_wordfall_types::{ResultEvent, RoundError, WordId};

use crate::events::EngineEvent;
use crate::round::{FallingWord, RoundEngine};
use crate::snapshot::RoundSnapshot;

/// Cloneable handle to a mutex-guarded [`RoundEngine`].
#[derive(Debug, Clone)]
pub struct SharedRoundEngine {
    inner: Arc<Mutex<RoundEngine>>,
}

impl SharedRoundEngine {
    pub fn new(engine: RoundEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // A panicked holder cannot leave the engine in a torn state (mutations
    // are single assignments behind &mut self), so poison is ignored.
    fn lock(&self) -> MutexGuard<'_, RoundEngine> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn spawn_word(&self) -> Result<FallingWord, RoundError> {
        self.lock().spawn_word()
    }

    pub fn resolve_tap(&self, id: WordId, chosen: &str) -> Result<ResultEvent, RoundError> {
        self.lock().resolve_tap(id, chosen)
    }

    pub fn resolve_boundary(&self, id: WordId) -> Result<ResultEvent, RoundError> {
        self.lock().resolve_boundary(id)
    }

    pub fn is_terminal(&self) -> bool {
        self.lock().is_terminal()
    }

    pub fn lives(&self) -> u8 {
        self.lock().lives()
    }

    pub fn score(&self) -> u32 {
        self.lock().score()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.lock().snapshot()
    }

    pub fn subscribe(&self, subscriber: impl FnMut(&EngineEvent) + Send + 'static) {
        self.lock().subscribe(subscriber);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Challenge, WordSource};
    use std::collections::VecDeque;
    use std::thread;
    use tui_wordfall_types::WordPair;

    struct FixedSource {
        challenges: VecDeque<Challenge>,
    }

    impl WordSource for FixedSource {
        fn next(&mut self) -> Result<Challenge, RoundError> {
            self.challenges.pop_front().ok_or(RoundError::NoMoreWords)
        }
    }

    fn shared_engine() -> SharedRoundEngine {
        let challenges = VecDeque::from(vec![Challenge {
            pair: WordPair::new("house", "casa").unwrap(),
            candidate: "perro".to_string(),
        }]);
        SharedRoundEngine::new(RoundEngine::new(Box::new(FixedSource { challenges })))
    }

    #[test]
    fn handle_clones_share_state() {
        let engine = shared_engine();
        let clone = engine.clone();

        let word = engine.spawn_word().unwrap();
        assert_eq!(clone.snapshot().active.len(), 1);

        clone.resolve_tap(word.id, "perro").unwrap();
        assert_eq!(engine.lives(), 2);
    }

    #[test]
    fn racing_tap_and_boundary_resolve_exactly_once() {
        let engine = shared_engine();
        let word = engine.spawn_word().unwrap();

        let tap_engine = engine.clone();
        let tap_id = word.id;
        let tap = thread::spawn(move || tap_engine.resolve_tap(tap_id, "perro"));

        let boundary_engine = engine.clone();
        let boundary_id = word.id;
        let boundary = thread::spawn(move || boundary_engine.resolve_boundary(boundary_id));

        let results = [tap.join().unwrap(), boundary.join().unwrap()];
        let oks = results.iter().filter(|r| r.is_ok()).count();
        let race_losses = results
            .iter()
            .filter(|r| matches!(r, Err(err) if err.is_race_loss()))
            .count();

        assert_eq!(oks, 1);
        assert_eq!(race_losses, 1);
        // Exactly one life lost, never two.
        assert_eq!(engine.lives(), 2);
    }
}
