//! Round engine - the single source of truth for round state.
//!
//! Owns lives, score, and the set of active falling words, and decides the
//! outcome of every player tap and boundary crossing. Taps and boundary
//! events come from independent sources and may race over the same word; the
//! engine guarantees at most one resolution per word by consuming the entity
//! on the first resolution and answering the loser with `UnknownEntity`.
//!
//! State machine per word: `Active -> Resolved`, one irreversible transition.
//! Round level: `Playing -> GameOver`, one-way; after that every mutation
//! fails with `InvalidState` and only queries remain.

use tui_wordfall_types::{ResultEvent, RoundError, WordId, WordPair, STARTING_LIVES};

use crate::deck::WordSource;
use crate::events::{EngineEvent, EventBus};
use crate::snapshot::{ActiveWordSnapshot, RoundSnapshot};

/// A live word in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallingWord {
    pub id: WordId,
    pub pair: WordPair,
    /// Text displayed on the falling word; what a tap hands back
    pub candidate: String,
}

impl FallingWord {
    /// Whether `chosen` is the expected translation of the underlying pair.
    pub fn is_correct_answer(&self, chosen: &str) -> bool {
        chosen == self.pair.target
    }
}

/// Authoritative round state and resolution logic.
///
/// All mutations go through [`spawn_word`](Self::spawn_word),
/// [`resolve_tap`](Self::resolve_tap) and
/// [`resolve_boundary`](Self::resolve_boundary); no external component
/// touches the state directly. Each mutation publishes its events
/// synchronously before the call returns.
pub struct RoundEngine {
    source: Box<dyn WordSource + Send>,
    lives: u8,
    score: u32,
    active: Vec<FallingWord>,
    /// Monotonic id for spawned words (increments only on successful spawn).
    next_word_id: u32,
    over: bool,
    bus: EventBus,
}

impl RoundEngine {
    /// Create an engine over the given word source with the standard 3 lives.
    pub fn new(source: Box<dyn WordSource + Send>) -> Self {
        Self::with_lives(source, STARTING_LIVES)
    }

    /// Create an engine with a specific life count (must be at least 1).
    pub fn with_lives(source: Box<dyn WordSource + Send>, lives: u8) -> Self {
        debug_assert!(lives >= 1);
        Self {
            source,
            lives,
            score: 0,
            active: Vec::new(),
            next_word_id: 0,
            over: false,
            bus: EventBus::new(),
        }
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Active words in spawn order (newest last)
    pub fn active_words(&self) -> &[FallingWord] {
        &self.active
    }

    pub fn is_terminal(&self) -> bool {
        self.over
    }

    /// Attach an observer. Subscribers see events in mutation order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&EngineEvent) + Send + 'static) {
        self.bus.subscribe(subscriber);
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.lives = self.lives;
        out.score = self.score;
        out.over = self.over;
        out.active.clear();
        out.active.extend(self.active.iter().map(ActiveWordSnapshot::from));
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut snap = RoundSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Put the next word in play.
    ///
    /// Fails with `InvalidState` after game over. A dry word source ends the
    /// round gracefully: lives drain to zero, `game over` is published, and
    /// the call still returns `NoMoreWords` so the caller can tell exhaustion
    /// from a lost round.
    pub fn spawn_word(&mut self) -> Result<FallingWord, RoundError> {
        if self.over {
            return Err(RoundError::InvalidState);
        }

        let challenge = match self.source.next() {
            Ok(challenge) => challenge,
            Err(RoundError::NoMoreWords) => {
                self.lives = 0;
                self.enter_game_over();
                self.publish_resolution(ResultEvent::game_over());
                return Err(RoundError::NoMoreWords);
            }
            Err(other) => return Err(other),
        };

        self.next_word_id = self.next_word_id.wrapping_add(1);
        let word = FallingWord {
            id: WordId(self.next_word_id),
            pair: challenge.pair,
            candidate: challenge.candidate,
        };
        self.active.push(word.clone());

        let snap = self.snapshot();
        self.bus.publish(&EngineEvent::Spawned(word.clone()));
        self.bus.publish(&EngineEvent::State(snap));

        Ok(word)
    }

    /// Resolve a player tap on a falling word.
    ///
    /// `UnknownEntity` means the word was already resolved (the tap lost a
    /// race against the boundary event); callers discard it silently.
    pub fn resolve_tap(&mut self, id: WordId, chosen: &str) -> Result<ResultEvent, RoundError> {
        let word = self.take_active(id)?;

        let event = if word.is_correct_answer(chosen) {
            self.score += 1;
            ResultEvent::correct()
        } else {
            self.lose_life()
        };

        self.publish_resolution(event);
        Ok(event)
    }

    /// Resolve a word that reached the bottom unanswered.
    ///
    /// Identical to an incorrect tap, including the game-over tie-break and
    /// the `UnknownEntity` race behavior.
    pub fn resolve_boundary(&mut self, id: WordId) -> Result<ResultEvent, RoundError> {
        self.take_active(id)?;
        let event = self.lose_life();
        self.publish_resolution(event);
        Ok(event)
    }

    /// Remove the word from play, enforcing at-most-one resolution.
    fn take_active(&mut self, id: WordId) -> Result<FallingWord, RoundError> {
        if self.over {
            return Err(RoundError::InvalidState);
        }
        let index = self
            .active
            .iter()
            .position(|word| word.id == id)
            .ok_or(RoundError::UnknownEntity)?;
        Ok(self.active.remove(index))
    }

    /// Apply a life loss. The resolution that consumes the last life is
    /// reported as `game over`, superseding the plain incorrect event.
    fn lose_life(&mut self) -> ResultEvent {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.enter_game_over();
            ResultEvent::game_over()
        } else {
            ResultEvent::incorrect()
        }
    }

    /// Latch the terminal state. Remaining words leave play: the round is
    /// over and none of them can resolve anymore, so presentation layers
    /// should stop showing them.
    fn enter_game_over(&mut self) {
        self.over = true;
        self.active.clear();
    }

    fn publish_resolution(&mut self, event: ResultEvent) {
        let snap = self.snapshot();
        self.bus.publish(&EngineEvent::Result(event));
        self.bus.publish(&EngineEvent::State(snap));
    }
}

impl std::fmt::Debug for RoundEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundEngine")
            .field("lives", &self.lives)
            .field("score", &self.score)
            .field("active", &self.active)
            .field("over", &self.over)
            .finish()
    }
}
