//! Core round logic module - pure, deterministic, and testable
//!
//! This module contains all the round rules, state management, and word
//! selection logic. It has **zero dependencies** on UI, timing, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed and word list produce identical rounds
//! - **Testable**: Comprehensive unit tests for all round rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`round`]: the round engine - lives, score, active words, resolutions
//! - [`deck`]: shuffled word deck with decoy candidate selection
//! - [`events`]: typed engine events and the subscriber bus
//! - [`snapshot`]: copy-out state views for presentation
//! - [`shared`]: mutex-guarded engine handle for multi-threaded hosts
//!
//! # Round Rules
//!
//! - A round starts with 3 lives and a score of 0.
//! - Each spawned word falls with a candidate translation on display.
//! - Tapping a word whose candidate matches its pair's target scores `+1`.
//! - Tapping a mismatched candidate, or letting a word reach the bottom
//!   unanswered, costs one life (`-1`).
//! - The resolution that consumes the last life is published as `game over`
//!   instead of `-1`; the round is then terminal.
//! - Every word resolves at most once: the first tap or boundary event wins,
//!   the loser gets [`RoundError::UnknownEntity`](tui_wordfall_types::RoundError)
//!   and is discarded.
//!
//! # Example
//!
//! ```
//! use tui_wordfall_core::{RoundEngine, WordDeck};
//! use tui_wordfall_types::{ResultKind, WordPair};
//!
//! let pairs = vec![
//!     WordPair::new("house", "casa").unwrap(),
//!     WordPair::new("dog", "perro").unwrap(),
//! ];
//! let mut engine = RoundEngine::new(Box::new(WordDeck::new(pairs, 42)));
//!
//! let word = engine.spawn_word().unwrap();
//! let event = engine.resolve_tap(word.id, &word.candidate).unwrap();
//! assert!(matches!(event.kind, ResultKind::Correct | ResultKind::Incorrect));
//! ```

pub mod deck;
pub mod events;
pub mod round;
pub mod shared;
pub mod snapshot;

pub use tui_wordfall_types as types;

// Re-export commonly used types for convenience
pub use deck::{Challenge, SimpleRng, WordDeck, WordSource};
pub use events::{EngineEvent, EventBus};
pub use round::{FallingWord, RoundEngine};
pub use shared::SharedRoundEngine;
pub use snapshot::{ActiveWordSnapshot, RoundSnapshot};
