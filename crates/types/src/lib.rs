//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (round engine, motion simulation, terminal rendering).
//!
//! # Round Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STARTING_LIVES` | 3 | Lives at round start |
//! | `CORRECT_CANDIDATE_ODDS` | 4 | One falling candidate in N shows the correct translation |
//!
//! # Result Display
//!
//! The presentation payloads carried by [`ResultEvent`] are fixed feedback
//! labels:
//!
//! | Result | Text | Flash duration |
//! |--------|------|----------------|
//! | Correct | `+1` | 1500ms |
//! | Incorrect | `-1` | 1500ms |
//! | Game over | `game over` | 4000ms |
//!
//! # Fall Timing
//!
//! The fall field runs on a fixed timestep. A word enters at the top with an
//! initial downward velocity and accelerates at a constant rate, like gravity
//! acting on a pushed object:
//!
//! - `TICK_MS`: 16ms fixed timestep (~60 FPS)
//! - `INITIAL_FALL_VELOCITY`: 1.5 rows/second
//! - `FALL_ACCELERATION`: 0.4 rows/second²
//! - `FIELD_ROWS`: 18 rows between spawn and the bottom boundary
//!
//! # Examples
//!
//! ```
//! use tui_wordfall_types::{ResultKind, WordPair, STARTING_LIVES};
//!
//! let pair = WordPair::new("house", "casa").unwrap();
//! assert_eq!(pair.target, "casa");
//!
//! // Empty fields are rejected at construction.
//! assert!(WordPair::new("", "casa").is_none());
//!
//! assert_eq!(ResultKind::Correct.text(), "+1");
//! assert_eq!(STARTING_LIVES, 3);
//! ```

use std::fmt;

/// Lives at round start (3 hearts)
pub const STARTING_LIVES: u8 = 3;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Flash duration for `+1` / `-1` feedback (1500ms)
pub const RESULT_FLASH_MS: u32 = 1500;

/// Flash duration for the terminal `game over` feedback (4000ms)
pub const GAME_OVER_FLASH_MS: u32 = 4000;

/// Display text for a correct resolution
pub const CORRECT_TEXT: &str = "+1";

/// Display text for an incorrect resolution
pub const INCORRECT_TEXT: &str = "-1";

/// Display text for the terminal resolution
pub const GAME_OVER_TEXT: &str = "game over";

/// Fall field height in rows between spawn and the bottom boundary
pub const FIELD_ROWS: u16 = 18;

/// Fall field width in columns (for candidate label placement)
pub const FIELD_COLS: u16 = 36;

/// Initial downward velocity of a spawned word (rows per second)
pub const INITIAL_FALL_VELOCITY: f32 = 1.5;

/// Constant downward acceleration while falling (rows per second²)
pub const FALL_ACCELERATION: f32 = 0.4;

/// Interval between word spawns in the default runner (milliseconds)
pub const SPAWN_INTERVAL_MS: u32 = 2500;

/// One falling candidate in this many shows the correct translation;
/// the rest are decoys drawn from other pairs.
pub const CORRECT_CANDIDATE_ODDS: u32 = 4;

/// Upper bound on words simultaneously tracked by the fall field.
///
/// Sizes the fixed-capacity per-tick boundary-crossing buffer.
pub const MAX_TRACKED_WORDS: usize = 16;

/// Unique identifier of a live falling word.
///
/// Fresh per spawn and monotonic within one engine, so a resolved id can never
/// be confused with a later word's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordId(pub u32);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// An immutable translation pair.
///
/// Invariant: both fields are non-empty. Construction is the only place this
/// is checked; the dataset loader turns a `None` into a load error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPair {
    /// The prompt-language word (shown in the top bar)
    pub source: String,
    /// The expected translation (what a correct tap matches)
    pub target: String,
}

impl WordPair {
    /// Create a pair, rejecting empty fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wordfall_types::WordPair;
    ///
    /// assert!(WordPair::new("house", "casa").is_some());
    /// assert!(WordPair::new("house", "").is_none());
    /// assert!(WordPair::new("  ", "casa").is_none());
    /// ```
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Option<Self> {
        let source = source.into();
        let target = target.into();
        if source.trim().is_empty() || target.trim().is_empty() {
            return None;
        }
        Some(Self { source, target })
    }
}

/// Outcome of resolving one falling word.
///
/// `GameOver` is emitted in place of `Incorrect` when the losing resolution
/// consumed the last life; there is never a separate trailing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Correct,
    Incorrect,
    GameOver,
}

impl ResultKind {
    /// Display text for this result
    pub fn text(&self) -> &'static str {
        match self {
            ResultKind::Correct => CORRECT_TEXT,
            ResultKind::Incorrect => INCORRECT_TEXT,
            ResultKind::GameOver => GAME_OVER_TEXT,
        }
    }

    /// How long the presentation should flash this result (milliseconds)
    pub fn flash_ms(&self) -> u32 {
        match self {
            ResultKind::Correct | ResultKind::Incorrect => RESULT_FLASH_MS,
            ResultKind::GameOver => GAME_OVER_FLASH_MS,
        }
    }
}

/// A resolution notification pushed to the presentation layer.
///
/// Carries the display payload alongside the kind so subscribers need no
/// lookup table of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultEvent {
    pub kind: ResultKind,
    pub text: &'static str,
    pub duration_ms: u32,
}

impl ResultEvent {
    pub fn new(kind: ResultKind) -> Self {
        Self {
            kind,
            text: kind.text(),
            duration_ms: kind.flash_ms(),
        }
    }

    pub fn correct() -> Self {
        Self::new(ResultKind::Correct)
    }

    pub fn incorrect() -> Self {
        Self::new(ResultKind::Incorrect)
    }

    pub fn game_over() -> Self {
        Self::new(ResultKind::GameOver)
    }
}

/// Recoverable round engine errors.
///
/// None of these are fatal: `UnknownEntity` is the expected loser of a
/// tap/boundary race and is silently discarded by callers; `InvalidState`
/// flags a caller bug (operating on a finished round); `NoMoreWords` means
/// the deck ran dry and the round ended gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    /// Operation attempted after the round ended
    InvalidState,
    /// The word id was already resolved (or never existed)
    UnknownEntity,
    /// The word source is exhausted
    NoMoreWords,
}

impl RoundError {
    /// Whether this error is the expected loser of a resolution race.
    ///
    /// Callers discard these without user-visible feedback.
    pub fn is_race_loss(&self) -> bool {
        matches!(self, RoundError::UnknownEntity)
    }
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::InvalidState => write!(f, "round is already over"),
            RoundError::UnknownEntity => write!(f, "word is no longer in play"),
            RoundError::NoMoreWords => write!(f, "word source is exhausted"),
        }
    }
}

impl std::error::Error for RoundError {}
