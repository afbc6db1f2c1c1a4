//! Fall field - deterministic fixed-timestep motion simulation
//!
//! Advances falling-word positions over time and reports when a word crosses
//! the bottom boundary. This is the whole motion contract: the round engine
//! never polls positions, it only consumes the discrete boundary crossings
//! this module reports.
//!
//! A word enters at the top with an initial downward velocity and accelerates
//! at a constant rate, like gravity acting on a pushed object. Integration is
//! per fixed tick, so a word attached at the top crosses the floor after a
//! fixed, computable number of ticks; tests can simulate "reaches the
//! boundary after N ticks" without any real animation.

use arrayvec::ArrayVec;

use tui_wordfall_core::FallingWord;
use tui_wordfall_types::{
    WordId, FALL_ACCELERATION, FIELD_COLS, FIELD_ROWS, INITIAL_FALL_VELOCITY, MAX_TRACKED_WORDS,
};

/// Crossings reported by one tick, fixed capacity, no allocation.
pub type Crossings = ArrayVec<WordId, MAX_TRACKED_WORDS>;

/// Renderable position of one tracked word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPosition {
    pub id: WordId,
    /// Leftmost column of the label
    pub column: u16,
    /// Whole row, 0 at the top
    pub row: u16,
}

#[derive(Debug, Clone, Copy)]
struct Falling {
    id: WordId,
    column: u16,
    row: f32,
    velocity: f32,
}

/// Tracks attached words and integrates their fall each tick.
#[derive(Debug, Clone, Default)]
pub struct FallField {
    entries: Vec<Falling>,
    /// Round-robin column cursor for label placement
    column_cursor: u16,
}

impl FallField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracked(&self) -> usize {
        self.entries.len()
    }

    pub fn is_tracking(&self, id: WordId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Start simulating a spawned word.
    ///
    /// Returns `false` if the word is already tracked or the field is at
    /// capacity; the caller simply won't get boundary reports for it.
    pub fn attach(&mut self, word: &FallingWord) -> bool {
        if self.entries.len() >= MAX_TRACKED_WORDS || self.is_tracking(word.id) {
            return false;
        }

        let column = self.place_label(word.candidate.chars().count() as u16);
        self.entries.push(Falling {
            id: word.id,
            column,
            row: 0.0,
            velocity: INITIAL_FALL_VELOCITY,
        });
        true
    }

    /// Stop simulating a word (it was resolved by a tap).
    ///
    /// Prevents a stale boundary report for an already-resolved word.
    pub fn detach(&mut self, id: WordId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Drop every tracked word (round is over).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Advance one fixed timestep and report boundary crossings.
    ///
    /// Crossed words are removed from the field; each id is reported exactly
    /// once, in attach order.
    pub fn tick(&mut self, dt_ms: u32) -> Crossings {
        let dt = dt_ms as f32 / 1000.0;

        let mut crossings = Crossings::new();
        for entry in &mut self.entries {
            entry.velocity += FALL_ACCELERATION * dt;
            entry.row += entry.velocity * dt;
            if entry.row >= FIELD_ROWS as f32 && !crossings.is_full() {
                crossings.push(entry.id);
            }
        }
        self.entries
            .retain(|entry| entry.row < FIELD_ROWS as f32);

        crossings
    }

    /// Current positions for rendering, in attach order.
    pub fn positions(&self) -> impl Iterator<Item = WordPosition> + '_ {
        self.entries.iter().map(|entry| WordPosition {
            id: entry.id,
            column: entry.column,
            row: entry.row as u16,
        })
    }

    /// Stagger labels across thirds of the field, clamped so the label fits.
    fn place_label(&mut self, label_width: u16) -> u16 {
        let third = FIELD_COLS / 3;
        let column = self.column_cursor * third + 1;
        self.column_cursor = (self.column_cursor + 1) % 3;
        column.min(FIELD_COLS.saturating_sub(label_width + 1))
    }
}
