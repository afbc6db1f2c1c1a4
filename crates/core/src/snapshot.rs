//! Copy-out state views for presentation and observers.

use tui_wordfall_types::{WordId, STARTING_LIVES};

use crate::round::FallingWord;

/// One active falling word as seen by presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWordSnapshot {
    pub id: WordId,
    /// Prompt-language word of the underlying pair
    pub source: String,
    /// Text displayed on the falling word
    pub candidate: String,
}

impl From<&FallingWord> for ActiveWordSnapshot {
    fn from(value: &FallingWord) -> Self {
        Self {
            id: value.id,
            source: value.pair.source.clone(),
            candidate: value.candidate.clone(),
        }
    }
}

/// Full round state view, published once per mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub lives: u8,
    pub score: u32,
    pub over: bool,
    /// Active words in spawn order (newest last)
    pub active: Vec<ActiveWordSnapshot>,
}

impl RoundSnapshot {
    pub fn clear(&mut self) {
        self.lives = STARTING_LIVES;
        self.score = 0;
        self.over = false;
        self.active.clear();
    }

    /// Prompt to show in the top bar: the most recently spawned word's source.
    pub fn prompt(&self) -> Option<&str> {
        self.active.last().map(|w| w.source.as_str())
    }

    pub fn playing(&self) -> bool {
        !self.over
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            lives: STARTING_LIVES,
            score: 0,
            over: false,
            active: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_fresh_round() {
        let snap = RoundSnapshot::default();
        assert_eq!(snap.lives, STARTING_LIVES);
        assert_eq!(snap.score, 0);
        assert!(!snap.over);
        assert!(snap.playing());
        assert!(snap.prompt().is_none());
    }

    #[test]
    fn clear_resets_state() {
        let mut snap = RoundSnapshot {
            lives: 0,
            score: 9,
            over: true,
            active: vec![ActiveWordSnapshot {
                id: WordId(1),
                source: "house".into(),
                candidate: "casa".into(),
            }],
        };
        snap.clear();
        assert_eq!(snap, RoundSnapshot::default());
    }

    #[test]
    fn prompt_is_newest_word() {
        let mut snap = RoundSnapshot::default();
        snap.active.push(ActiveWordSnapshot {
            id: WordId(1),
            source: "house".into(),
            candidate: "casa".into(),
        });
        snap.active.push(ActiveWordSnapshot {
            id: WordId(2),
            source: "dog".into(),
            candidate: "gato".into(),
        });
        assert_eq!(snap.prompt(), Some("dog"));
    }
}
