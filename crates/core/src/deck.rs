//! Word deck module - shuffled challenge generation
//!
//! The deck draws each loaded pair exactly once, in a seed-determined order.
//! The displayed candidate is the correct translation roughly one draw in
//! [`CORRECT_CANDIDATE_ODDS`], otherwise the target of another pair, so the
//! player has to read rather than tap everything.
//!
//! Also provides a simple LCG for deterministic testing.

use tui_wordfall_types::{RoundError, WordPair, CORRECT_CANDIDATE_ODDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// One drawn word ready to enter play: the pair plus the text the falling
/// word will actually display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub pair: WordPair,
    /// The displayed text. Matches `pair.target` only for correct candidates.
    pub candidate: String,
}

impl Challenge {
    /// Whether tapping this candidate would be the correct answer.
    pub fn is_correct(&self) -> bool {
        self.candidate == self.pair.target
    }
}

/// Supplies the next challenge to put in play.
///
/// The engine owns one of these and never looks past the next draw.
/// Fails with [`RoundError::NoMoreWords`] when exhausted.
pub trait WordSource {
    fn next(&mut self) -> Result<Challenge, RoundError>;
}

/// Shuffled word deck - the standard [`WordSource`].
///
/// Draws each pair exactly once in a seed-determined order. Same seed and
/// pair list produce the identical challenge sequence.
#[derive(Debug, Clone)]
pub struct WordDeck {
    pairs: Vec<WordPair>,
    /// Seed-shuffled draw order (indices into `pairs`)
    order: Vec<usize>,
    cursor: usize,
    rng: SimpleRng,
}

impl WordDeck {
    /// Create a deck over the given pairs with a deterministic draw order.
    pub fn new(pairs: Vec<WordPair>, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut order: Vec<usize> = (0..pairs.len()).collect();
        rng.shuffle(&mut order);
        Self {
            pairs,
            order,
            cursor: 0,
            rng,
        }
    }

    /// Pairs not yet drawn
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Pick a candidate for the pair at `index`: correct one time in
    /// `CORRECT_CANDIDATE_ODDS`, otherwise another pair's target.
    fn pick_candidate(&mut self, index: usize) -> String {
        let correct = self.pairs.len() == 1
            || self.rng.next_range(CORRECT_CANDIDATE_ODDS) == 0;
        if correct {
            return self.pairs[index].target.clone();
        }

        // Decoy: any other pair's target.
        let mut decoy = self.rng.next_range(self.pairs.len() as u32) as usize;
        if decoy == index {
            decoy = (decoy + 1) % self.pairs.len();
        }
        self.pairs[decoy].target.clone()
    }
}

impl WordSource for WordDeck {
    fn next(&mut self) -> Result<Challenge, RoundError> {
        if self.is_exhausted() {
            return Err(RoundError::NoMoreWords);
        }

        let index = self.order[self.cursor];
        self.cursor += 1;

        let candidate = self.pick_candidate(index);
        Ok(Challenge {
            pair: self.pairs[index].clone(),
            candidate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pairs() -> Vec<WordPair> {
        [
            ("house", "casa"),
            ("dog", "perro"),
            ("cat", "gato"),
            ("water", "agua"),
            ("book", "libro"),
        ]
        .iter()
        .map(|&(s, t)| WordPair::new(s, t).unwrap())
        .collect()
    }

    #[test]
    fn simple_rng_deterministic() {
        let mut a = SimpleRng::new(99);
        let mut b = SimpleRng::new(99);
        for _ in 0..10 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn simple_rng_range_bound() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..100 {
            assert!(rng.next_range(5) < 5);
        }
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = SimpleRng::new(3);
        let mut values = vec![1, 2, 3, 4, 5];
        rng.shuffle(&mut values);
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn deck_draws_each_pair_once() {
        let pairs = sample_pairs();
        let mut deck = WordDeck::new(pairs.clone(), 11);
        assert_eq!(deck.remaining(), pairs.len());

        let mut seen = Vec::new();
        while let Ok(challenge) = deck.next() {
            seen.push(challenge.pair);
        }
        assert_eq!(seen.len(), pairs.len());
        for pair in &pairs {
            assert!(seen.contains(pair));
        }
    }

    #[test]
    fn deck_exhaustion_yields_no_more_words() {
        let mut deck = WordDeck::new(sample_pairs(), 11);
        for _ in 0..5 {
            deck.next().unwrap();
        }
        assert!(deck.is_exhausted());
        assert_eq!(deck.next().unwrap_err(), RoundError::NoMoreWords);
        // Stays exhausted.
        assert_eq!(deck.next().unwrap_err(), RoundError::NoMoreWords);
    }

    #[test]
    fn deck_same_seed_same_sequence() {
        let mut a = WordDeck::new(sample_pairs(), 1234);
        let mut b = WordDeck::new(sample_pairs(), 1234);
        for _ in 0..5 {
            assert_eq!(a.next().unwrap(), b.next().unwrap());
        }
    }

    #[test]
    fn candidate_is_always_a_known_target() {
        let pairs = sample_pairs();
        let targets: Vec<&str> = pairs.iter().map(|p| p.target.as_str()).collect();

        // Any seed must only ever show real translations.
        for seed in 0..20 {
            let mut deck = WordDeck::new(pairs.clone(), seed);
            while let Ok(challenge) = deck.next() {
                assert!(targets.contains(&challenge.candidate.as_str()));
            }
        }
    }

    #[test]
    fn decoys_occur_across_seeds() {
        let pairs = sample_pairs();
        let mut correct = 0usize;
        let mut decoy = 0usize;
        for seed in 0..50 {
            let mut deck = WordDeck::new(pairs.clone(), seed);
            while let Ok(challenge) = deck.next() {
                if challenge.is_correct() {
                    correct += 1;
                } else {
                    decoy += 1;
                }
            }
        }
        // With 1-in-4 correct odds over 250 draws both outcomes must show up.
        assert!(correct > 0);
        assert!(decoy > 0);
        assert!(decoy > correct);
    }

    #[test]
    fn single_pair_deck_is_always_correct() {
        let pairs = vec![WordPair::new("house", "casa").unwrap()];
        for seed in 0..10 {
            let mut deck = WordDeck::new(pairs.clone(), seed);
            let challenge = deck.next().unwrap();
            assert!(challenge.is_correct());
        }
    }
}
