//! Word-pair dataset loading.
//!
//! The on-disk format is a JSON array of objects with `text_eng` and
//! `text_spa` keys. Loading validates the
//! pair invariant (both fields non-empty) and fails with context rather
//! than letting bad entries reach the round engine.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use tui_wordfall_types::WordPair;

/// Raw dataset entry, field names per the on-disk JSON schema.
#[derive(Debug, Deserialize)]
struct WordEntry {
    #[serde(rename = "text_eng")]
    eng: String,
    #[serde(rename = "text_spa")]
    spa: String,
}

/// Parse a JSON word list, validating every entry.
pub fn parse_pairs(json: &str) -> Result<Vec<WordPair>> {
    let entries: Vec<WordEntry> =
        serde_json::from_str(json).context("word list is not valid JSON")?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            WordPair::new(entry.eng, entry.spa)
                .ok_or_else(|| anyhow!("word list entry {} has an empty field", index))
        })
        .collect()
}

/// Load a word list from a file.
pub fn load_pairs(path: impl AsRef<Path>) -> Result<Vec<WordPair>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    parse_pairs(&json).with_context(|| format!("failed to parse word list {}", path.display()))
}

/// The builtin English-Spanish list shipped with the game.
pub fn builtin_pairs() -> Vec<WordPair> {
    // The embedded list is validated by tests, so a parse failure here is a
    // build defect, not a runtime condition.
    parse_pairs(include_str!("../words.json")).expect("builtin word list is valid")
}
