//! English pronunciation dictionary (CMU Pronouncing Dictionary format).
//!
//! Entries look like `abandonment AH0 B AE1 N D AH0 N M AH0 N T`. Alternate
//! pronunciations repeat the word with a numbered suffix (`word(2)`), and are
//! kept in file order so that the first variant is always index 0.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// A capability returning the pronunciation variants of a word
pub trait Pronouncing: Send + Sync {
    /// All pronunciation variants of `word` (lower-case), in dictionary order
    fn pronunciations(&self, word: &str) -> Option<&[Vec<String>]>;
}

/// Number of vowel phonemes carrying a stress marker (`0`, `1` or `2`)
pub fn stressed_vowel_count<S: AsRef<str>>(phonemes: &[S]) -> usize {
    phonemes
        .iter()
        .filter(|p| {
            p.as_ref()
                .chars()
                .last()
                .map_or(false, |c| c.is_ascii_digit())
        })
        .count()
}

/// The CMU pronouncing dictionary, loaded in memory
#[derive(Debug, Clone, Default)]
pub struct CmuDict {
    entries: HashMap<String, Vec<Vec<String>>>,
}

impl CmuDict {
    /// Create an empty dictionary
    pub fn new() -> Self {
        CmuDict::default()
    }

    /// Parse dictionary text.
    ///
    /// Accepts both the current `cmudict.dict` layout (lower-case words,
    /// `#` comments) and the legacy layout (upper-case words, `;;;` comments).
    pub fn parse(content: &str) -> Self {
        let mut dict = CmuDict::new();

        for line in content.lines() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(head) = parts.next() else {
                continue;
            };
            let phonemes: Vec<String> = parts.map(str::to_string).collect();
            if phonemes.is_empty() {
                continue;
            }

            dict.insert(strip_variant(head), phonemes);
        }

        dict
    }

    /// Load a dictionary file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::parse(&content))
    }

    /// Append a pronunciation variant for `word`
    pub fn insert(&mut self, word: &str, phonemes: Vec<String>) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(phonemes);
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Pronouncing for CmuDict {
    fn pronunciations(&self, word: &str) -> Option<&[Vec<String>]> {
        self.entries.get(word).map(Vec::as_slice)
    }
}

/// `word(2)` -> `word`
fn strip_variant(head: &str) -> &str {
    match head.find('(') {
        Some(idx) if head.ends_with(')') && idx > 0 => &head[..idx],
        _ => head,
    }
}
