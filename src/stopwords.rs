//! Thai stop-word sets.

use std::collections::HashSet;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

static BUILTIN_STOPWORDS: &str = include_str!("data/thai_stopwords.txt");

/// Conversational particles that carry no content in interview transcripts
pub const DISCOURSE_PARTICLES: &[&str] = &[
    "ครับ", "ค่ะ", "คะ", "นะ", "นะคะ", "นะครับ", "จ้ะ", "จ้า", "น่ะ", "ล่ะ", "อ่ะ", "อะ", "เนอะ",
    "เออ", "อืม",
];

/// A set of words excluded from analysis regardless of syllable count
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set
    pub fn new() -> Self {
        StopWords::default()
    }

    /// The embedded curated list
    pub fn builtin() -> Self {
        Self::from_list(BUILTIN_STOPWORDS)
    }

    /// Parse a list with one word per line (`#` starts a comment line)
    pub fn from_list(content: &str) -> Self {
        let mut stopwords = StopWords::new();
        stopwords.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        );
        stopwords
    }

    /// Load a stop-word file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::from_list(&content))
    }

    /// Add the discourse particles
    pub fn with_particles(mut self) -> Self {
        self.extend(DISCOURSE_PARTICLES.iter().copied());
        self
    }

    /// Add words (NFC-normalized)
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().nfc().collect());
        }
    }

    /// Check if `word` is a stop-word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The underlying set
    pub fn as_set(&self) -> &HashSet<String> {
        &self.words
    }

    /// Number of stop-words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
