//! English part-of-speech tagging.
//!
//! The token filter only needs to recognize closed grammatical classes
//! (determiners, conjunctions, prepositions, pronouns, `to`, modals, numbers),
//! so the default tagger is a lexicon of those words with a few suffix rules
//! for everything else. Any tagger producing Penn Treebank tags can be plugged
//! in through [`PosTagger`].

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

/// A capability assigning a Penn Treebank tag to each word
pub trait PosTagger: Send + Sync {
    /// Tag `words`, returning one `(word, tag)` pair per input word, in order
    fn tag<'w>(&self, words: &[&'w str]) -> Vec<(&'w str, String)>;
}

static BUILTIN_LEXICON: &str = include_str!("data/english_lexicon.tsv");

static BUILTIN_TAGS: Lazy<HashMap<String, String>> = Lazy::new(|| parse_lexicon(BUILTIN_LEXICON));

/// Parse `word<TAB>tag` lines; the first tag seen for a word wins
fn parse_lexicon(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split('\t');
        if let (Some(word), Some(tag)) = (parts.next(), parts.next()) {
            let (word, tag) = (word.trim(), tag.trim());
            if !word.is_empty() && !tag.is_empty() {
                map.entry(word.to_lowercase())
                    .or_insert_with(|| tag.to_string());
            }
        }
    }
    map
}

/// Lexicon-based tagger
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    /// Extra entries, consulted before the built-in lexicon
    overrides: HashMap<String, String>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    /// Create a tagger with only the built-in closed-class lexicon
    pub fn new() -> Self {
        LexiconTagger {
            overrides: HashMap::new(),
        }
    }

    /// Add `word<TAB>tag` entries from a string
    pub fn load_tsv(&mut self, content: &str) {
        for (word, tag) in parse_lexicon(content) {
            self.overrides.entry(word).or_insert(tag);
        }
    }

    /// Add entries from a lexicon file
    pub fn load_tsv_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.load_tsv(&content);
        Ok(())
    }

    /// Tag a single lower-case word
    pub fn tag_word(&self, word: &str) -> String {
        if let Some(tag) = self
            .overrides
            .get(word)
            .or_else(|| BUILTIN_TAGS.get(word))
        {
            return tag.clone();
        }
        guess_open_class(word).to_string()
    }
}

impl PosTagger for LexiconTagger {
    fn tag<'w>(&self, words: &[&'w str]) -> Vec<(&'w str, String)> {
        words
            .iter()
            .map(|&w| (w, self.tag_word(&w.to_lowercase())))
            .collect()
    }
}

/// Rough tag for words outside the lexicon
fn guess_open_class(word: &str) -> &'static str {
    if word.chars().all(|c| c.is_ascii_digit()) && !word.is_empty() {
        "CD"
    } else if word.len() > 4 && word.ends_with("ly") {
        "RB"
    } else if word.len() > 5 && word.ends_with("ing") {
        "VBG"
    } else if word.len() > 4 && word.ends_with("ed") {
        "VBD"
    } else if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        "NNS"
    } else {
        "NN"
    }
}
