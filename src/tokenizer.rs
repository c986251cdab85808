//! Dictionary tokenizers implementing the longest-match algorithm.
//!
//! This module takes chunked text and uses a Trie to find the longest matching
//! words (or syllables) inside Thai runs, producing a list of tokens. Text the
//! dictionary does not know is grouped by Thai character clusters, and
//! consecutive unknown clusters become a single unknown token.

use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

use crate::char_categories::ThaiString;
use crate::chunker::Chunker;
use crate::error::{Error, Result};
use crate::token::{ChunkType, Token};
use crate::trie::Trie;

/// A capability that splits text into word tokens
pub trait WordTokenizer: Send + Sync {
    /// Tokenize a string; whitespace tokens are kept or dropped per implementation
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// A capability that splits one word into its syllables
pub trait SyllableSegmenter: Send + Sync {
    /// Segment `word` into syllables
    fn segment(&self, word: &str) -> Result<Vec<String>>;
}

/// A segment of a Thai run: char range and whether the dictionary knew it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    start: usize,
    end: usize,
    known: bool,
}

/// Segment the chars `start..end` of `ts` using longest match over `trie`.
///
/// A dictionary match is only accepted when it ends on a character-cluster
/// boundary, so a match never leaves a dangling vowel or tone mark behind.
fn segment_run(trie: &Trie, ts: &ThaiString, start: usize, end: usize) -> Vec<Segment> {
    let chars = &ts.chars[..end];
    let mut segments = Vec::new();
    let mut unknown_start: Option<usize> = None;
    let mut i = start;

    while i < end {
        let matched = trie
            .prefix_matches(chars, i)
            .into_iter()
            .rev()
            .find(|&len| {
                let next = i + len;
                next >= end || !ts.categories[next].is_dependent()
            });

        match matched {
            Some(len) => {
                if let Some(u) = unknown_start.take() {
                    segments.push(Segment {
                        start: u,
                        end: i,
                        known: false,
                    });
                }
                segments.push(Segment {
                    start: i,
                    end: i + len,
                    known: true,
                });
                i += len;
            }
            None => {
                unknown_start.get_or_insert(i);
                i += ts.cluster_len(i).max(1);
            }
        }
    }

    if let Some(u) = unknown_start {
        segments.push(Segment {
            start: u,
            end,
            known: false,
        });
    }

    segments
}

/// Byte offset of every char, plus the end offset
fn byte_positions(chars: &[char]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(chars.len() + 1);
    let mut pos = 0;
    for c in chars {
        positions.push(pos);
        pos += c.len_utf8();
    }
    positions.push(pos);
    positions
}

/// The Thai word tokenizer
#[derive(Clone)]
pub struct ThaiTokenizer {
    /// The dictionary trie (shared reference)
    trie: Arc<Trie>,
    /// Whether whitespace tokens are returned
    keep_whitespace: bool,
}

impl ThaiTokenizer {
    /// Create a new tokenizer with the given word trie
    pub fn new(trie: Trie) -> Self {
        Self::with_arc(Arc::new(trie))
    }

    /// Create a new tokenizer with a shared trie reference
    pub fn with_arc(trie: Arc<Trie>) -> Self {
        ThaiTokenizer {
            trie,
            keep_whitespace: false,
        }
    }

    /// Return whitespace runs as tokens too
    pub fn keep_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }

    /// Get a reference to the trie
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Tokenize a string.
    ///
    /// The text is NFC-normalized first; token offsets refer to the
    /// normalized text.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized: String = text.nfc().collect();

        let chunker = Chunker::new(&normalized);
        let ts = chunker.thai_string();
        let positions = byte_positions(&ts.chars);
        let mut tokens = Vec::new();

        for chunk in chunker.make_chunks() {
            match chunk.chunk_type {
                ChunkType::Space if !self.keep_whitespace => {}
                ChunkType::Thai => {
                    let end = chunk.char_start + chunk.char_len;
                    for seg in segment_run(&self.trie, ts, chunk.char_start, end) {
                        let start = positions[seg.start];
                        let len = positions[seg.end] - start;
                        let mut token = Token::with_text(
                            normalized[start..start + len].to_string(),
                            start,
                            len,
                            ChunkType::Thai,
                        );
                        token.known = seg.known;
                        tokens.push(token);
                    }
                }
                chunk_type => {
                    tokens.push(Token::with_text(
                        chunk.text(&normalized).to_string(),
                        chunk.start,
                        chunk.len,
                        chunk_type,
                    ));
                }
            }
        }

        tokens
    }
}

impl WordTokenizer for ThaiTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        ThaiTokenizer::tokenize(self, text)
    }
}

/// Thai syllable segmenter backed by a syllable dictionary
#[derive(Clone)]
pub struct DictSyllableSegmenter {
    trie: Arc<Trie>,
}

impl DictSyllableSegmenter {
    /// Create a segmenter from a trie of syllables
    pub fn new(trie: Trie) -> Self {
        DictSyllableSegmenter {
            trie: Arc::new(trie),
        }
    }

    /// Number of syllables known to the segmenter
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Check if the syllable dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl SyllableSegmenter for DictSyllableSegmenter {
    fn segment(&self, word: &str) -> Result<Vec<String>> {
        if self.trie.is_empty() {
            return Err(Error::Segmenter("no syllable dictionary loaded".into()));
        }

        let normalized: String = word.nfc().collect();
        let ts = ThaiString::new(&normalized);
        let mut syllables = Vec::new();

        // Non-Thai chars in a word are split off the same way the tokenizer would
        let mut i = 0;
        while i < ts.len() {
            if ts.categories[i].is_thai_letter() {
                let mut end = i;
                while end < ts.len() && ts.categories[end].is_thai_letter() {
                    end += 1;
                }
                for seg in segment_run(&self.trie, &ts, i, end) {
                    syllables.push(ts.chars[seg.start..seg.end].iter().collect());
                }
                i = end;
            } else {
                i += 1;
            }
        }

        Ok(syllables)
    }
}

/// A segmenter that is never available.
///
/// Stands in when no syllable dictionary could be loaded, so every Thai word
/// counts as zero syllables.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSegmenter;

impl SyllableSegmenter for UnavailableSegmenter {
    fn segment(&self, _word: &str) -> Result<Vec<String>> {
        Err(Error::Segmenter("Thai syllable segmenter unavailable".into()))
    }
}
