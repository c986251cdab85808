//! Chunking of mixed-script text.
//!
//! This module segments text into runs of a single kind (Thai letters, Latin
//! letters, digits, punctuation, whitespace) that can then be processed by the
//! tokenizer. Only Thai runs need dictionary segmentation; every other run is
//! already a token.

use crate::char_categories::{CharCategory, ThaiString};
use crate::token::ChunkType;

/// A chunk of text with its type and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The type of this chunk
    pub chunk_type: ChunkType,
    /// Starting byte offset in the original string
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// Index of the first char of the chunk
    pub char_start: usize,
    /// Length in chars
    pub char_len: usize,
}

impl Chunk {
    /// Slice the chunk text out of the string it was made from
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.start + self.len]
    }
}

/// Chunker for Thai/English text
pub struct Chunker {
    /// The analyzed string
    ts: ThaiString,
}

impl Chunker {
    /// Create a new chunker for the given string
    pub fn new(text: &str) -> Self {
        Chunker {
            ts: ThaiString::new(text),
        }
    }

    /// Get the original string
    pub fn string(&self) -> &str {
        &self.ts.string
    }

    /// Get the categorized string
    pub fn thai_string(&self) -> &ThaiString {
        &self.ts
    }

    /// Chunk the text into runs
    pub fn make_chunks(&self) -> Vec<Chunk> {
        if self.ts.is_empty() {
            return Vec::new();
        }

        let chars = &self.ts.chars;
        let mut byte_positions: Vec<usize> = Vec::with_capacity(chars.len() + 1);

        // Calculate byte positions for each character
        let mut pos = 0;
        for c in chars {
            byte_positions.push(pos);
            pos += c.len_utf8();
        }
        byte_positions.push(pos);

        let mut chunks = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let chunk_type = run_type(self.ts.categories[i]);
            let mut j = i + 1;
            while j < chars.len() && run_type(self.ts.categories[j]) == chunk_type {
                j += 1;
            }

            chunks.push(Chunk {
                chunk_type,
                start: byte_positions[i],
                len: byte_positions[j] - byte_positions[i],
                char_start: i,
                char_len: j - i,
            });
            i = j;
        }

        chunks
    }
}

/// Which run a character belongs to
fn run_type(cat: CharCategory) -> ChunkType {
    match cat {
        CharCategory::Cons
        | CharCategory::LeadVow
        | CharCategory::FollowVow
        | CharCategory::Mark
        | CharCategory::Tone => ChunkType::Thai,
        CharCategory::ThaiDigit | CharCategory::Digit => ChunkType::Num,
        CharCategory::ThaiSymbol | CharCategory::Punct => ChunkType::Punct,
        CharCategory::Latin => ChunkType::Latin,
        CharCategory::Space => ChunkType::Space,
        CharCategory::Other => ChunkType::Other,
    }
}
