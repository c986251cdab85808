//! Token representation shared by the tokenizers.
//!
//! A Token is a segmented unit of text: a Thai word, a Latin word, a number,
//! punctuation or whitespace.

use serde::{Deserialize, Serialize};

/// The type of chunk/token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChunkType {
    /// Thai script text
    #[default]
    Thai,
    /// Latin letters
    Latin,
    /// Digits (ASCII or Thai)
    Num,
    /// Punctuation and symbols
    Punct,
    /// Whitespace
    Space,
    /// Anything else
    Other,
}

impl ChunkType {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkType::Thai => "THAI",
            ChunkType::Latin => "LATIN",
            ChunkType::Num => "NUM",
            ChunkType::Punct => "PUNCT",
            ChunkType::Space => "SPACE",
            ChunkType::Other => "OTHER",
        }
    }
}

/// A single token from the tokenization process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The raw text of the token
    pub text: String,

    /// Starting byte offset in the original string
    pub start: usize,

    /// Length in bytes
    pub len: usize,

    /// The type of this token
    pub chunk_type: ChunkType,

    /// Whether the token was found in the dictionary
    pub known: bool,
}

impl Token {
    /// Create a token with text and position
    pub fn with_text(text: String, start: usize, len: usize, chunk_type: ChunkType) -> Self {
        Token {
            text,
            start,
            len,
            chunk_type,
            known: false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.text, self.chunk_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::with_text("ภาษา".to_string(), 0, 12, ChunkType::Thai);
        assert_eq!(token.text, "ภาษา");
        assert_eq!(token.start, 0);
        assert_eq!(token.chunk_type, ChunkType::Thai);
        assert!(!token.known);
    }

    #[test]
    fn test_token_display() {
        let token = Token::with_text("42".to_string(), 3, 2, ChunkType::Num);
        assert_eq!(format!("{}", token), "42/NUM");
    }
}
