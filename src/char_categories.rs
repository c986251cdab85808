//! Character classification for Thai text.
//!
//! This module categorizes each character of a string (Thai consonant, vowel
//! sign, tone mark, digit, punctuation, etc.) so that the chunker can split
//! text into runs and the tokenizer can group unknown Thai text into
//! character clusters.

/// Character categories used in Thai text processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    /// Thai consonant (ก..ฮ)
    Cons,
    /// Vowel written before its consonant (เ แ โ ใ ไ)
    LeadVow,
    /// Vowel written after its consonant (ะ า ำ ๅ)
    FollowVow,
    /// Combining vowel or diacritic above/below the consonant
    Mark,
    /// Tone mark (่ ้ ๊ ๋)
    Tone,
    /// Thai digit (๐..๙)
    ThaiDigit,
    /// Thai sign that stands alone (ฯ ๆ ๏ ๚ ๛ ฿)
    ThaiSymbol,
    /// Latin letter
    Latin,
    /// ASCII digit
    Digit,
    /// Whitespace
    Space,
    /// Punctuation or symbol outside the Thai block
    Punct,
    /// Other/unknown character
    #[default]
    Other,
}

impl CharCategory {
    /// Check if this category belongs to Thai script letters
    pub fn is_thai_letter(&self) -> bool {
        matches!(
            self,
            CharCategory::Cons
                | CharCategory::LeadVow
                | CharCategory::FollowVow
                | CharCategory::Mark
                | CharCategory::Tone
        )
    }

    /// Check if this category can never start a character cluster
    pub fn is_dependent(&self) -> bool {
        matches!(
            self,
            CharCategory::FollowVow | CharCategory::Mark | CharCategory::Tone
        )
    }
}

/// Get the category of a character
pub fn get_char_category(c: char) -> CharCategory {
    match c {
        '\u{0E01}'..='\u{0E2E}' => CharCategory::Cons,
        '\u{0E40}'..='\u{0E44}' => CharCategory::LeadVow,
        '\u{0E30}' | '\u{0E32}' | '\u{0E33}' | '\u{0E45}' => CharCategory::FollowVow,
        '\u{0E31}' | '\u{0E34}'..='\u{0E3A}' | '\u{0E47}' | '\u{0E4C}'..='\u{0E4E}' => {
            CharCategory::Mark
        }
        '\u{0E48}'..='\u{0E4B}' => CharCategory::Tone,
        '\u{0E50}'..='\u{0E59}' => CharCategory::ThaiDigit,
        '\u{0E2F}' | '\u{0E3F}' | '\u{0E46}' | '\u{0E4F}' | '\u{0E5A}' | '\u{0E5B}' => {
            CharCategory::ThaiSymbol
        }
        '0'..='9' => CharCategory::Digit,
        c if c.is_whitespace() || c == '\u{200B}' || c == '\u{FEFF}' => CharCategory::Space,
        c if c.is_alphabetic() && is_latin(c) => CharCategory::Latin,
        c if c.is_ascii_punctuation() => CharCategory::Punct,
        c if !c.is_alphanumeric() && (c.is_ascii() || is_general_punct(c)) => CharCategory::Punct,
        _ => CharCategory::Other,
    }
}

fn is_latin(c: char) -> bool {
    // Basic Latin, Latin-1 Supplement, Extended-A/B, Extended Additional
    ('\u{0041}'..='\u{024F}').contains(&c) || ('\u{1E00}'..='\u{1EFF}').contains(&c)
}

fn is_general_punct(c: char) -> bool {
    // Latin-1 punctuation, General Punctuation, CJK Symbols
    ('\u{00A1}'..='\u{00BF}').contains(&c)
        || ('\u{2010}'..='\u{205E}').contains(&c)
        || ('\u{3000}'..='\u{303F}').contains(&c)
}

/// A string with character category information for each character
#[derive(Debug, Clone)]
pub struct ThaiString {
    /// The original string
    pub string: String,
    /// Characters of the string
    pub chars: Vec<char>,
    /// Category for each character (by index)
    pub categories: Vec<CharCategory>,
}

impl ThaiString {
    /// Create a new ThaiString from a string
    pub fn new(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let categories = chars.iter().copied().map(get_char_category).collect();
        ThaiString {
            string: s.to_string(),
            chars,
            categories,
        }
    }

    /// Get the length (number of characters)
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Length in chars of the Thai character cluster starting at `start`.
    ///
    /// A cluster is an optional leading vowel, one consonant, then every
    /// dependent vowel, mark and tone that follows it. A cluster is never
    /// split by the tokenizer. Always returns at least 1 for a valid index.
    pub fn cluster_len(&self, start: usize) -> usize {
        let n = self.len();
        if start >= n {
            return 0;
        }

        let mut i = start;
        match self.categories[i] {
            CharCategory::LeadVow => {
                i += 1;
                if i < n && self.categories[i] == CharCategory::Cons {
                    i += 1;
                }
            }
            CharCategory::Cons => i += 1,
            _ => return 1,
        }

        while i < n && self.categories[i].is_dependent() {
            i += 1;
        }

        i - start
    }
}
