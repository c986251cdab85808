//! Keyword-based document sentiment.
//!
//! Positive and negative keywords are counted as substrings of the
//! lower-cased raw text. Matching is deliberately substring-based: a keyword
//! embedded in a longer word is still a hit (Thai `ดี` matches inside
//! `ไม่ดี`, English `lack` inside `blackboard`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::Language;

const THAI_POSITIVE: &[&str] = &[
    "ดี", "สำเร็จ", "ภูมิใจ", "ความสุข", "พัฒนา", "ประโยชน์", "ยั่งยืน", "พอเพียง", "สะดวก",
];
const THAI_NEGATIVE: &[&str] = &[
    "ไม่ดี", "ปัญหา", "แย่", "ยากลำบาก", "ขาดแคลน", "อุปสรรค", "หนี้สิน", "เดือดร้อน",
];
const ENGLISH_POSITIVE: &[&str] = &[
    "good", "great", "excellent", "success", "happy", "positive", "improve", "benefit",
    "sustainable",
];
const ENGLISH_NEGATIVE: &[&str] = &[
    "bad", "problem", "difficult", "lack", "obstacle", "debt", "negative", "poor", "issue",
];

/// Document-level sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label with its emoji, for human-readable reports
    pub fn decorated(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive 😊",
            SentimentLabel::Negative => "Negative 😟",
            SentimentLabel::Neutral => "Neutral 😐",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

/// How keyword hits are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCounting {
    /// Every non-overlapping occurrence counts
    #[default]
    Occurrences,
    /// Each keyword counts at most once
    Presence,
}

/// Positive and negative keyword hits of a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentScore {
    /// Strictly more hits wins; ties (including none at all) are neutral
    pub fn label(&self) -> SentimentLabel {
        if self.positive > self.negative {
            SentimentLabel::Positive
        } else if self.negative > self.positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Keyword lists for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl SentimentLexicon {
    /// Build a lexicon; keywords are lower-cased and empty ones dropped
    pub fn new<I, J, S, T>(positive: I, negative: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        SentimentLexicon {
            positive: normalize(positive),
            negative: normalize(negative),
        }
    }

    /// Default Thai keywords
    pub fn thai() -> Self {
        Self::new(THAI_POSITIVE, THAI_NEGATIVE)
    }

    /// Default English keywords
    pub fn english() -> Self {
        Self::new(ENGLISH_POSITIVE, ENGLISH_NEGATIVE)
    }

    /// Default keywords for `language`
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Thai => Self::thai(),
            Language::English => Self::english(),
        }
    }
}

fn normalize<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

fn hits(text: &str, keywords: &[String], counting: KeywordCounting) -> usize {
    keywords
        .iter()
        .map(|k| match counting {
            KeywordCounting::Occurrences => text.matches(k.as_str()).count(),
            KeywordCounting::Presence => usize::from(text.contains(k.as_str())),
        })
        .sum()
}

/// Scores raw text against per-language keyword lists
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    thai: SentimentLexicon,
    english: SentimentLexicon,
    counting: KeywordCounting,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        SentimentScorer {
            thai: SentimentLexicon::thai(),
            english: SentimentLexicon::english(),
            counting: KeywordCounting::default(),
        }
    }
}

impl SentimentScorer {
    /// A scorer with the default keyword lists
    pub fn new() -> Self {
        Self::default()
    }

    /// Change how keyword hits are counted
    pub fn with_counting(mut self, counting: KeywordCounting) -> Self {
        self.counting = counting;
        self
    }

    /// Replace the keyword lists of `language`
    pub fn with_lexicon(mut self, language: Language, lexicon: SentimentLexicon) -> Self {
        // Deserialized lexicons bypass `SentimentLexicon::new`
        let lexicon = SentimentLexicon::new(lexicon.positive, lexicon.negative);
        match language {
            Language::Thai => self.thai = lexicon,
            Language::English => self.english = lexicon,
        }
        self
    }

    /// The keyword lists used for `language`
    pub fn lexicon(&self, language: Language) -> &SentimentLexicon {
        match language {
            Language::Thai => &self.thai,
            Language::English => &self.english,
        }
    }

    /// Count keyword hits in the unfiltered text
    pub fn evaluate(&self, raw_text: &str, language: Language) -> SentimentScore {
        let lowered = raw_text.to_lowercase();
        let lexicon = self.lexicon(language);
        SentimentScore {
            positive: hits(&lowered, &lexicon.positive, self.counting),
            negative: hits(&lowered, &lexicon.negative, self.counting),
        }
    }

    /// Label the text
    pub fn score(&self, raw_text: &str, language: Language) -> SentimentLabel {
        self.evaluate(raw_text, language).label()
    }
}

/// Label `raw_text` with the default keyword lists
pub fn score(raw_text: &str, language: Language) -> SentimentLabel {
    SentimentScorer::default().score(raw_text, language)
}
