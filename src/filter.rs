//! Extraction of high-syllable content terms from raw text.
//!
//! Thai text is segmented into words, stripped of stop-words and
//! digit/punctuation tokens. English text is reduced to alphabetic runs of at
//! least three letters and stripped of closed grammatical classes. Both paths
//! then keep only words whose syllable count lies in the configured inclusive
//! range (5 to 10 by default). Output order is source order.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::language::Language;
use crate::resources::LanguageResources;
use crate::stopwords::StopWords;
use crate::syllable::SyllableCounter;
use crate::tagger::PosTagger;
use crate::tokenizer::WordTokenizer;

/// Default inclusive syllable range for accepted terms
pub const DEFAULT_SYLLABLE_RANGE: RangeInclusive<usize> = 5..=10;

/// Penn Treebank tags never accepted as content terms:
/// determiner, coordinating conjunction, preposition, personal and possessive
/// pronoun, infinitive `to`, modal, cardinal number
pub const EXCLUDED_TAGS: &[&str] = &["DT", "CC", "IN", "PRP", "PRP$", "TO", "MD", "CD"];

/// Tokens made only of ASCII digits and non-word characters.
///
/// Thai digits are word characters, so a token such as `๒๕๖๗` is not caught here.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\W]+$").expect("Invalid regex"));

/// Alphabetic runs of at least three ASCII letters
static ENGLISH_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("Invalid regex"));

/// Check if a token consists only of ASCII digits, punctuation or symbols
pub fn is_non_word(token: &str) -> bool {
    NON_WORD.is_match(token)
}

/// Produces the ordered accepted-term sequence of a text
#[derive(Clone)]
pub struct TokenFilter<'a> {
    tokenizer: &'a dyn WordTokenizer,
    tagger: &'a dyn PosTagger,
    counter: SyllableCounter<'a>,
    stopwords: &'a StopWords,
    range: RangeInclusive<usize>,
}

impl<'a> TokenFilter<'a> {
    /// Create a filter over the given language resources
    pub fn new(resources: &'a LanguageResources) -> Self {
        TokenFilter {
            tokenizer: resources.thai_tokenizer(),
            tagger: resources.tagger(),
            counter: resources.syllable_counter(),
            stopwords: resources.stopwords(),
            range: DEFAULT_SYLLABLE_RANGE,
        }
    }

    /// Use a different Thai stop-word set
    pub fn with_stopwords(mut self, stopwords: &'a StopWords) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Accept terms whose syllable count lies in `range`
    pub fn with_range(mut self, range: RangeInclusive<usize>) -> Self {
        self.range = range;
        self
    }

    /// The syllable range in use
    pub fn range(&self) -> &RangeInclusive<usize> {
        &self.range
    }

    /// Extract accepted terms from `text` in order of appearance
    pub fn filter_terms(&self, text: &str, language: Language) -> Vec<String> {
        let terms = match language {
            Language::Thai => self.filter_thai(text),
            Language::English => self.filter_english(text),
        };
        debug!(language = %language, accepted = terms.len(), "filtered terms");
        terms
    }

    fn filter_thai(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .iter()
            .map(|token| token.text.trim())
            .filter(|t| !t.is_empty() && !is_non_word(t) && !self.stopwords.contains(t))
            .filter(|t| self.in_range(t, Language::Thai))
            .map(str::to_string)
            .collect()
    }

    fn filter_english(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = ENGLISH_WORD
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();

        self.tagger
            .tag(&words)
            .into_iter()
            .filter(|(_, tag)| !EXCLUDED_TAGS.contains(&tag.as_str()))
            .filter(|(word, _)| self.in_range(word, Language::English))
            .map(|(word, _)| word.to_string())
            .collect()
    }

    fn in_range(&self, word: &str, language: Language) -> bool {
        self.range.contains(&self.counter.count(word, language))
    }
}

/// Extract accepted terms with the default range and the resources' stop-words
pub fn filter_terms(text: &str, language: Language, resources: &LanguageResources) -> Vec<String> {
    TokenFilter::new(resources).filter_terms(text, language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pronouncing::CmuDict;
    use crate::tokenizer::{DictSyllableSegmenter, ThaiTokenizer};
    use crate::trie::Trie;

    fn english_resources() -> LanguageResources {
        let dict = CmuDict::parse(
            "sustainability S AH0 S T EY2 N AH0 B IH1 L AH0 T IY0\n\
             improvement IH2 M P R UW1 V M AH0 N T\n\
             responsibility R IY0 S P AA2 N S AH0 B IH1 L AH0 T IY0\n",
        );
        LanguageResources::builtin().with_pronouncing(dict)
    }

    fn thai_resources() -> LanguageResources {
        let words: Trie = ["การพัฒนา", "ที่", "ยั่งยืน", "ความ", "และ", "มหาวิทยาลัย"]
            .into_iter()
            .collect();
        let syllables: Trie = ["กา", "ร", "การ", "พัฒ", "นา", "ยั่ง", "ยืน", "ม", "หา", "วิ", "ทยา", "ลัย"]
            .into_iter()
            .collect();
        LanguageResources::builtin()
            .with_thai_tokenizer(ThaiTokenizer::new(words))
            .with_segmenter(DictSyllableSegmenter::new(syllables))
    }

    #[test]
    fn test_non_word_pattern() {
        assert!(is_non_word("2024"));
        assert!(is_non_word("..."));
        assert!(is_non_word("12,5%"));
        assert!(is_non_word("2024 - 2025"));
        assert!(!is_non_word("๒๕๖๗"));
        assert!(!is_non_word("พ.ศ. ๒๕๖๗"));
        assert!(!is_non_word("ภาษา"));
        assert!(!is_non_word("abc1"));
    }

    #[test]
    fn test_english_range_filter() {
        let resources = english_resources();
        let terms = filter_terms(
            "Sustainability and improvement: sustainability is our responsibility.",
            Language::English,
            &resources,
        );
        // improvement has 3 syllables, everything else below 5 is dropped too
        assert_eq!(terms, vec!["sustainability", "sustainability", "responsibility"]);
    }

    #[test]
    fn test_english_min_length_and_case() {
        let resources = english_resources();
        let terms = filter_terms("SUSTAINABILITY x2", Language::English, &resources);
        assert_eq!(terms, vec!["sustainability"]);
    }

    #[test]
    fn test_english_excluded_tags() {
        let dict = CmuDict::parse("seventy S EH1 V AH0 N T IY0 AH0 AH0\n");
        let resources = LanguageResources::builtin().with_pronouncing(dict);
        // "seventy" is forced to 5 syllables but is tagged CD and excluded
        assert!(filter_terms("seventy", Language::English, &resources).is_empty());
    }

    #[test]
    fn test_english_custom_range() {
        let resources = english_resources();
        let filter = TokenFilter::new(&resources).with_range(3..=3);
        assert_eq!(
            filter.filter_terms("an improvement", Language::English),
            vec!["improvement"]
        );
    }

    #[test]
    fn test_thai_filter() {
        let resources = thai_resources();
        let terms = filter_terms(
            "การพัฒนาที่ยั่งยืน 2024 มหาวิทยาลัย",
            Language::Thai,
            &resources,
        );
        // การพัฒนา has 3 syllables (การ พัฒ นา) and is dropped; มหาวิทยาลัย has 5
        assert_eq!(terms, vec!["มหาวิทยาลัย"]);
    }

    #[test]
    fn test_thai_stopwords_only() {
        let resources = thai_resources();
        assert!(filter_terms("ที่ และ ความ", Language::Thai, &resources).is_empty());
    }

    #[test]
    fn test_thai_without_segmenter_is_empty() {
        let words: Trie = ["มหาวิทยาลัย"].into_iter().collect();
        let resources =
            LanguageResources::builtin().with_thai_tokenizer(ThaiTokenizer::new(words));
        assert!(filter_terms("มหาวิทยาลัย", Language::Thai, &resources).is_empty());
    }
}
