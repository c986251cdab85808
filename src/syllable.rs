//! Syllable counting for English and Thai words.
//!
//! Each language uses a primary capability with a deterministic fallback:
//!
//! - English: the first pronunciation variant in the dictionary, counting
//!   stress-marked vowel phonemes; otherwise the number of `[aeiouy]` runs.
//! - Thai: the number of segments from the syllable segmenter; otherwise 0.
//!
//! Counting never fails and never panics.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::language::Language;
use crate::pronouncing::{stressed_vowel_count, Pronouncing};
use crate::tokenizer::SyllableSegmenter;

static VOWEL_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new("[aeiouy]+").expect("Invalid regex"));

/// Which tier produced a syllable count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CountSource {
    /// Pronunciation dictionary (first variant)
    Dictionary,
    /// Vowel-run heuristic
    Heuristic,
    /// Thai syllable segmenter
    Segmenter,
    /// Segmenter unavailable or failed
    Unavailable,
}

/// A syllable count with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyllableCount {
    pub count: usize,
    pub source: CountSource,
}

/// Number of maximal `[aeiouy]` runs in the lower-cased word
pub fn vowel_run_count(word: &str) -> usize {
    VOWEL_RUNS.find_iter(&word.to_lowercase()).count()
}

/// Count syllables of an English word
pub fn count_syllables_en(word: &str, dict: &dyn Pronouncing) -> usize {
    english(word, dict).count
}

/// Count syllables of a Thai word
pub fn count_syllables_th(word: &str, segmenter: &dyn SyllableSegmenter) -> usize {
    thai(word, segmenter).count
}

fn english(word: &str, dict: &dyn Pronouncing) -> SyllableCount {
    let word = word.to_lowercase();
    match dict.pronunciations(&word).and_then(|variants| variants.first()) {
        Some(first) => SyllableCount {
            count: stressed_vowel_count(first),
            source: CountSource::Dictionary,
        },
        None => SyllableCount {
            count: vowel_run_count(&word),
            source: CountSource::Heuristic,
        },
    }
}

fn thai(word: &str, segmenter: &dyn SyllableSegmenter) -> SyllableCount {
    match segmenter.segment(word) {
        Ok(syllables) => SyllableCount {
            count: syllables.len(),
            source: CountSource::Segmenter,
        },
        Err(e) => {
            trace!(word, error = %e, "syllable segmentation failed");
            SyllableCount {
                count: 0,
                source: CountSource::Unavailable,
            }
        }
    }
}

/// Language-dispatching syllable counter over borrowed capabilities
#[derive(Clone, Copy)]
pub struct SyllableCounter<'a> {
    pronouncing: &'a dyn Pronouncing,
    segmenter: &'a dyn SyllableSegmenter,
}

impl<'a> SyllableCounter<'a> {
    /// Create a counter from the two language capabilities
    pub fn new(pronouncing: &'a dyn Pronouncing, segmenter: &'a dyn SyllableSegmenter) -> Self {
        SyllableCounter {
            pronouncing,
            segmenter,
        }
    }

    /// Count syllables of `word` in `language`
    pub fn count(&self, word: &str, language: Language) -> usize {
        self.count_detailed(word, language).count
    }

    /// Count syllables and report which tier answered
    pub fn count_detailed(&self, word: &str, language: Language) -> SyllableCount {
        match language {
            Language::English => english(word, self.pronouncing),
            Language::Thai => thai(word, self.segmenter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pronouncing::CmuDict;
    use crate::tokenizer::{DictSyllableSegmenter, UnavailableSegmenter};
    use crate::trie::Trie;

    fn toy_dict() -> CmuDict {
        CmuDict::parse(
            "fire F AY1 ER0\n\
             fire(2) F AY1 R\n\
             sustainability S AH0 S T EY2 N AH0 B IH1 L AH0 T IY0\n",
        )
    }

    #[test]
    fn test_first_variant_is_used() {
        let dict = toy_dict();
        // The first variant has two vowels even though the second has one
        assert_eq!(count_syllables_en("fire", &dict), 2);
        assert_eq!(count_syllables_en("FIRE", &dict), 2);
    }

    #[test]
    fn test_dictionary_count() {
        let dict = toy_dict();
        let counter = SyllableCounter::new(&dict, &UnavailableSegmenter);
        let result = counter.count_detailed("sustainability", Language::English);
        assert_eq!(result.count, 6);
        assert_eq!(result.source, CountSource::Dictionary);
    }

    #[test]
    fn test_heuristic_fallback() {
        let dict = CmuDict::new();
        assert_eq!(count_syllables_en("beautiful", &dict), 3); // eau, i, u
        assert_eq!(count_syllables_en("rhythm", &dict), 1); // y
        assert_eq!(count_syllables_en("brr", &dict), 0);
        assert_eq!(count_syllables_en("", &dict), 0);
    }

    #[test]
    fn test_english_is_deterministic() {
        let dict = toy_dict();
        for word in ["fire", "queueing", "sustainability", "xyz"] {
            assert_eq!(count_syllables_en(word, &dict), count_syllables_en(word, &dict));
        }
    }

    #[test]
    fn test_thai_segmenter_count() {
        let trie: Trie = ["ภา", "ษา", "ไทย"].into_iter().collect();
        let segmenter = DictSyllableSegmenter::new(trie);
        assert_eq!(count_syllables_th("ภาษาไทย", &segmenter), 3);
    }

    #[test]
    fn test_thai_unavailable_is_zero() {
        let dict = CmuDict::new();
        let counter = SyllableCounter::new(&dict, &UnavailableSegmenter);
        let result = counter.count_detailed("ภาษาไทย", Language::Thai);
        assert_eq!(result.count, 0);
        assert_eq!(result.source, CountSource::Unavailable);
    }
}
