//! Analysis configuration.
//!
//! Every field has a default, so a JSON file only needs to name the settings
//! it changes:
//!
//! ```json
//! { "top_k": 20, "default_language": "english" }
//! ```

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{GraphBuilder, DEFAULT_TOP_K};
use crate::language::{Language, LanguageDetector};
use crate::sentiment::{KeywordCounting, SentimentLexicon, SentimentScorer};

/// Default cap on the size of one document
pub const DEFAULT_MAX_INPUT_BYTES: usize = 8 * 1024 * 1024;

/// Per-language keyword list replacements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SentimentOverrides {
    pub thai: Option<SentimentLexicon>,
    pub english: Option<SentimentLexicon>,
}

/// Settings of the analysis pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Language used when detection fails or is unsupported
    pub default_language: Language,
    /// Ignore detections the detector itself marks as unreliable
    pub require_reliable: bool,
    /// Inclusive lower bound of accepted syllable counts
    pub min_syllables: usize,
    /// Inclusive upper bound of accepted syllable counts
    pub max_syllables: usize,
    /// Maximum number of co-occurrence edges
    pub top_k: usize,
    /// Drop adjacent pairs of the same term
    pub skip_repeated_pairs: bool,
    /// Rows shown in frequency tables
    pub table_limit: usize,
    /// How sentiment keyword hits are counted
    pub keyword_counting: KeywordCounting,
    /// Extra Thai stop-words
    pub extra_stopwords: Vec<String>,
    /// Treat conversational particles (ครับ, ค่ะ, นะ...) as stop-words
    pub include_particles: bool,
    /// Documents longer than this are truncated
    pub max_input_bytes: usize,
    /// Keyword list replacements
    pub sentiment: SentimentOverrides,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            default_language: Language::Thai,
            require_reliable: false,
            min_syllables: 5,
            max_syllables: 10,
            top_k: DEFAULT_TOP_K,
            skip_repeated_pairs: true,
            table_limit: 20,
            keyword_counting: KeywordCounting::Occurrences,
            extra_stopwords: Vec::new(),
            include_particles: false,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            sentiment: SentimentOverrides::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&content)
    }

    /// Reject settings the pipeline cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.min_syllables > self.max_syllables {
            return Err(Error::Config(format!(
                "min_syllables ({}) is greater than max_syllables ({})",
                self.min_syllables, self.max_syllables
            )));
        }
        if self.top_k == 0 {
            return Err(Error::Config("top_k must be at least 1".into()));
        }
        if self.max_input_bytes == 0 {
            return Err(Error::Config("max_input_bytes must be at least 1".into()));
        }
        Ok(())
    }

    /// The accepted syllable range
    pub fn syllable_range(&self) -> RangeInclusive<usize> {
        self.min_syllables..=self.max_syllables
    }

    /// Language detector for these settings
    pub fn detector(&self) -> LanguageDetector {
        LanguageDetector::new(self.default_language).require_reliable(self.require_reliable)
    }

    /// Sentiment scorer for these settings
    pub fn scorer(&self) -> SentimentScorer {
        let mut scorer = SentimentScorer::new().with_counting(self.keyword_counting);
        if let Some(ref lexicon) = self.sentiment.thai {
            scorer = scorer.with_lexicon(Language::Thai, lexicon.clone());
        }
        if let Some(ref lexicon) = self.sentiment.english {
            scorer = scorer.with_lexicon(Language::English, lexicon.clone());
        }
        scorer
    }

    /// Graph builder for these settings
    pub fn graph_builder(&self) -> GraphBuilder {
        GraphBuilder::new(self.top_k).skip_repeated_pairs(self.skip_repeated_pairs)
    }
}
