//! # polysyl-rs
//!
//! High-syllable term extraction, keyword sentiment and co-occurrence graphs
//! for Thai and English documents.
//!
//! Each document goes through language detection, then a language-specific
//! filter that keeps content words of 5 to 10 syllables. The accepted terms
//! feed a frequency table and an adjacent-pair co-occurrence graph, while the
//! raw text is scored against positive and negative keyword lists.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use polysyl_rs::{AnalysisConfig, Analyzer, CmuDict, LanguageResources};
//!
//! let dict = CmuDict::parse("sustainability S AH0 S T EY2 N AH0 B IH1 L AH0 T IY0");
//! let resources = LanguageResources::builtin().with_pronouncing(dict);
//! let analyzer = Analyzer::new(Arc::new(resources), AnalysisConfig::default());
//!
//! let result = analyzer.analyze("notes.txt", "Sustainability is good. Sustainability matters.");
//! assert_eq!(result.frequencies.count("sustainability"), 2);
//! ```
//!
//! ## Resources
//!
//! Dictionaries (CMU pronouncing dictionary, Thai word and syllable lists,
//! Thai stop-words) are loaded from a resource directory, see [`resources`].
//! With the default `download` feature, missing files are fetched on first use.
//!
//! ## Python Bindings
//!
//! This library can be compiled as a Python extension module with the
//! `python` feature.

pub mod char_categories;
pub mod chunker;
pub mod config;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod graph;
pub mod language;
pub mod pipeline;
pub mod pronouncing;
pub mod resources;
pub mod sentiment;
pub mod stopwords;
pub mod syllable;
pub mod tagger;
pub mod token;
pub mod tokenizer;
pub mod trie;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use char_categories::{get_char_category, CharCategory, ThaiString};
pub use chunker::{Chunk, Chunker};
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use filter::{filter_terms, TokenFilter};
pub use frequency::{aggregate, FrequencyTable, TermCount};
pub use graph::{build_graph, CooccurrenceGraph, Edge, GraphBuilder};
pub use language::{detect, Language, LanguageDetector};
pub use pipeline::{Analyzer, BatchReport, Document, DocumentAnalysis, DocumentSummary};
pub use pronouncing::{CmuDict, Pronouncing};
pub use resources::LanguageResources;
pub use sentiment::{score, KeywordCounting, SentimentLabel, SentimentScore, SentimentScorer};
pub use stopwords::StopWords;
pub use syllable::{count_syllables_en, count_syllables_th, SyllableCounter};
pub use tagger::{LexiconTagger, PosTagger};
pub use token::{ChunkType, Token};
pub use tokenizer::{DictSyllableSegmenter, SyllableSegmenter, ThaiTokenizer, WordTokenizer};
pub use trie::{Trie, TrieBuilder, TrieNode};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn thai_resources() -> LanguageResources {
        let words: Trie = ["การ", "การพัฒนา", "พัฒนา", "ประสิทธิภาพ", "และ", "ดี", "มาก"]
            .into_iter()
            .collect();
        let syllables: Trie = ["การ", "พัฒ", "นา", "ประ", "สิทธิ", "ภาพ", "และ", "ดี", "มาก"]
            .into_iter()
            .collect();
        LanguageResources::builtin()
            .with_thai_tokenizer(ThaiTokenizer::new(words))
            .with_segmenter(DictSyllableSegmenter::new(syllables))
    }

    #[test]
    fn test_full_pipeline_thai() {
        let analyzer = Analyzer::new(Arc::new(thai_resources()), AnalysisConfig::default())
            .with_language(Some(Language::Thai));

        // การพัฒนา and ประสิทธิภาพ have 3 syllables each
        let result = analyzer.analyze("th.txt", "การพัฒนาและประสิทธิภาพดีมาก");
        assert!(result.terms.is_empty());
        assert_eq!(result.sentiment, SentimentLabel::Positive);
        assert!(result.graph.is_empty());
    }

    #[test]
    fn test_thai_range_lowered() {
        let config = AnalysisConfig {
            min_syllables: 3,
            ..Default::default()
        };
        let analyzer = Analyzer::new(Arc::new(thai_resources()), config)
            .with_language(Some(Language::Thai));

        let result = analyzer.analyze("th.txt", "การพัฒนาและประสิทธิภาพ การพัฒนา");
        assert_eq!(result.terms, vec!["การพัฒนา", "ประสิทธิภาพ", "การพัฒนา"]);
        assert_eq!(result.frequencies.entries()[0].term, "การพัฒนา");
        assert_eq!(result.graph.weight("การพัฒนา", "ประสิทธิภาพ"), Some(2));
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
