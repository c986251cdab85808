//! Per-document analysis and batch reports.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use crate::filter::TokenFilter;
use crate::frequency::{aggregate, FrequencyTable, TermCount};
use crate::graph::CooccurrenceGraph;
use crate::language::Language;
use crate::resources::LanguageResources;
use crate::sentiment::{SentimentLabel, SentimentScore};
use crate::stopwords::StopWords;

/// A named input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub raw_text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            raw_text: raw_text.into(),
        }
    }

    /// Read a text file; invalid UTF-8 sequences are replaced
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        let raw_text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Document { id, raw_text })
    }
}

/// Everything computed for one document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentAnalysis {
    pub id: String,
    pub language: Language,
    pub terms: Vec<String>,
    pub frequencies: FrequencyTable,
    pub sentiment: SentimentLabel,
    pub sentiment_score: SentimentScore,
    pub graph: CooccurrenceGraph,
}

impl DocumentAnalysis {
    /// Check if any term passed the filter
    pub fn has_terms(&self) -> bool {
        !self.terms.is_empty()
    }

    /// The `limit` most frequent terms
    pub fn table(&self, limit: usize) -> &[TermCount] {
        self.frequencies.top(limit)
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            filename: self.id.clone(),
            language: self.language,
            sentiment: self.sentiment,
        }
    }
}

/// One row of the cross-document summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub filename: String,
    pub language: Language,
    pub sentiment: SentimentLabel,
}

/// Results for several documents plus their summary rows
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub documents: Vec<DocumentAnalysis>,
    pub summary: Vec<DocumentSummary>,
}

impl BatchReport {
    pub fn push(&mut self, analysis: DocumentAnalysis) {
        self.summary.push(analysis.summary());
        self.documents.push(analysis);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Truncate `text` to at most `max_bytes`, on a char boundary
fn truncate_at_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Runs the full pipeline over documents
#[derive(Debug, Clone)]
pub struct Analyzer {
    resources: Arc<LanguageResources>,
    config: AnalysisConfig,
    stopwords: StopWords,
    forced_language: Option<Language>,
}

impl Analyzer {
    pub fn new(resources: Arc<LanguageResources>, config: AnalysisConfig) -> Self {
        let mut stopwords = resources.stopwords().clone();
        if config.include_particles {
            stopwords = stopwords.with_particles();
        }
        stopwords.extend(&config.extra_stopwords);

        Analyzer {
            resources,
            config,
            stopwords,
            forced_language: None,
        }
    }

    /// Skip detection and analyze every document as `language`
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.forced_language = language;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    /// Analyze one text
    pub fn analyze(&self, id: &str, text: &str) -> DocumentAnalysis {
        let text = if text.len() > self.config.max_input_bytes {
            warn!(
                id,
                bytes = text.len(),
                limit = self.config.max_input_bytes,
                "document exceeds max_input_bytes, truncating"
            );
            truncate_at_boundary(text, self.config.max_input_bytes)
        } else {
            text
        };

        let language = self
            .forced_language
            .unwrap_or_else(|| self.config.detector().detect(text));

        let terms = TokenFilter::new(&self.resources)
            .with_stopwords(&self.stopwords)
            .with_range(self.config.syllable_range())
            .filter_terms(text, language);

        let frequencies = aggregate(&terms);
        let sentiment_score = self.config.scorer().evaluate(text, language);
        let graph = self.config.graph_builder().build(&terms);

        debug!(
            id,
            %language,
            terms = terms.len(),
            edges = graph.edge_count(),
            "analyzed document"
        );

        DocumentAnalysis {
            id: id.to_string(),
            language,
            terms,
            frequencies,
            sentiment: sentiment_score.label(),
            sentiment_score,
            graph,
        }
    }

    /// Analyze a document
    pub fn analyze_document(&self, document: &Document) -> DocumentAnalysis {
        self.analyze(&document.id, &document.raw_text)
    }

    /// Analyze documents in order and collect the summary
    pub fn analyze_batch<'d, I>(&self, documents: I) -> BatchReport
    where
        I: IntoIterator<Item = &'d Document>,
    {
        let mut report = BatchReport::default();
        for document in documents {
            report.push(self.analyze_document(document));
        }
        info!(documents = report.len(), "batch complete");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pronouncing::CmuDict;
    use crate::tokenizer::{DictSyllableSegmenter, ThaiTokenizer};
    use crate::trie::Trie;

    fn analyzer(config: AnalysisConfig) -> Analyzer {
        let dict = CmuDict::parse(
            "sustainability S AH0 S T EY2 N AH0 B IH1 L AH0 T IY0\n\
             improvement IH2 M P R UW1 V M AH0 N T\n",
        );
        let resources = LanguageResources::builtin().with_pronouncing(dict);
        Analyzer::new(Arc::new(resources), config)
    }

    #[test]
    fn test_repeated_term_scenario() {
        let analyzer = analyzer(AnalysisConfig::default());
        let result = analyzer.analyze(
            "doc.txt",
            "The sustainability and sustainability improvement of the region",
        );
        assert_eq!(result.language, Language::English);
        assert_eq!(result.terms, vec!["sustainability", "sustainability"]);
        assert_eq!(result.frequencies.count("sustainability"), 2);
        assert_eq!(result.frequencies.len(), 1);
        assert!(result.graph.is_empty());
    }

    #[test]
    fn test_sentiment_on_raw_text() {
        let analyzer = analyzer(AnalysisConfig::default());
        let result = analyzer.analyze("a", "good work, good team, one problem remains");
        assert_eq!(result.sentiment, SentimentLabel::Positive);
        assert_eq!(result.sentiment_score.positive, 2);
        assert!(!result.has_terms());
    }

    #[test]
    fn test_forced_language() {
        let analyzer = analyzer(AnalysisConfig::default()).with_language(Some(Language::Thai));
        let result = analyzer.analyze("a", "sustainability");
        assert_eq!(result.language, Language::Thai);
    }

    #[test]
    fn test_truncate_at_boundary() {
        let text = "ภาษา";
        // each Thai char is 3 bytes
        assert_eq!(truncate_at_boundary(text, 4), "ภ");
        assert_eq!(truncate_at_boundary(text, 100), text);
        assert_eq!(truncate_at_boundary(text, 1), "");
    }

    #[test]
    fn test_input_guard() {
        let config = AnalysisConfig {
            max_input_bytes: 20,
            ..Default::default()
        };
        let text = "improvement sustainability good good";

        // cut to "improvement sustaina": "improve" still matches, "good" is gone
        let result = analyzer(config).analyze("a", text);
        assert_eq!(result.language, Language::English);
        assert!(result.terms.is_empty());
        assert_eq!(result.sentiment_score.positive, 1);
        assert_eq!(result.sentiment, SentimentLabel::Positive);

        let full = analyzer(AnalysisConfig::default()).analyze("a", text);
        assert_eq!(full.terms, vec!["sustainability"]);
        assert_eq!(full.sentiment_score.positive, 3);
    }

    fn thai_analyzer(config: AnalysisConfig) -> Analyzer {
        let words: Trie = ["ชุมชน", "เข้มแข็ง", "นะครับ"].into_iter().collect();
        let syllables: Trie = ["ชุม", "ชน", "เข้ม", "แข็ง", "นะ", "ครับ"]
            .into_iter()
            .collect();
        let resources = LanguageResources::builtin()
            .with_thai_tokenizer(ThaiTokenizer::new(words))
            .with_segmenter(DictSyllableSegmenter::new(syllables));
        Analyzer::new(
            Arc::new(resources),
            AnalysisConfig {
                min_syllables: 2,
                ..config
            },
        )
    }

    const THAI_TEXT: &str = "ชุมชนเข้มแข็งนะครับ";

    #[test]
    fn test_particles_kept_by_default() {
        let result = thai_analyzer(AnalysisConfig::default()).analyze("a", THAI_TEXT);
        assert_eq!(result.language, Language::Thai);
        assert_eq!(result.terms, vec!["ชุมชน", "เข้มแข็ง", "นะครับ"]);
    }

    #[test]
    fn test_include_particles_drops_particles() {
        let config = AnalysisConfig {
            include_particles: true,
            ..Default::default()
        };
        let result = thai_analyzer(config).analyze("a", THAI_TEXT);
        assert_eq!(result.terms, vec!["ชุมชน", "เข้มแข็ง"]);
        assert_eq!(result.graph.edge_count(), 1);
    }

    #[test]
    fn test_extra_stopwords_drop_terms() {
        let config = AnalysisConfig {
            extra_stopwords: vec!["เข้มแข็ง".to_string()],
            ..Default::default()
        };
        let result = thai_analyzer(config).analyze("a", THAI_TEXT);
        assert_eq!(result.terms, vec!["ชุมชน", "นะครับ"]);
        assert_eq!(result.frequencies.count("เข้มแข็ง"), 0);
    }

    #[test]
    fn test_batch_summary() {
        let analyzer = analyzer(AnalysisConfig::default());
        let docs = vec![
            Document::new("one.txt", "good good problem"),
            Document::new("two.txt", "bad news and a difficult problem"),
        ];
        let report = analyzer.analyze_batch(&docs);
        assert_eq!(report.len(), 2);
        assert_eq!(report.summary[0].filename, "one.txt");
        assert_eq!(report.summary[0].sentiment, SentimentLabel::Positive);
        assert_eq!(report.summary[1].sentiment, SentimentLabel::Negative);
    }

    #[test]
    fn test_document_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"good \xff text").unwrap();
        let doc = Document::from_path(&path).unwrap();
        assert_eq!(doc.id, "notes.txt");
        assert!(doc.raw_text.starts_with("good "));
        assert!(doc.raw_text.contains('\u{FFFD}'));
    }
}
