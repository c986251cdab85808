//! Python bindings for polysyl-rs using PyO3
//!
//! The rendering layer (word clouds, spreadsheets) lives in Python; this
//! module hands it plain dicts and lists.

use std::path::Path;
use std::sync::Arc;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::config::AnalysisConfig;
use crate::error::Error;
use crate::graph::CooccurrenceGraph;
use crate::language::{self, Language};
use crate::pipeline::{Analyzer as RustAnalyzer, DocumentAnalysis};
use crate::pronouncing::CmuDict;
use crate::resources::{self, LanguageResources};
use crate::sentiment;
use crate::syllable;
use crate::tokenizer::{DictSyllableSegmenter, UnavailableSegmenter};
use crate::trie::Trie;

fn to_py_err(e: Error) -> PyErr {
    match e {
        Error::Config(_) | Error::Json(_) => PyValueError::new_err(e.to_string()),
        _ => PyRuntimeError::new_err(e.to_string()),
    }
}

fn parse_language(code: &str) -> PyResult<Language> {
    code.parse().map_err(to_py_err)
}

fn graph_to_dict<'py>(py: Python<'py>, graph: &CooccurrenceGraph) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("nodes", graph.nodes())?;
    let edges = PyList::empty_bound(py);
    for edge in graph.edges() {
        edges.append((edge.source.as_str(), edge.target.as_str(), edge.weight))?;
    }
    dict.set_item("edges", edges)?;
    Ok(dict)
}

fn analysis_to_dict<'py>(py: Python<'py>, a: &DocumentAnalysis) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", &a.id)?;
    dict.set_item("language", a.language.code())?;
    dict.set_item("terms", &a.terms)?;
    let table: Vec<(&str, usize)> = a.frequencies.iter().collect();
    dict.set_item("frequencies", table)?;
    dict.set_item("sentiment", a.sentiment.to_string())?;
    dict.set_item("positive_hits", a.sentiment_score.positive)?;
    dict.set_item("negative_hits", a.sentiment_score.negative)?;
    dict.set_item("graph", graph_to_dict(py, &a.graph)?)?;
    Ok(dict)
}

/// Document analyzer
///
/// Args:
///     config_json: JSON configuration (optional)
///     resources_dir: Resource directory (optional, defaults to
///         ~/Documents/polysyl-rs/resources)
///     auto_download: Download missing resources (default: True)
#[pyclass(name = "Analyzer")]
pub struct PyAnalyzer {
    inner: RustAnalyzer,
}

#[pymethods]
impl PyAnalyzer {
    #[new]
    #[pyo3(signature = (config_json=None, resources_dir=None, auto_download=true))]
    fn new(
        config_json: Option<&str>,
        resources_dir: Option<&str>,
        auto_download: bool,
    ) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => AnalysisConfig::from_json_str(json).map_err(to_py_err)?,
            None => AnalysisConfig::default(),
        };

        let resources = match resources_dir {
            Some(dir) => Arc::new(
                LanguageResources::acquire(Some(Path::new(dir)), auto_download)
                    .map_err(to_py_err)?,
            ),
            None if auto_download => resources::global().map_err(to_py_err)?,
            None => Arc::new(
                LanguageResources::load(&resources::default_base_path())
                    .unwrap_or_else(|_| LanguageResources::builtin()),
            ),
        };

        Ok(PyAnalyzer {
            inner: RustAnalyzer::new(resources, config),
        })
    }

    /// Analyze a text and return a dict with `language`, `terms`,
    /// `frequencies`, `sentiment` and `graph`
    #[pyo3(signature = (text, id="stdin"))]
    fn analyze<'py>(&self, py: Python<'py>, text: &str, id: &str) -> PyResult<Bound<'py, PyDict>> {
        let analysis = py.allow_threads(|| self.inner.analyze(id, text));
        analysis_to_dict(py, &analysis)
    }

    /// Analyze several `(id, text)` pairs and return the list of dicts
    fn analyze_many<'py>(
        &self,
        py: Python<'py>,
        documents: Vec<(String, String)>,
    ) -> PyResult<Bound<'py, PyList>> {
        let list = PyList::empty_bound(py);
        for (id, text) in &documents {
            list.append(analysis_to_dict(py, &self.inner.analyze(id, text))?)?;
        }
        Ok(list)
    }

    fn __repr__(&self) -> String {
        let c = self.inner.config();
        format!(
            "Analyzer(syllables={}-{}, top_k={})",
            c.min_syllables, c.max_syllables, c.top_k
        )
    }
}

/// Detect the language of a text ("th" or "en")
#[pyfunction]
fn detect_language(text: &str) -> &'static str {
    language::detect(text).code()
}

/// Count English syllables
///
/// Args:
///     word: The word
///     cmudict_path: Path to a cmudict.dict file (optional; without it the
///         vowel-run heuristic is used)
#[pyfunction]
#[pyo3(signature = (word, cmudict_path=None))]
fn count_syllables_en(word: &str, cmudict_path: Option<&str>) -> PyResult<usize> {
    let dict = match cmudict_path {
        Some(path) => CmuDict::load(Path::new(path)).map_err(to_py_err)?,
        None => CmuDict::new(),
    };
    Ok(syllable::count_syllables_en(word, &dict))
}

/// Count Thai syllables against a list of known syllables (0 without one)
#[pyfunction]
#[pyo3(signature = (word, syllables=None))]
fn count_syllables_th(word: &str, syllables: Option<Vec<String>>) -> usize {
    match syllables {
        Some(list) => {
            let trie: Trie = list.iter().collect();
            syllable::count_syllables_th(word, &DictSyllableSegmenter::new(trie))
        }
        None => syllable::count_syllables_th(word, &UnavailableSegmenter),
    }
}

/// Score a text with the default keyword lists
///
/// Returns:
///     "Positive", "Negative" or "Neutral"
#[pyfunction]
fn score_sentiment(text: &str, language: &str) -> PyResult<String> {
    Ok(sentiment::score(text, parse_language(language)?).to_string())
}

/// Build a co-occurrence graph from a term sequence
#[pyfunction]
#[pyo3(signature = (terms, top_k=15))]
fn build_graph<'py>(py: Python<'py>, terms: Vec<String>, top_k: usize) -> PyResult<Bound<'py, PyDict>> {
    graph_to_dict(py, &crate::graph::build_graph(&terms, top_k))
}

/// Download missing resources and return the resource directory
#[cfg(feature = "download")]
#[pyfunction]
#[pyo3(signature = (base_path=None))]
fn download_resources(base_path: Option<&str>) -> PyResult<String> {
    let path = resources::download_resources(base_path.map(Path::new)).map_err(to_py_err)?;
    Ok(path.to_string_lossy().to_string())
}

/// Get the default resource directory
#[pyfunction]
fn get_default_base_path() -> String {
    resources::default_base_path().to_string_lossy().to_string()
}

/// Create the Python module
#[pymodule]
fn polysyl_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAnalyzer>()?;
    m.add_function(wrap_pyfunction!(detect_language, m)?)?;
    m.add_function(wrap_pyfunction!(count_syllables_en, m)?)?;
    m.add_function(wrap_pyfunction!(count_syllables_th, m)?)?;
    m.add_function(wrap_pyfunction!(score_sentiment, m)?)?;
    m.add_function(wrap_pyfunction!(build_graph, m)?)?;
    m.add_function(wrap_pyfunction!(get_default_base_path, m)?)?;

    #[cfg(feature = "download")]
    m.add_function(wrap_pyfunction!(download_resources, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
