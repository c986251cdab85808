//! Language resources: acquisition, loading and the process-wide cache.
//!
//! Resources live in one directory:
//!
//! ```text
//! <base>/cmudict/cmudict.dict      CMU pronouncing dictionary
//! <base>/thai/words_th.txt         Thai word list (tokenizer)
//! <base>/thai/syllables_th.txt     Thai syllable list (segmenter)
//! <base>/thai/stopwords_th.txt     Thai stop-words
//! <base>/english/lexicon.tsv       optional extra POS lexicon
//! ```
//!
//! With the `download` feature, missing files are fetched from GitHub on
//! first use.
//! Missing files never make loading fail: each capability degrades to its
//! embedded or unavailable form.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::pronouncing::{CmuDict, Pronouncing};
use crate::stopwords::StopWords;
use crate::syllable::SyllableCounter;
use crate::tagger::{LexiconTagger, PosTagger};
use crate::tokenizer::{
    DictSyllableSegmenter, SyllableSegmenter, ThaiTokenizer, UnavailableSegmenter, WordTokenizer,
};
use crate::trie::{Trie, TrieBuilder};

/// GitHub archive of the CMU pronouncing dictionary
#[cfg(feature = "download")]
const CMUDICT_ARCHIVE_URL: &str =
    "https://github.com/cmusphinx/cmudict/archive/refs/heads/master.zip";

/// Raw corpus directory of PyThaiNLP
#[cfg(feature = "download")]
const THAI_CORPUS_URL: &str =
    "https://raw.githubusercontent.com/PyThaiNLP/pythainlp/dev/pythainlp/corpus";

/// Get the default base path for resources
/// Returns ~/Documents/polysyl-rs/resources/
pub fn default_base_path() -> PathBuf {
    #[cfg(feature = "download")]
    {
        dirs::document_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("polysyl-rs")
            .join("resources")
    }
    #[cfg(not(feature = "download"))]
    {
        PathBuf::from(".")
    }
}

/// File layout of a resource directory
#[derive(Debug, Clone)]
pub struct ResourcePaths {
    base: PathBuf,
}

impl ResourcePaths {
    /// Layout rooted at `base`, or the default base path
    pub fn new(base: Option<&Path>) -> Self {
        ResourcePaths {
            base: base.map(PathBuf::from).unwrap_or_else(default_base_path),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn cmudict(&self) -> PathBuf {
        self.base.join("cmudict").join("cmudict.dict")
    }

    pub fn thai_words(&self) -> PathBuf {
        self.base.join("thai").join("words_th.txt")
    }

    pub fn thai_syllables(&self) -> PathBuf {
        self.base.join("thai").join("syllables_th.txt")
    }

    pub fn thai_stopwords(&self) -> PathBuf {
        self.base.join("thai").join("stopwords_th.txt")
    }

    pub fn english_lexicon(&self) -> PathBuf {
        self.base.join("english").join("lexicon.tsv")
    }

    /// Check if every downloadable file is present
    pub fn is_complete(&self) -> bool {
        [
            self.cmudict(),
            self.thai_words(),
            self.thai_syllables(),
            self.thai_stopwords(),
        ]
        .iter()
        .all(|p| p.is_file())
    }
}

#[cfg(feature = "download")]
fn http_client(timeout_secs: u64) -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent("polysyl-rs")
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| Error::Network(e.to_string()))
}

#[cfg(feature = "download")]
fn fetch(client: &reqwest::blocking::Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "GET {} returned HTTP {}",
            url,
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .map_err(|e| Error::Network(e.to_string()))?;
    Ok(bytes.to_vec())
}

#[cfg(feature = "download")]
fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Extract `cmudict.dict` from the GitHub archive
#[cfg(feature = "download")]
fn extract_cmudict(archive_bytes: &[u8], dest: &Path) -> Result<()> {
    use std::io::{Cursor, Read};

    let mut archive =
        zip::ZipArchive::new(Cursor::new(archive_bytes)).map_err(|e| Error::Zip(e.to_string()))?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i).map_err(|e| Error::Zip(e.to_string()))?;
        if !file.name().ends_with("/cmudict.dict") {
            continue;
        }
        let mut content = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut content)
            .map_err(|e| Error::Zip(e.to_string()))?;
        return write_file(dest, &content);
    }

    Err(Error::ResourceNotFound(
        "cmudict.dict not found in downloaded archive".into(),
    ))
}

/// Download every missing resource file into `base_path` (or the default)
#[cfg(feature = "download")]
pub fn download_resources(base_path: Option<&Path>) -> Result<PathBuf> {
    let paths = ResourcePaths::new(base_path);
    std::fs::create_dir_all(paths.base()).map_err(|e| Error::io(paths.base(), e))?;

    if paths.is_complete() {
        return Ok(paths.base().to_path_buf());
    }

    let client = http_client(120)?;

    let cmudict = paths.cmudict();
    if !cmudict.is_file() {
        info!(url = CMUDICT_ARCHIVE_URL, "downloading CMU pronouncing dictionary");
        let archive = fetch(&client, CMUDICT_ARCHIVE_URL)?;
        extract_cmudict(&archive, &cmudict)?;
    }

    for (name, dest) in [
        ("words_th.txt", paths.thai_words()),
        ("syllables_th.txt", paths.thai_syllables()),
        ("stopwords_th.txt", paths.thai_stopwords()),
    ] {
        if dest.is_file() {
            continue;
        }
        let url = format!("{}/{}", THAI_CORPUS_URL, name);
        info!(%url, "downloading Thai corpus file");
        let content = fetch(&client, &url)?;
        write_file(&dest, &content)?;
    }

    info!(path = %paths.base().display(), "resources ready");
    Ok(paths.base().to_path_buf())
}

fn load_trie(path: &Path) -> Result<Trie> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut builder = TrieBuilder::new();
    builder.load_word_list(&content);
    Ok(builder.build())
}

/// All language capabilities the pipeline consumes
pub struct LanguageResources {
    pronouncing: Box<dyn Pronouncing>,
    tagger: Box<dyn PosTagger>,
    thai_tokenizer: Box<dyn WordTokenizer>,
    segmenter: Box<dyn SyllableSegmenter>,
    stopwords: StopWords,
}

impl std::fmt::Debug for LanguageResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageResources")
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

impl Default for LanguageResources {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageResources {
    /// Embedded resources only: no pronunciation dictionary (vowel-run
    /// counting), no Thai dictionaries (Thai words count 0 syllables),
    /// closed-class tagger and curated stop-words.
    pub fn builtin() -> Self {
        LanguageResources {
            pronouncing: Box::new(CmuDict::new()),
            tagger: Box::new(LexiconTagger::new()),
            thai_tokenizer: Box::new(ThaiTokenizer::new(Trie::new())),
            segmenter: Box::new(UnavailableSegmenter),
            stopwords: StopWords::builtin(),
        }
    }

    /// Load resources from a directory, degrading per missing file
    pub fn load(base: &Path) -> Result<Self> {
        let paths = ResourcePaths::new(Some(base));
        if !paths.base().is_dir() {
            return Err(Error::ResourceNotFound(format!(
                "resource directory '{}' does not exist",
                paths.base().display()
            )));
        }

        let mut resources = Self::builtin();

        match CmuDict::load(&paths.cmudict()) {
            Ok(dict) => {
                info!(words = dict.len(), "loaded pronunciation dictionary");
                resources = resources.with_pronouncing(dict);
            }
            Err(e) => warn!(error = %e, "pronunciation dictionary unavailable, using vowel-run counting"),
        }

        match load_trie(&paths.thai_words()) {
            Ok(trie) => {
                info!(words = trie.len(), "loaded Thai word list");
                resources = resources.with_thai_tokenizer(ThaiTokenizer::new(trie));
            }
            Err(e) => warn!(error = %e, "Thai word list unavailable, Thai text will not be segmented"),
        }

        match load_trie(&paths.thai_syllables()) {
            Ok(trie) if !trie.is_empty() => {
                info!(syllables = trie.len(), "loaded Thai syllable list");
                resources = resources.with_segmenter(DictSyllableSegmenter::new(trie));
            }
            Ok(_) => warn!("Thai syllable list is empty, Thai syllable counts will be 0"),
            Err(e) => warn!(error = %e, "Thai syllable list unavailable, Thai syllable counts will be 0"),
        }

        match StopWords::load(&paths.thai_stopwords()) {
            Ok(stopwords) => resources.stopwords = stopwords,
            Err(e) => warn!(error = %e, "Thai stop-word file unavailable, using built-in list"),
        }

        let lexicon = paths.english_lexicon();
        if lexicon.is_file() {
            let mut tagger = LexiconTagger::new();
            tagger.load_tsv_file(&lexicon)?;
            resources = resources.with_tagger(tagger);
        }

        Ok(resources)
    }

    /// Download missing files (with the `download` feature), then load
    pub fn acquire(base: Option<&Path>, download: bool) -> Result<Self> {
        let paths = ResourcePaths::new(base);
        #[cfg(feature = "download")]
        if download && !paths.is_complete() {
            download_resources(Some(paths.base()))?;
        }
        #[cfg(not(feature = "download"))]
        if download {
            warn!("built without the `download` feature, not fetching resources");
        }
        Self::load(paths.base())
    }

    pub fn with_pronouncing(mut self, pronouncing: impl Pronouncing + 'static) -> Self {
        self.pronouncing = Box::new(pronouncing);
        self
    }

    pub fn with_tagger(mut self, tagger: impl PosTagger + 'static) -> Self {
        self.tagger = Box::new(tagger);
        self
    }

    pub fn with_thai_tokenizer(mut self, tokenizer: impl WordTokenizer + 'static) -> Self {
        self.thai_tokenizer = Box::new(tokenizer);
        self
    }

    pub fn with_segmenter(mut self, segmenter: impl SyllableSegmenter + 'static) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopWords) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn pronouncing(&self) -> &dyn Pronouncing {
        self.pronouncing.as_ref()
    }

    pub fn tagger(&self) -> &dyn PosTagger {
        self.tagger.as_ref()
    }

    pub fn thai_tokenizer(&self) -> &dyn WordTokenizer {
        self.thai_tokenizer.as_ref()
    }

    pub fn segmenter(&self) -> &dyn SyllableSegmenter {
        self.segmenter.as_ref()
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Syllable counter over these resources
    pub fn syllable_counter(&self) -> SyllableCounter<'_> {
        SyllableCounter::new(self.pronouncing(), self.segmenter())
    }
}

static GLOBAL: OnceCell<Arc<LanguageResources>> = OnceCell::new();

/// The process-wide resources, loaded on first use from the default path.
///
/// A failed load leaves the cache empty so the next call tries again.
pub fn global() -> Result<Arc<LanguageResources>> {
    GLOBAL
        .get_or_try_init(|| {
            LanguageResources::acquire(None, cfg!(feature = "download")).map(Arc::new)
        })
        .map(Arc::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    #[test]
    fn test_default_base_path() {
        let path = default_base_path();
        if cfg!(feature = "download") {
            assert!(path.to_string_lossy().contains("polysyl-rs"));
        }
    }

    #[test]
    fn test_paths_layout() {
        let paths = ResourcePaths::new(Some(Path::new("/tmp/res")));
        assert_eq!(paths.cmudict(), Path::new("/tmp/res/cmudict/cmudict.dict"));
        assert_eq!(paths.thai_words(), Path::new("/tmp/res/thai/words_th.txt"));
        assert!(!paths.is_complete());
    }

    #[test]
    fn test_load_missing_directory() {
        let err = LanguageResources::load(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::ResourceNotFound(_)));
    }

    #[test]
    fn test_load_partial_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ResourcePaths::new(Some(dir.path()));
        std::fs::create_dir_all(paths.cmudict().parent().unwrap()).unwrap();
        std::fs::write(paths.cmudict(), "fire F AY1 ER0\n").unwrap();

        let resources = LanguageResources::load(dir.path()).unwrap();
        let counter = resources.syllable_counter();
        assert_eq!(counter.count("fire", Language::English), 2);
        // no syllable list: Thai words count 0
        assert_eq!(counter.count("ภาษา", Language::Thai), 0);
        assert!(resources.stopwords().contains("และ"));
    }

    #[test]
    fn test_load_full_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ResourcePaths::new(Some(dir.path()));
        for (path, content) in [
            (paths.cmudict(), "fire F AY1 ER0\n"),
            (paths.thai_words(), "ภาษา\nไทย\n"),
            (paths.thai_syllables(), "ภา\nษา\nไทย\n"),
            (paths.thai_stopwords(), "ไทย\n"),
        ] {
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, content).unwrap();
        }
        assert!(paths.is_complete());

        let resources = LanguageResources::load(dir.path()).unwrap();
        let tokens = resources.thai_tokenizer().tokenize("ภาษาไทย");
        assert_eq!(tokens.len(), 2);
        assert_eq!(resources.syllable_counter().count("ภาษา", Language::Thai), 2);
        assert!(resources.stopwords().contains("ไทย"));
        assert!(!resources.stopwords().contains("และ"));
    }
}
