//! Language detection for dispatching a document to the Thai or English path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use whatlang::{Lang, Script};

use crate::error::Error;

/// Languages the analysis pipeline knows how to process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Thai
    #[default]
    Thai,
    /// English
    English,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Thai => "th",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Thai => write!(f, "Thai"),
            Language::English => write!(f, "English"),
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "th" | "tha" | "thai" => Ok(Language::Thai),
            "en" | "eng" | "english" => Ok(Language::English),
            other => Err(Error::Config(format!("unsupported language '{}'", other))),
        }
    }
}

/// Language detector with a fallback for unrecognized input
#[derive(Debug, Clone, Copy)]
pub struct LanguageDetector {
    default: Language,
    require_reliable: bool,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl LanguageDetector {
    /// Create a detector that falls back to `default`
    pub fn new(default: Language) -> Self {
        LanguageDetector {
            default,
            require_reliable: false,
        }
    }

    /// Treat unreliable detections as undetected
    pub fn require_reliable(mut self, require: bool) -> Self {
        self.require_reliable = require;
        self
    }

    /// The language used when detection fails
    pub fn default_language(&self) -> Language {
        self.default
    }

    /// Classify `text`.
    ///
    /// Thai is recognized as Thai; every other language written in Latin
    /// script goes down the English path. Anything else, including empty
    /// text, yields the default language.
    pub fn detect(&self, text: &str) -> Language {
        if text.trim().is_empty() {
            return self.default;
        }

        let info = match whatlang::detect(text) {
            Some(info) if !self.require_reliable || info.is_reliable() => info,
            Some(info) => {
                debug!(lang = ?info.lang(), "unreliable language detection, using default");
                return self.default;
            }
            None => {
                debug!("language not detected, using default");
                return self.default;
            }
        };

        match (info.lang(), info.script()) {
            (Lang::Tha, _) | (_, Script::Thai) => Language::Thai,
            (_, Script::Latin) => Language::English,
            (lang, script) => {
                debug!(?lang, ?script, "unsupported language, using default");
                self.default
            }
        }
    }
}

/// Detect the language of `text` with the default fallback (Thai)
pub fn detect(text: &str) -> Language {
    LanguageDetector::default().detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_thai() {
        let text = "การพัฒนาที่ยั่งยืนเป็นเป้าหมายสำคัญของชุมชนในประเทศไทย";
        assert_eq!(detect(text), Language::Thai);
    }

    #[test]
    fn test_detect_english() {
        let text = "Sustainable development is an important goal for every community in the region.";
        assert_eq!(detect(text), Language::English);
    }

    #[test]
    fn test_empty_text_uses_default() {
        assert_eq!(detect("   "), Language::Thai);
        let detector = LanguageDetector::new(Language::English);
        assert_eq!(detector.detect(""), Language::English);
    }

    #[test]
    fn test_unsupported_script_uses_default() {
        let detector = LanguageDetector::new(Language::English);
        assert_eq!(detector.detect("Это русский текст о погоде и природе."), Language::English);
        let detector = LanguageDetector::new(Language::Thai);
        assert_eq!(detector.detect("Это русский текст о погоде и природе."), Language::Thai);
    }

    #[test]
    fn test_unreliable_detection_uses_default() {
        let text = "ok";
        assert!(whatlang::detect(text).map_or(true, |info| !info.is_reliable()));

        let strict = LanguageDetector::new(Language::Thai).require_reliable(true);
        assert_eq!(strict.detect(text), Language::Thai);

        let english = "Sustainable development is an important goal for every community in the region.";
        assert_eq!(strict.detect(english), Language::English);
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("th".parse::<Language>().unwrap(), Language::Thai);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::Thai.to_string(), "Thai");
        assert_eq!(Language::English.code(), "en");
    }
}
