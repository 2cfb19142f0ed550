//! Language configuration documents
//!
//! Languages are described in TOML. Only `[metadata]` is mandatory; every
//! punctuation field falls back to the language-neutral Punkt defaults.
//!
//! ```toml
//! [metadata]
//! code = "en"
//! name = "English"
//!
//! [punctuation]
//! sentence_end = [".", "?", "!"]
//!
//! [abbreviations]
//! titles = ["mr", "mrs", "dr"]
//! ```

use crate::error::{PunktError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A complete language description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Identification
    pub metadata: MetadataConfig,
    /// Punctuation classes and patterns
    #[serde(default)]
    pub punctuation: PunctuationConfig,
    /// Supervisory abbreviations grouped by category
    #[serde(default)]
    pub abbreviations: AbbreviationConfig,
}

/// Language identification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Short code such as `en`
    pub code: String,
    /// Display name
    pub name: String,
}

/// Punctuation classes and patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PunctuationConfig {
    /// Characters that may end a sentence
    pub sentence_end: Vec<char>,
    /// Sentence-internal punctuation
    pub internal: Vec<char>,
    /// Quotes and brackets that may follow end punctuation
    pub closing: Vec<char>,
    /// Regex matching characters that cannot appear inside a word
    pub non_word_chars: String,
    /// Regex matching hyphen and period runs
    pub multi_char_punct: String,
}

impl Default for PunctuationConfig {
    fn default() -> Self {
        Self {
            sentence_end: vec!['.', '?', '!'],
            internal: vec![',', ':', ';'],
            closing: vec!['"', '\'', ')', ']', '}', '”', '’'],
            non_word_chars: r#"(?:[?!)";}\]\*:@'\({\[’”])"#.to_string(),
            multi_char_punct: r"(?:\-{2,}|\.{2,}|(?:\.\s){2,}\.)".to_string(),
        }
    }
}

/// Supervisory abbreviations, periods omitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbbreviationConfig {
    /// Category name to abbreviation list
    #[serde(flatten)]
    pub categories: BTreeMap<String, Vec<String>>,
}

impl AbbreviationConfig {
    /// Every abbreviation across categories, lower-cased with any trailing
    /// period removed
    pub fn all(&self) -> impl Iterator<Item = String> + '_ {
        self.categories.values().flatten().map(|abbrev| {
            let abbrev = abbrev.trim();
            abbrev
                .strip_suffix('.')
                .unwrap_or(abbrev)
                .to_lowercase()
        })
    }
}

impl LanguageConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(content)
            .map_err(|e| PunktError::Configuration(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            PunktError::Configuration(msg) => {
                PunktError::Configuration(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(PunktError::Configuration(
                "metadata.code must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
