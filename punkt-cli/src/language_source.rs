//! Language source management for CLI

use anyhow::{Context, Result};
use punkt_core::language::{english, LanguageConfig};
use punkt_core::{PunctuationSet, SentenceTokenizer, Storage, Trainer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Built-in languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    /// English rules, abbreviations and annotation stages
    English,
    /// Language-neutral Punkt rules only
    Generic,
}

impl Language {
    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Generic => "generic",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Language::English => "English punctuation, abbreviations and quote/list handling (en)",
            Language::Generic => "Language-neutral Punkt defaults",
        }
    }
}

/// Source of language rules
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Built-in language
    BuiltIn(Language),
    /// External TOML configuration file
    External(PathBuf),
}

impl LanguageSource {
    /// An external configuration wins over the built-in choice
    pub fn from_args(language: Language, config: Option<&PathBuf>) -> Self {
        match config {
            Some(path) => LanguageSource::External(path.clone()),
            None => LanguageSource::BuiltIn(language),
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(language) => format!("Built-in: {}", language.name()),
            LanguageSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Sentence tokenizer over `storage` with this language's rules
    pub fn sentence_tokenizer(&self, mut storage: Storage) -> Result<SentenceTokenizer> {
        match self {
            LanguageSource::BuiltIn(Language::English) => english::sentence_tokenizer(storage)
                .context("Failed to set up English rules"),
            LanguageSource::BuiltIn(Language::Generic) => Ok(SentenceTokenizer::new(storage)),
            LanguageSource::External(path) => {
                let (rules, abbreviations) = load_external(path)?;
                storage.merge(&abbreviations);
                Ok(SentenceTokenizer::builder(storage).rules(rules).build())
            }
        }
    }

    /// Trainer with this language's rules
    pub fn trainer(&self) -> Result<Trainer> {
        match self {
            LanguageSource::BuiltIn(Language::English) => {
                english::trainer().context("Failed to set up English rules")
            }
            LanguageSource::BuiltIn(Language::Generic) => Ok(Trainer::new()),
            LanguageSource::External(path) => {
                let (rules, abbreviations) = load_external(path)?;
                Ok(Trainer::new().with_rules(rules).with_storage(abbreviations))
            }
        }
    }
}

fn load_external(path: &Path) -> Result<(Arc<PunctuationSet>, Storage)> {
    let config = LanguageConfig::from_file(path)
        .with_context(|| format!("Failed to load language config: {}", path.display()))?;
    let rules = PunctuationSet::from_config(&config.punctuation)
        .with_context(|| format!("Invalid punctuation rules in {}", path.display()))?;
    log::info!(
        "Loaded language {} ({}) from {}",
        config.metadata.name,
        config.metadata.code,
        path.display()
    );
    Ok((
        Arc::new(rules),
        Storage::with_abbreviations(config.abbreviations.all()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_overrides_builtin() {
        let path = PathBuf::from("lang.toml");
        assert!(matches!(
            LanguageSource::from_args(Language::English, Some(&path)),
            LanguageSource::External(_)
        ));
        assert!(matches!(
            LanguageSource::from_args(Language::Generic, None),
            LanguageSource::BuiltIn(Language::Generic)
        ));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            LanguageSource::BuiltIn(Language::English).display_name(),
            "Built-in: english"
        );
    }

    #[test]
    fn test_external_abbreviations_are_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[metadata]\ncode = \"xx\"\nname = \"Custom\"\n\n[abbreviations]\nunits = [\"approx\"]\n",
        )
        .unwrap();

        let tokenizer = LanguageSource::External(path)
            .sentence_tokenizer(Storage::new())
            .unwrap();
        assert_eq!(tokenizer.tokenize("It is approx. Five meters.").len(), 1);
    }

    #[test]
    fn test_missing_external_config_fails() {
        let source = LanguageSource::External(PathBuf::from("/nonexistent/lang.toml"));
        let err = source.trainer().unwrap_err();
        assert!(err.to_string().contains("Failed to load language config"));
    }
}
