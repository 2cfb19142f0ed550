//! Punctuation rule providers

use super::config::PunctuationConfig;
use crate::error::{PunktError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Punctuation knowledge the tokenizer and annotators depend on
///
/// Implementors supply the raw character classes and compiled patterns; the
/// provided methods derive the predicates from them and can be overridden
/// per language.
pub trait PunctuationRules: Send + Sync + fmt::Debug {
    /// Characters that may end a sentence (`.?!`)
    fn sentence_end_chars(&self) -> &[char];

    /// Sentence-internal punctuation (`,:;`)
    fn internal_punctuation(&self) -> &[char];

    /// Quotes and brackets that may close after end punctuation
    fn closing_punctuation(&self) -> &[char];

    /// Characters that cannot appear inside a word
    fn non_word_chars(&self) -> &Regex;

    /// Runs of hyphens or periods, including spaced ellipses
    fn multi_char_punct(&self) -> &Regex;

    /// Matches any sentence-end candidate inside a word
    fn period_context(&self) -> &Regex;

    /// Splits raw text into word candidates
    fn word_pattern(&self) -> &Regex;

    /// Whether a word could end a sentence and deserves a closer look
    fn has_sentence_punct(&self, word: &str) -> bool {
        self.period_context().is_match(word)
    }

    /// A lone punctuation character such as `,` or `.`
    fn is_bare_punctuation(&self, text: &str) -> bool {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                self.internal_punctuation().contains(&c) || self.sentence_end_chars().contains(&c)
            }
            _ => false,
        }
    }

    /// Whether a token is a sentence-end punctuation signature
    ///
    /// Accepts a bare `.`, any run of end characters containing `?` or `!`,
    /// and either of those followed by closing quotes or brackets.
    fn is_sentence_end(&self, text: &str) -> bool {
        let closing = self.closing_punctuation();
        let core = text.trim_end_matches(|c| closing.contains(&c));
        if core.is_empty() {
            return false;
        }

        let ends = self.sentence_end_chars();
        if !core.chars().all(|c| ends.contains(&c)) {
            return false;
        }

        core == "." || core.chars().any(|c| c != '.')
    }
}

static DEFAULT_RULES: LazyLock<PunctuationSet> = LazyLock::new(|| {
    PunctuationSet::from_config(&PunctuationConfig::default())
        .expect("built-in punctuation rules are valid")
});

/// [`PunctuationRules`] compiled from a [`PunctuationConfig`]
#[derive(Debug, Clone)]
pub struct PunctuationSet {
    sentence_end: Vec<char>,
    internal: Vec<char>,
    closing: Vec<char>,
    non_word_chars: Regex,
    multi_char_punct: Regex,
    period_context: Regex,
    word_pattern: Regex,
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| PunktError::InvalidPattern { name, source })
}

impl PunctuationSet {
    /// Compile the patterns of `config`
    ///
    /// Fails with [`PunktError::InvalidPattern`] on a malformed regex and
    /// with [`PunktError::Configuration`] when no sentence-end characters are
    /// given.
    pub fn from_config(config: &PunctuationConfig) -> Result<Self> {
        if config.sentence_end.is_empty() {
            return Err(PunktError::Configuration(
                "at least one sentence-end character is required".to_string(),
            ));
        }

        let non_word_chars = compile("non_word_chars", &config.non_word_chars)?;
        let multi_char_punct = compile("multi_char_punct", &config.multi_char_punct)?;

        let class: String = config
            .sentence_end
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let period_context = compile("period_context", &format!("[{class}]"))?;
        let word_pattern = compile(
            "word_pattern",
            &format!(r"(?:{})|\S+", config.multi_char_punct),
        )?;

        Ok(Self {
            sentence_end: config.sentence_end.clone(),
            internal: config.internal.clone(),
            closing: config.closing.clone(),
            non_word_chars,
            multi_char_punct,
            period_context,
            word_pattern,
        })
    }
}

impl Default for PunctuationSet {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

impl PunctuationRules for PunctuationSet {
    fn sentence_end_chars(&self) -> &[char] {
        &self.sentence_end
    }

    fn internal_punctuation(&self) -> &[char] {
        &self.internal
    }

    fn closing_punctuation(&self) -> &[char] {
        &self.closing
    }

    fn non_word_chars(&self) -> &Regex {
        &self.non_word_chars
    }

    fn multi_char_punct(&self) -> &Regex {
        &self.multi_char_punct
    }

    fn period_context(&self) -> &Regex {
        &self.period_context
    }

    fn word_pattern(&self) -> &Regex {
        &self.word_pattern
    }
}
