//! Tokens and word types
//!
//! A [`Token`] is one lexical unit cut from the source text. Its *type* is
//! the normalized form the statistics are keyed on: lower-cased, with any
//! number collapsed to [`NUMBER_TYPE`].

use crate::ortho::LetterCase;
use regex::Regex;
use std::sync::LazyLock;

/// Placeholder type shared by every numeric token
pub const NUMBER_TYPE: &str = "##number##";

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[\.,]?\d[\d,\.-]*\.?$").expect("numeric pattern is valid")
});

static ELLIPSIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\.\.+|(?:\.\s+){2,}\.)$").expect("ellipsis pattern is valid")
});

/// Normalized type of a token text
pub fn normalize_type(text: &str) -> String {
    if NUMERIC.is_match(text) {
        NUMBER_TYPE.to_string()
    } else {
        text.to_lowercase()
    }
}

/// One lexical unit with its source offset and annotation flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    typ: String,
    start: usize,
    /// Ends a sentence
    pub sent_break: bool,
    /// Period belongs to an abbreviation
    pub abbr: bool,
    /// Is an ellipsis
    pub ellipsis: bool,
    /// First token of a paragraph
    pub para_start: bool,
    /// First token of a line
    pub line_start: bool,
}

impl Token {
    /// Create an unannotated token starting at byte offset `start`
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let typ = normalize_type(&text);
        Self {
            text,
            typ,
            start,
            sent_break: false,
            abbr: false,
            ellipsis: false,
            para_start: false,
            line_start: false,
        }
    }

    /// Literal text as it appears in the source
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized type
    pub fn typ(&self) -> &str {
        &self.typ
    }

    /// Byte offset of the first character in the source text
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the last character
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Ends with a period
    pub fn period_final(&self) -> bool {
        self.text.ends_with('.')
    }

    /// A single letter followed by a period, like `J.`
    pub fn is_initial(&self) -> bool {
        let mut chars = self.text.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(letter), Some('.'), None) if letter.is_alphabetic()
        )
    }

    /// Ends in a run of two or more periods, possibly spaced
    pub fn is_ellipsis(&self) -> bool {
        ELLIPSIS.is_match(&self.text)
    }

    /// Only alphabetic characters
    pub fn is_alpha(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }

    /// Type is the numeric placeholder
    pub fn is_number(&self) -> bool {
        self.typ.starts_with(NUMBER_TYPE)
    }

    /// Type contains at least one letter
    pub fn is_non_punct(&self) -> bool {
        self.typ.chars().any(|c| c.is_alphabetic() || c == '_')
    }

    /// Case of the first character
    pub fn first_case(&self) -> LetterCase {
        self.text
            .chars()
            .next()
            .map_or(LetterCase::None, LetterCase::of)
    }

    /// Starts with an upper-case letter
    pub fn first_upper(&self) -> bool {
        self.first_case() == LetterCase::Upper
    }

    /// Starts with a lower-case letter
    pub fn first_lower(&self) -> bool {
        self.first_case() == LetterCase::Lower
    }

    /// Type with one trailing period removed
    pub fn type_no_period(&self) -> &str {
        if self.typ.len() > 1 {
            if let Some(stripped) = self.typ.strip_suffix('.') {
                return stripped;
            }
        }
        &self.typ
    }

    /// Type with the trailing period removed only when the token ends a sentence
    pub fn type_no_sent_period(&self) -> &str {
        if self.sent_break {
            self.type_no_period()
        } else {
            &self.typ
        }
    }
}
