//! Output formatting module

use anyhow::Result;
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single sentence spanning `start..end` of its file
    fn format_sentence(&mut self, sentence: &str, start: usize, end: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "One sentence per line, whitespace collapsed",
            OutputFormat::Json => "Array of {text, start, end} objects",
            OutputFormat::Markdown => "Numbered list with a sentence count",
        }
    }

    /// Formatter writing this format to `writer`
    pub fn formatter<W: Write + Send + 'static>(self, writer: W) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Collapse every whitespace run to one space and trim the ends
pub fn normalize_whitespace(sentence: &str) -> String {
    sentence.split_whitespace().collect::<Vec<_>>().join(" ")
}
