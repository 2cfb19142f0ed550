//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceData {
    /// The sentence text exactly as it appears in the input
    pub text: String,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset just past the last character
    pub end: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, start: usize, end: usize) -> Result<()> {
        self.sentences.push(SentenceData {
            text: sentence.to_string(),
            start,
            end,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
