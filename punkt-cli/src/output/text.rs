//! Plain text output formatter

use super::{normalize_whitespace, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one sentence per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, _start: usize, _end: usize) -> Result<()> {
        let line = normalize_whitespace(sentence);
        if !line.is_empty() {
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
