//! Markdown output formatter

use super::{normalize_whitespace, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs sentences as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, _start: usize, _end: usize) -> Result<()> {
        let line = normalize_whitespace(sentence);
        if line.is_empty() {
            return Ok(());
        }
        self.sentence_count += 1;
        writeln!(self.writer, "{}. {}", self.sentence_count, line)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list_with_footer() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_sentence("First one.", 0, 10).unwrap();
            formatter.format_sentence("  ", 10, 12).unwrap();
            formatter.format_sentence(" Second one.", 12, 24).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "1. First one.\n2. Second one.\n\n---\n*Total sentences: 2*\n"
        );
    }
}
