//! Split command implementation

use super::init_logging;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::{Language, LanguageSource};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use punkt_core::{SentenceTokenizer, Storage};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Trained model snapshot (default: empty model)
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Language for sentence detection rules
    #[arg(short, long, value_enum, default_value = "english")]
    pub language: Language,

    /// External language configuration file (overrides --language)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Split files concurrently
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One sentence of one file, detached from the file contents
#[derive(Debug, Clone, PartialEq, Eq)]
struct SentenceRecord {
    text: String,
    start: usize,
    end: usize,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting sentence splitting");
        log::debug!("Arguments: {self:?}");

        let files = resolve_patterns(&self.input)?;
        let storage = match &self.model {
            Some(path) => FileReader::read_model(path)?,
            None => Storage::new(),
        };

        let source = LanguageSource::from_args(self.language, self.language_config.as_ref());
        log::info!("Language: {}", source.display_name());
        let tokenizer = source.sentence_tokenizer(storage)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let per_file = if self.parallel {
            files
                .par_iter()
                .map(|path| split_file(&tokenizer, path, &progress))
                .collect::<Result<Vec<_>>>()?
        } else {
            files
                .iter()
                .map(|path| split_file(&tokenizer, path, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = self.format.formatter(writer);
        for sentence in per_file.iter().flatten() {
            formatter.format_sentence(&sentence.text, sentence.start, sentence.end)?;
        }
        formatter.finish()?;

        log::info!(
            "Split {} files into {} sentences",
            files.len(),
            per_file.iter().map(Vec::len).sum::<usize>()
        );
        Ok(())
    }
}

fn split_file(
    tokenizer: &SentenceTokenizer,
    path: &Path,
    progress: &ProgressReporter,
) -> Result<Vec<SentenceRecord>> {
    let text = FileReader::read_text(path)?;
    let sentences = tokenizer
        .tokenize(&text)
        .into_iter()
        .map(|sentence| SentenceRecord {
            text: sentence.text.to_string(),
            start: sentence.start,
            end: sentence.end,
        })
        .collect();

    log::debug!("Split {}", path.display());
    progress.file_completed(&path.display().to_string());
    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_split_file_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "Hello world. This is a test.").unwrap();

        let tokenizer = SentenceTokenizer::new(Storage::new());
        let records = split_file(&tokenizer, &path, &ProgressReporter::new(true)).unwrap();

        assert_eq!(
            records,
            vec![
                SentenceRecord {
                    text: "Hello world.".to_string(),
                    start: 0,
                    end: 12
                },
                SentenceRecord {
                    text: " This is a test.".to_string(),
                    start: 12,
                    end: 28
                },
            ]
        );
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "Dr. Smith arrived. He sat.").unwrap();

        let args = SplitArgs {
            input: vec![input.display().to_string()],
            model: None,
            language: Language::English,
            language_config: None,
            format: OutputFormat::Text,
            output: Some(output.clone()),
            parallel: true,
            quiet: true,
            verbose: 0,
        };
        args.execute().unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "Dr. Smith arrived.\nHe sat.\n"
        );
    }
}
