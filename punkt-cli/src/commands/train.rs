//! Train command implementation

use super::init_logging;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::{Language, LanguageSource};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use punkt_core::{Storage, TrainerConfig};
use std::fs;
use std::path::PathBuf;

/// Arguments for the train command
#[derive(Debug, Args)]
pub struct TrainArgs {
    /// Training corpus files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Where to write the trained model
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Existing model to continue training from
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Trainer configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Language for tokenization rules
    #[arg(short, long, value_enum, default_value = "english")]
    pub language: Language,

    /// External language configuration file (overrides --language)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Write indented JSON
    #[arg(long)]
    pub pretty: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TrainArgs {
    /// Execute the train command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting training");
        log::debug!("Arguments: {self:?}");

        let files = resolve_patterns(&self.input)?;
        let source = LanguageSource::from_args(self.language, self.language_config.as_ref());
        log::info!("Language: {}", source.display_name());

        let mut trainer = source.trainer()?;
        if let Some(path) = &self.config {
            let config = TrainerConfig::from_file(path)
                .with_context(|| format!("Failed to load trainer config: {}", path.display()))?;
            trainer = trainer.with_config(config);
        }
        if let Some(path) = &self.model {
            let mut storage: Storage = FileReader::read_model(path)?;
            storage.merge(trainer.storage());
            trainer = trainer.with_storage(storage);
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);
        for path in &files {
            let text = FileReader::read_text(path)?;
            trainer.train(&text, false);
            progress.file_completed(&path.display().to_string());
        }
        progress.finish();

        trainer.finalize_training();
        let storage = trainer.into_storage();

        let bytes = if self.pretty {
            storage.to_json_pretty()?
        } else {
            storage.to_json()?
        };
        fs::write(&self.output, bytes)
            .with_context(|| format!("Failed to write model: {}", self.output.display()))?;

        log::info!(
            "Trained on {} files: {} abbreviations, {} collocations, {} sentence starters",
            files.len(),
            storage.abbreviations().count(),
            storage.collocations().count(),
            storage.sentence_starters().count()
        );
        Ok(())
    }
}
