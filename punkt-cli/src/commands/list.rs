//! List command implementation

use crate::language_source::Language;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available language rules
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        for line in self.lines() {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Languages => Language::value_variants()
                .iter()
                .map(|language| format!("{:<10} {}", language.name(), language.description()))
                .collect(),
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .map(|format| format!("{:<10} {}", format.name(), format.description()))
                .collect(),
        }
    }
}
