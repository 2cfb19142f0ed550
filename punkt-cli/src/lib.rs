//! Punkt CLI library
//!
//! This library provides the command-line interface for the Punkt
//! sentence boundary detector: splitting files into sentences and training
//! models from raw text.

pub mod commands;
pub mod input;
pub mod language_source;
pub mod output;
pub mod progress;

use clap::Parser;
use commands::Commands;

/// Command-line interface definition for punkt
#[derive(Debug, Parser)]
#[command(name = "punkt")]
#[command(about = "Unsupervised sentence boundary detection", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Run the selected subcommand
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Split(args) => args.execute(),
            Commands::Train(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
