//! punkt CLI

use clap::Parser;
use punkt_cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().execute()
}
