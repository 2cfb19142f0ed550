//! CLI command implementations

use clap::Subcommand;

pub mod list;
pub mod split;
pub mod train;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into sentences
    Split(split::SplitArgs),

    /// Train a model from raw text files
    Train(train::TrainArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity flag. Nothing is installed
/// in quiet mode.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let train_cmd = Commands::Train(train::TrainArgs {
            input: vec!["corpus.txt".to_string()],
            output: PathBuf::from("model.json"),
            model: None,
            config: None,
            language: crate::language_source::Language::English,
            language_config: None,
            pretty: false,
            quiet: true,
            verbose: 0,
        });

        let debug_str = format!("{train_cmd:?}");
        assert!(debug_str.contains("Train"));
        assert!(debug_str.contains("corpus.txt"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };
        let debug_str = format!("{list_cmd:?}");
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(1, false);
        init_logging(3, false);
        init_logging(0, true);
    }
}
