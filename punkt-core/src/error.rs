//! Error types for the Punkt core

use thiserror::Error;

/// Errors surfaced by model loading and rule construction.
///
/// Statistical degeneracies (empty corpora, zero counts) are never reported
/// here; the trainer treats them as non-scoring.
#[derive(Debug, Error)]
pub enum PunktError {
    /// A model snapshot could not be deserialized
    #[error("Malformed model snapshot: {0}")]
    Model(#[from] serde_json::Error),

    /// A punctuation rule pattern failed to compile
    #[error("Invalid pattern for {name}: {source}")]
    InvalidPattern {
        /// Which rule the pattern belongs to
        name: &'static str,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Configuration loading or parsing error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported language requested
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Reading a config or model file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, PunktError>;
