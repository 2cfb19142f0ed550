//! Trainer tuning parameters

use crate::error::{PunktError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Thresholds and switches for [`Trainer`](super::Trainer)
///
/// Every field is optional in TOML; missing ones keep the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Minimum score for a type to become an abbreviation
    pub abbrev_threshold: f64,
    /// Minimum score for a type pair to become a collocation
    pub collocation_threshold: f64,
    /// Minimum score for a type to become a sentence starter
    pub sent_starter_threshold: f64,
    /// Types rarer than this may be learned as rare abbreviations
    pub abbrev_backoff: usize,
    /// Collocations must occur more often than this
    pub min_colloc_freq: usize,
    /// Do not penalize abbreviations seen without their period
    pub ignore_abbrev_penalty: bool,
    /// Consider every word pair spanning a period as a collocation
    pub include_all_collocs: bool,
    /// Consider pairs whose first word is an abbreviation as collocations
    pub include_abbrev_collocs: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            abbrev_threshold: 0.3,
            collocation_threshold: 7.88,
            sent_starter_threshold: 30.0,
            abbrev_backoff: 5,
            min_colloc_freq: 1,
            ignore_abbrev_penalty: false,
            include_all_collocs: false,
            include_abbrev_collocs: false,
        }
    }
}

impl TrainerConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| PunktError::Configuration(format!("Failed to parse trainer config: {e}")))
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
