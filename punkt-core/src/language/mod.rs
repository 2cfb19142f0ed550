//! Language customization
//!
//! A language plugs into the core through a [`PunctuationRules`] provider
//! and extra annotation stages. Languages are described by TOML
//! [`LanguageConfig`] documents; the built-in ones are embedded at compile
//! time.

mod config;
pub mod english;
mod loader;
mod rules;

pub use config::{AbbreviationConfig, LanguageConfig, MetadataConfig, PunctuationConfig};
pub use loader::{get_language_config, list_available_languages};
pub use rules::{PunctuationRules, PunctuationSet};
