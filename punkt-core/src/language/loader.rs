//! Built-in language configurations

use super::config::LanguageConfig;
use crate::error::{PunktError, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

static LANGUAGE_CONFIGS: OnceLock<HashMap<String, LanguageConfig>> = OnceLock::new();

macro_rules! embed_language_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_configs() -> Result<HashMap<String, LanguageConfig>> {
    let mut configs = HashMap::new();

    let embedded_configs = [embed_language_config!(
        "en",
        "../../configs/languages/english.toml"
    )];

    for (code, toml_content) in embedded_configs {
        let config = LanguageConfig::from_toml_str(toml_content).map_err(|e| {
            PunktError::Configuration(format!("Failed to parse {code} config: {e}"))
        })?;

        if config.metadata.code != code {
            return Err(PunktError::Configuration(format!(
                "Config code mismatch: expected {}, got {}",
                code, config.metadata.code
            )));
        }

        configs.insert(code.to_string(), config);
    }

    Ok(configs)
}

fn embedded() -> &'static HashMap<String, LanguageConfig> {
    LANGUAGE_CONFIGS
        .get_or_init(|| load_embedded_configs().expect("Failed to load embedded language configs"))
}

/// Look up a built-in language by code
pub fn get_language_config(code: &str) -> Result<&'static LanguageConfig> {
    embedded()
        .get(code)
        .ok_or_else(|| PunktError::UnsupportedLanguage(code.to_string()))
}

/// Codes of every built-in language, sorted
pub fn list_available_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = embedded().keys().map(String::as_str).collect();
    codes.sort_unstable();
    codes
}
