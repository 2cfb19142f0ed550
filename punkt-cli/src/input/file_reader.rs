//! File reading utilities

use anyhow::{Context, Result};
use punkt_core::Storage;
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Load a model snapshot
    pub fn read_model(path: &Path) -> Result<Storage> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read model: {}", path.display()))?;

        Storage::from_json(&bytes)
            .with_context(|| format!("Failed to parse model: {}", path.display()))
    }
}
