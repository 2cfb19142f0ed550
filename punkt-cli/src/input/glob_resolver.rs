//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_glob_and_literal() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let glob_pattern = dir.path().join("*.txt").display().to_string();
        let literal = dir.path().join("a.txt").display().to_string();
        let files = resolve_patterns(&[glob_pattern, literal]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_no_match_is_error() {
        let dir = TempDir::new().unwrap();
        let pattern = dir.path().join("*.none").display().to_string();
        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid glob pattern"));
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let pattern = dir.path().join("*").display().to_string();
        assert!(resolve_patterns(&[pattern]).is_err());
    }
}
