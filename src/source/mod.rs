// src/source/mod.rs
use crate::utils::error::SourceError;
use glob::{MatchOptions, Pattern};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// Shell semantics: `*` never matches a leading dot or crosses a separator.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Lists entries directly inside `dir` whose file name matches `pattern`.
/// Not recursive. Results are sorted by path so runs are repeatable.
pub fn discover_inputs(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, SourceError> {
    let matcher = Pattern::new(pattern)?;

    let unreadable = |source: io::Error| SourceError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let name = entry.file_name();
        if matcher.matches_with(&name.to_string_lossy(), MATCH_OPTIONS) {
            inputs.push(entry.path());
        } else {
            tracing::trace!("Ignoring non-matching entry: {}", entry.path().display());
        }
    }

    inputs.sort();
    tracing::debug!("Discovered {} inputs in {}", inputs.len(), dir.display());
    Ok(inputs)
}

/// Reads a whole file and parses it as a JSON value of any shape.
/// The file handle is released before parsing starts.
pub fn load_document(path: &Path) -> Result<Value, SourceError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SourceError::FileNotFound,
        _ => SourceError::Io(e),
    })?;

    tracing::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(serde_json::from_str(&content)?)
}

/// Final path component, for console output.
pub fn base_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
