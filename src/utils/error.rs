// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Cannot list source directory {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("File not found.")]
    FileNotFound, // Vanished between discovery and read

    #[error("An unexpected error occurred - {0}")]
    Io(#[source] std::io::Error),

    #[error("Invalid JSON structure - {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Root element is not a JSON object (dictionary), found {0}")]
    NotAnObject(&'static str),

    #[error("'policyMetadata' is not a JSON object, found {0}")]
    MetadataNotAnObject(&'static str),

    #[error("entry {index} of '{field}' is not a JSON object")]
    EntryNotAnObject { field: &'static str, index: usize },

    #[error("entry {index} of '{field}' has a 'name' that is not a string")]
    NameNotAString { field: &'static str, index: usize },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Cannot write report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that makes a single input file get skipped.
#[derive(Error, Debug)]
pub enum FileError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Shape(#[from] ExtractError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Input discovery failed: {0}")]
    Source(#[from] SourceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
