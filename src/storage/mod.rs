// src/storage/mod.rs
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use crate::policy::models::CompactSummaryLine;
use crate::utils::error::StorageError;

pub struct StorageManager {
    report_path: PathBuf,
}

impl StorageManager {
    /// Creates a StorageManager that writes the combined report to `report_path`
    pub fn new<P: AsRef<Path>>(report_path: P) -> Self {
        Self { report_path: report_path.as_ref().to_path_buf() }
    }

    /// Writes one summary per line, UTF-8, each newline-terminated.
    /// An existing file at the report path is overwritten.
    pub fn save_compact_report(&self, lines: &[CompactSummaryLine]) -> Result<PathBuf, StorageError> {
        let io_error = |source: std::io::Error| StorageError::Io {
            path: self.report_path.clone(),
            source,
        };

        let file = fs::File::create(&self.report_path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);

        for line in lines {
            writeln!(writer, "{}", line.as_str()).map_err(io_error)?;
        }
        writer.flush().map_err(io_error)?;

        tracing::debug!("Wrote {} summaries to {}", lines.len(), self.report_path.display());

        Ok(self.report_path.clone())
    }
}
