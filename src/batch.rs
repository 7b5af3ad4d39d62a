// src/batch.rs
use std::path::{Path, PathBuf};

use crate::extractors::policy::{Extraction, PolicyExtractor};
use crate::policy::models::{CompactSummaryLine, ExtractedRecord};
use crate::source;
use crate::storage::StorageManager;
use crate::utils::error::{AppError, FileError};

const SOURCE_DIRECTORY: &str = "premera_policies_abstracted";
const FILE_PATTERN: &str = "*.json";
const OUTPUT_FILENAME: &str = "policies_compact.txt";

/// Where to read policies from and where the combined report goes.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub source_directory: PathBuf,
    pub file_pattern: String,
    pub output_filename: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::from(SOURCE_DIRECTORY),
            file_pattern: FILE_PATTERN.to_string(),
            output_filename: PathBuf::from(OUTPUT_FILENAME),
        }
    }
}

impl ExtractorConfig {
    fn pattern_display(&self) -> String {
        self.source_directory.join(&self.file_pattern).display().to_string()
    }
}

/// A discovered file that was not turned into a summary.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

/// Outcome of one run. `processed.len() + skipped.len() == discovered`.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub discovered: usize,
    pub processed: Vec<ExtractedRecord>,
    pub lines: Vec<CompactSummaryLine>,
    pub skipped: Vec<SkippedFile>,
    pub warnings: usize,
    pub output: Option<PathBuf>,
}

pub struct BatchExtractor {
    config: ExtractorConfig,
    extractor: PolicyExtractor,
}

impl BatchExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config, extractor: PolicyExtractor::new() }
    }

    /// Discovers inputs, processes each one in order and writes the report.
    /// Only an unlistable source directory or an unwritable report is fatal.
    pub fn run(&self) -> Result<RunSummary, AppError> {
        let inputs = source::discover_inputs(&self.config.source_directory, &self.config.file_pattern)?;

        let mut summary = RunSummary {
            discovered: inputs.len(),
            ..RunSummary::default()
        };

        if inputs.is_empty() {
            println!("No files found matching pattern: {}", self.config.pattern_display());
            return Ok(summary);
        }

        println!("Found {} files matching pattern. Processing...\n", inputs.len());

        for path in &inputs {
            let filename = source::base_filename(path);
            println!("--- Processing: {} ---", filename);

            match self.process_file(path, &filename) {
                Ok(extraction) => {
                    let line = CompactSummaryLine::from(&extraction.record);
                    println!("{}", line);
                    summary.warnings += extraction.warnings.len();
                    summary.lines.push(line);
                    summary.processed.push(extraction.record);
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", filename, e);
                    summary.skipped.push(SkippedFile {
                        filename: filename.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            println!("{}", separator_rule(&filename));
        }

        println!(
            "\nProcessing complete. Extracted data from {} of {} files.",
            summary.processed.len(),
            summary.discovered
        );

        if !summary.lines.is_empty() {
            let storage = StorageManager::new(&self.config.output_filename);
            let path = storage.save_compact_report(&summary.lines)?;
            println!("\nCompact data saved to {}", path.display());
            summary.output = Some(path);
        }

        Ok(summary)
    }

    fn process_file(&self, path: &Path, filename: &str) -> Result<Extraction, FileError> {
        let document = source::load_document(path)?;
        let extraction = self.extractor.extract(document, filename)?;

        match serde_json::to_string(&extraction.record) {
            Ok(json) => tracing::debug!("Extracted record: {}", json),
            Err(e) => tracing::debug!("Could not render record for {}: {}", filename, e),
        }

        Ok(extraction)
    }
}

/// A `-` rule twenty characters longer than the filename.
fn separator_rule(filename: &str) -> String {
    "-".repeat(filename.chars().count() + 20)
}
