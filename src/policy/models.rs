// src/policy/models.rs
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

/// Title used when `policyMetadata.policyTitle` is missing.
pub const DEFAULT_TITLE: &str = "N/A";
/// Rendered name for an entry without a `name` field.
pub const MISSING_NAME: &str = "N/A";
/// Verbose sub-fields dropped from every treatment and indication.
pub const STRIPPED_FIELDS: [&str; 3] = ["keywords", "codes", "id"];

pub const TREATMENTS: &str = "treatments";
pub const INDICATIONS: &str = "indications";

/// Short type name of a JSON value, used in diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A treatment or indication entry. Any JSON mapping; `name` is the only key
/// the summary reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PolicyEntry(Map<String, Value>);

impl PolicyEntry {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    #[cfg(test)]
    pub fn contains_field(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The entry's `name`, or `"N/A"` when absent.
    pub fn display_name(&self) -> &str {
        self.0
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(MISSING_NAME)
    }

    /// Builds a new entry without `keywords`, `codes` or `id`.
    /// Missing keys are fine, and applying it twice changes nothing.
    pub fn into_stripped(self) -> Self {
        Self(
            self.0
                .into_iter()
                .filter(|(key, _)| !STRIPPED_FIELDS.contains(&key.as_str()))
                .collect(),
        )
    }
}

/// One input file that parsed to a JSON object, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyDocument {
    pub policy_title: String,
    pub treatments: Vec<PolicyEntry>,
    pub indications: Vec<PolicyEntry>,
}

/// `treatments` or `indications` was present but not a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWarning {
    pub field: &'static str,
    pub found: &'static str,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a list (found {})", self.field, self.found)
    }
}

/// The fields kept from a processed file. Lives only for the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    pub policy_title: String,
    pub source_filename: String,
    pub treatments: Vec<PolicyEntry>,
    pub indications: Vec<PolicyEntry>,
}

impl ExtractedRecord {
    /// Takes ownership of the document and strips every entry.
    pub fn from_document(document: PolicyDocument, source_filename: &str) -> Self {
        Self {
            policy_title: document.policy_title,
            source_filename: source_filename.to_string(),
            treatments: strip_all(document.treatments),
            indications: strip_all(document.indications),
        }
    }

    /// Base filename without its extension.
    pub fn file_stem(&self) -> String {
        Path::new(&self.source_filename)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_filename.clone())
    }
}

fn strip_all(entries: Vec<PolicyEntry>) -> Vec<PolicyEntry> {
    entries.into_iter().map(PolicyEntry::into_stripped).collect()
}

/// `<stem>: <title> Treatments: [a, b]; Indications: [c]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactSummaryLine(String);

impl CompactSummaryLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&ExtractedRecord> for CompactSummaryLine {
    fn from(record: &ExtractedRecord) -> Self {
        Self(format!(
            "{}: {} Treatments: [{}]; Indications: [{}]",
            record.file_stem(),
            record.policy_title,
            join_names(&record.treatments),
            join_names(&record.indications),
        ))
    }
}

impl fmt::Display for CompactSummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn join_names(entries: &[PolicyEntry]) -> String {
    entries
        .iter()
        .map(PolicyEntry::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}
