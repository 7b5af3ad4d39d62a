// src/extractors/policy.rs

// --- Imports ---
use crate::policy::models::{
    json_kind, ExtractedRecord, FieldWarning, PolicyDocument, PolicyEntry, DEFAULT_TITLE,
    INDICATIONS, TREATMENTS,
};
use crate::utils::error::ExtractError;
use serde_json::{Map, Value};

// --- Data Structures ---
/// Result of extracting one file: the stripped record plus any field-type
/// warnings raised on the way.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub record: ExtractedRecord,
    pub warnings: Vec<FieldWarning>,
}

// --- Main Extractor Structure ---
pub struct PolicyExtractor;

impl PolicyExtractor {
    pub fn new() -> Self { Self {} }

    /// Validates the parsed value, applies defaults and strips verbose fields.
    /// `source_filename` is the base name used in diagnostics and the summary.
    pub fn extract(&self, root: Value, source_filename: &str) -> Result<Extraction, ExtractError> {
        let (document, warnings) = self.read_document(root, source_filename)?;
        tracing::debug!(
            "{}: {} treatments, {} indications",
            source_filename,
            document.treatments.len(),
            document.indications.len()
        );

        Ok(Extraction {
            record: ExtractedRecord::from_document(document, source_filename),
            warnings,
        })
    }

    /// Builds a `PolicyDocument` from a parsed JSON value.
    /// Only a top-level object is accepted.
    fn read_document(
        &self,
        root: Value,
        source_filename: &str,
    ) -> Result<(PolicyDocument, Vec<FieldWarning>), ExtractError> {
        let mut root = match root {
            Value::Object(map) => map,
            other => return Err(ExtractError::NotAnObject(json_kind(&other))),
        };

        let policy_title = read_title(root.remove("policyMetadata"))?;

        let mut warnings = Vec::new();
        let treatments = read_entries(&mut root, TREATMENTS, source_filename, &mut warnings)?;
        let indications = read_entries(&mut root, INDICATIONS, source_filename, &mut warnings)?;

        Ok((
            PolicyDocument {
                policy_title,
                treatments,
                indications,
            },
            warnings,
        ))
    }
}

impl Default for PolicyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// `policyMetadata.policyTitle`, defaulting through an empty mapping to "N/A".
fn read_title(metadata: Option<Value>) -> Result<String, ExtractError> {
    let metadata = match metadata {
        None => Map::new(),
        Some(Value::Object(map)) => map,
        Some(other) => return Err(ExtractError::MetadataNotAnObject(json_kind(&other))),
    };

    Ok(match metadata.get("policyTitle") {
        None => DEFAULT_TITLE.to_string(),
        Some(Value::String(title)) => title.clone(),
        // Non-string titles are rendered as their JSON text
        Some(other) => other.to_string(),
    })
}

/// Reads `treatments` or `indications`. Absent means empty; a non-list value
/// is logged, recorded as a warning and treated as empty.
fn read_entries(
    root: &mut Map<String, Value>,
    field: &'static str,
    source_filename: &str,
    warnings: &mut Vec<FieldWarning>,
) -> Result<Vec<PolicyEntry>, ExtractError> {
    let items = match root.remove(field) {
        None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            let warning = FieldWarning { field, found: json_kind(&other) };
            tracing::warn!(
                "Warning: '{}' in {} is not a list (found {}). Using empty list.",
                field,
                source_filename,
                warning.found
            );
            warnings.push(warning);
            return Ok(Vec::new());
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => {
                if matches!(fields.get("name"), None | Some(Value::String(_))) {
                    Ok(PolicyEntry::new(fields))
                } else {
                    Err(ExtractError::NameNotAString { field, index })
                }
            }
            _ => Err(ExtractError::EntryNotAnObject { field, index }),
        })
        .collect()
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::models::{CompactSummaryLine, STRIPPED_FIELDS};
    use serde_json::json;

    fn extract(value: Value, filename: &str) -> Result<Extraction, ExtractError> {
        PolicyExtractor::new().extract(value, filename)
    }

    #[test]
    fn test_sample_document_summary() {
        let value = json!({
            "policyMetadata": {"policyTitle": "Test Policy"},
            "treatments": [{"name": "Surgery", "id": "X1"}],
            "indications": [{"name": "Diabetes"}]
        });

        let extraction = extract(value, "sample.json").expect("sample should extract");
        assert!(extraction.warnings.is_empty());
        assert_eq!(
            CompactSummaryLine::from(&extraction.record).as_str(),
            "sample: Test Policy Treatments: [Surgery]; Indications: [Diabetes]"
        );
    }

    #[test]
    fn test_non_object_roots_are_rejected() {
        let cases = [
            (json!([1, 2, 3]), "array"),
            (json!("text"), "string"),
            (json!(42), "number"),
            (json!(null), "null"),
            (json!(true), "boolean"),
        ];

        for (value, kind) in cases {
            assert_eq!(
                extract(value, "bad.json").unwrap_err(),
                ExtractError::NotAnObject(kind)
            );
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let extraction = extract(json!({}), "empty.json").unwrap();
        let record = extraction.record;

        assert_eq!(record.policy_title, "N/A");
        assert!(record.treatments.is_empty());
        assert!(record.indications.is_empty());
        assert_eq!(
            CompactSummaryLine::from(&record).as_str(),
            "empty: N/A Treatments: []; Indications: []"
        );

        let no_title = extract(json!({"policyMetadata": {"version": 3}}), "x.json").unwrap();
        assert_eq!(no_title.record.policy_title, "N/A");
    }

    #[test]
    fn test_non_list_fields_warn_and_become_empty() {
        let value = json!({
            "policyMetadata": {"policyTitle": "P"},
            "treatments": "Surgery",
            "indications": {"name": "Diabetes"}
        });

        let extraction = extract(value, "odd.json").unwrap();
        assert_eq!(
            extraction.warnings,
            vec![
                FieldWarning { field: "treatments", found: "string" },
                FieldWarning { field: "indications", found: "object" },
            ]
        );
        assert!(extraction.record.treatments.is_empty());
        assert!(extraction.record.indications.is_empty());
    }

    #[test]
    fn test_entries_are_stripped_in_record() {
        let value = json!({
            "treatments": [{"name": "A", "keywords": ["k"], "codes": ["c"], "id": 1, "dose": "5mg"}],
            "indications": [{"id": "I1"}]
        });

        let record = extract(value, "strip.json").unwrap().record;
        for entry in record.treatments.iter().chain(record.indications.iter()) {
            for field in STRIPPED_FIELDS {
                assert!(!entry.contains_field(field));
            }
        }
        assert!(record.treatments[0].contains_field("dose"));
        assert_eq!(record.indications[0].display_name(), "N/A");
    }

    #[test]
    fn test_malformed_metadata_and_entries_are_rejected() {
        assert_eq!(
            extract(json!({"policyMetadata": null}), "m.json").unwrap_err(),
            ExtractError::MetadataNotAnObject("null")
        );
        assert_eq!(
            extract(json!({"treatments": [{"name": "A"}, "B"]}), "e.json").unwrap_err(),
            ExtractError::EntryNotAnObject { field: "treatments", index: 1 }
        );
        assert_eq!(
            extract(json!({"indications": [{"name": 7}]}), "n.json").unwrap_err(),
            ExtractError::NameNotAString { field: "indications", index: 0 }
        );
    }

    #[test]
    fn test_non_string_title_renders_as_json_text() {
        let record = extract(json!({"policyMetadata": {"policyTitle": 12}}), "num.json")
            .unwrap()
            .record;
        assert_eq!(record.policy_title, "12");
    }
}
