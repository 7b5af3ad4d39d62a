// src/policy/mod.rs
pub mod models;

// Re-export key model types for convenience
#[allow(unused_imports)]
pub use models::{
    CompactSummaryLine,
    ExtractedRecord,
    FieldWarning,
    PolicyDocument,
    PolicyEntry,
};
