// src/extractors/mod.rs
pub mod policy;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use policy::{Extraction, PolicyExtractor};
