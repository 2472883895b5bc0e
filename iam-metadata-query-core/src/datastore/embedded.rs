//! Embedded IAM metadata dataset.
//!
//! The pre-populated metadata document is embedded directly into the
//! binary at compile time so the tool works with no setup; an alternate
//! dataset file can still be supplied at connect time.

use rust_embed::RustEmbed;

/// Embedded IAM definition document.
#[derive(RustEmbed)]
#[folder = "data"]
#[include = "iam-definition.json"]
pub(crate) struct EmbeddedDefinition;

impl EmbeddedDefinition {
    /// Get the raw bytes of the embedded IAM definition document.
    pub(crate) fn definition_bytes() -> Option<Vec<u8>> {
        Self::get("iam-definition.json").map(|file| file.data.to_vec())
    }
}
