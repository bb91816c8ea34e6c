//! Preview fingerprints
//!
//! A fingerprint is the SHA-256 digest of a preview's canonical JSON form.
//! Identical blueprints produce identical previews, so the fingerprint lets a
//! downstream generation service recognise repeat submissions.

use crate::domain::{PaperplanError, PreviewResult, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Calculate the fingerprint of a preview
///
/// Returns a hex-encoded SHA-256 digest (64 characters).
///
/// # Examples
///
/// ```
/// use paperplan::core::fingerprint::fingerprint;
/// use paperplan::core::preview::preview;
/// use paperplan::domain::BlueprintBuilder;
///
/// let input = BlueprintBuilder::new("general").type_count("mcq", 5).build();
/// let result = preview(&input).unwrap();
/// assert_eq!(fingerprint(&result).unwrap().len(), 64);
/// ```
pub fn fingerprint(preview: &PreviewResult) -> Result<String> {
    let value = serde_json::to_value(preview)
        .map_err(|e| PaperplanError::Serialization(e.to_string()))?;
    fingerprint_value(&value)
}

/// Calculate the fingerprint of an arbitrary JSON value
///
/// `serde_json::Map` keeps keys sorted (the `preserve_order` feature stays
/// off), so key order and whitespace in the source never change the digest.
pub fn fingerprint_value(value: &Value) -> Result<String> {
    let data = serde_json::to_string(value)
        .map_err(|e| PaperplanError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
