//! Domain error types
//!
//! This module defines the error hierarchy for paperplan. Only structural problems
//! with a blueprint cross the engine boundary as errors; every semantic
//! inconsistency is reported as a warning inside a successful preview instead.

use thiserror::Error;

/// Main paperplan error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum PaperplanError {
    /// The blueprint is structurally unusable and was rejected before normalization
    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Hand-off to the generation job failed or was refused
    #[error("Generation error: {0}")]
    Generation(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Structural blueprint errors
///
/// Raised while validating a [`BlueprintInput`](crate::domain::BlueprintInput),
/// before any normalization step runs. No preview is produced when one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructuralError {
    /// The exam domain name is not one of the known domains
    #[error("unknown exam domain '{0}'")]
    UnknownDomain(String),

    /// A count field holds a negative value
    #[error("negative count for {field}: {value}")]
    NegativeCount { field: String, value: i64 },

    /// A type or difficulty code is empty or blank
    #[error("blank code in {field}")]
    BlankCode { field: String },

    /// A section entry cannot be interpreted
    #[error("malformed section {index}: {reason}")]
    MalformedSection { index: usize, reason: String },
}

impl StructuralError {
    /// Creates a negative-count error for the given field path
    pub fn negative(field: impl Into<String>, value: i64) -> Self {
        StructuralError::NegativeCount {
            field: field.into(),
            value,
        }
    }

    /// Creates a malformed-section error
    pub fn malformed_section(index: usize, reason: impl Into<String>) -> Self {
        StructuralError::MalformedSection {
            index,
            reason: reason.into(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for PaperplanError {
    fn from(err: std::io::Error) -> Self {
        PaperplanError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PaperplanError {
    fn from(err: serde_json::Error) -> Self {
        PaperplanError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PaperplanError {
    fn from(err: toml::de::Error) -> Self {
        PaperplanError::Configuration(format!("TOML parse error: {err}"))
    }
}
