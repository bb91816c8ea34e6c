//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output on stderr
//! - Configurable log levels
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use paperplan::logging::init_logging;
//! use paperplan::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the outcome of a blueprint preview
///
/// # Example
///
/// ```no_run
/// use paperplan::log_preview_summary;
/// use paperplan::core::preview::preview;
/// use paperplan::domain::BlueprintBuilder;
///
/// let input = BlueprintBuilder::new("general").type_count("mcq", 10).build();
/// let result = preview(&input).unwrap();
/// log_preview_summary!("blueprint.json", &result);
/// ```
#[macro_export]
macro_rules! log_preview_summary {
    ($source:expr, $result:expr) => {
        tracing::info!(
            source = %$source,
            valid = $result.valid,
            total_questions = $result.totals.total_questions,
            total_marks = $result.totals.total_marks,
            duration_estimate = $result.duration_estimate,
            warnings = $result.warnings.len(),
            "Blueprint previewed"
        );
    };
}

/// Log a submitted generation job
///
/// # Example
///
/// ```no_run
/// use paperplan::log_job_submitted;
///
/// log_job_submitted!("5f1c...", "directory", "./jobs/5f1c....json");
/// ```
#[macro_export]
macro_rules! log_job_submitted {
    ($job_id:expr, $sink:expr, $location:expr) => {
        tracing::info!(
            job_id = %$job_id,
            sink = $sink,
            location = %$location,
            "Generation job submitted"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use paperplan::log_error_with_context;
/// use paperplan::domain::PaperplanError;
///
/// let error = PaperplanError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
