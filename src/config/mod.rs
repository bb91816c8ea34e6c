//! Configuration management for paperplan.
//!
//! # Overview
//!
//! paperplan reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PAPERPLAN_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paperplan::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("paperplan.toml")?;
//!
//! println!("Preview format: {}", config.preview.format);
//! println!("Jobs directory: {}", config.generation.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`PreviewConfig`] - Output format and preview concurrency
//! - [`GenerationConfig`] - Job output directory and dry-run mode
//! - [`LoggingConfig`] - Local JSON log files
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [preview]
//! format = "text"
//! max_concurrency = 8
//!
//! [generation]
//! output_dir = "${PAPERPLAN_JOBS_DIR}"
//! dry_run = false
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, GenerationConfig, LoggingConfig, OutputFormat, PaperplanConfig,
    PreviewConfig,
};
