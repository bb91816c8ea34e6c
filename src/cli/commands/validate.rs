//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the paperplan configuration file.

use crate::cli::{exit_code, report_failure};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                report_failure("Configuration is invalid", &e);
                return Ok(exit_code::INPUT_ERROR);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Preview Format: {}", config.preview.format);
        println!("  Preview Concurrency: {}", config.preview.max_concurrency);
        println!("  Jobs Directory: {}", config.generation.output_dir);
        println!("  Dry Run: {}", config.generation.dry_run);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(exit_code::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_validate_accepts_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("paperplan.toml");
        fs::write(&path, "[preview]\nformat = \"json\"\n").unwrap();

        let code = ValidateArgs {}
            .execute(&path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(code, exit_code::OK);
    }

    #[tokio::test]
    async fn test_validate_rejects_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let code = ValidateArgs {}
            .execute(&path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(code, exit_code::INPUT_ERROR);
    }

    #[tokio::test]
    async fn test_validate_rejects_bad_rotation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("paperplan.toml");
        fs::write(&path, "[logging]\nlocal_rotation = \"weekly\"\n").unwrap();

        let code = ValidateArgs {}
            .execute(&path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(code, exit_code::INPUT_ERROR);
    }
}
