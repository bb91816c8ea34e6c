//! Generate command implementation
//!
//! Previews a blueprint, wraps the result in a [`GenerationJob`] and hands it
//! to the configured job sink.

use clap::Args;

use crate::adapters::create_sink;
use crate::cli::{exit_code, report_failure};
use crate::config::load_config_or_default;
use crate::core::generation::GenerationJob;
use crate::domain::{load_blueprint, PaperplanError};
use crate::{log_error_with_context, log_job_submitted};

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Blueprint file (.json or .toml)
    pub file: String,

    /// Override the directory that receives the job
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Dry run mode - prepare the job without writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(file = %self.file, "Starting generate command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                report_failure("Failed to load configuration file", &e);
                return Ok(exit_code::INPUT_ERROR);
            }
        };

        if let Some(dir) = &self.output_dir {
            tracing::info!(output_dir = %dir, "Overriding output directory from CLI");
            config.generation.output_dir = dir.clone();
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.generation.dry_run = true;
        }

        let prepared = load_blueprint(&self.file).and_then(|input| GenerationJob::prepare(&input));
        let job = match prepared {
            Ok(job) => job,
            Err(e) => {
                log_error_with_context!(&e, "Failed to prepare generation job");
                report_failure(&format!("Cannot generate from {}", self.file), &e);
                return Ok(match e {
                    PaperplanError::Generation(_) => exit_code::UNDETERMINED,
                    _ => exit_code::INPUT_ERROR,
                });
            }
        };

        println!("📝 Prepared job {}", job.job_id);
        print!("{}", job.blueprint.format_summary());
        println!();

        let sink = create_sink(&config.generation)?;
        match sink.submit(&job).await {
            Ok(receipt) => {
                log_job_submitted!(receipt.job_id, sink.name(), receipt.location);
                if receipt.dry_run {
                    println!("🔍 Dry run: job would be written to {}", receipt.location);
                } else {
                    println!("✅ Job written to {}", receipt.location);
                }
                println!("   Fingerprint: {}", job.fingerprint);
                Ok(exit_code::OK)
            }
            Err(e) => {
                log_error_with_context!(&e, "Failed to submit generation job");
                report_failure("Failed to submit job", &e);
                Ok(exit_code::FATAL)
            }
        }
    }
}
