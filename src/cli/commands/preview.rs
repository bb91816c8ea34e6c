//! Preview command implementation
//!
//! Previews each blueprint file on its own tokio task, bounded by
//! `preview.max_concurrency`, and prints the results in the order the files
//! were given.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde_json::json;
use tokio::sync::Semaphore;

use crate::cli::{exit_code, report_failure};
use crate::config::{load_config_or_default, OutputFormat};
use crate::core::preview::preview;
use crate::domain::{BlueprintFormat, BlueprintInput, PaperplanError, PreviewResult, Result};
use crate::log_preview_summary;

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Blueprint files (.json or .toml)
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Output format (text or json); defaults to preview.format from config
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Preview outcome for one file
#[derive(Debug)]
pub struct FileOutcome {
    pub source: String,
    pub result: Result<PreviewResult>,
}

impl FileOutcome {
    fn exit_code(&self) -> i32 {
        match &self.result {
            Ok(result) if result.valid => exit_code::OK,
            Ok(_) => exit_code::UNDETERMINED,
            Err(_) => exit_code::INPUT_ERROR,
        }
    }
}

impl PreviewArgs {
    /// Execute the preview command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(files = self.files.len(), "Starting preview command");

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                report_failure("Failed to load configuration file", &e);
                return Ok(exit_code::INPUT_ERROR);
            }
        };
        let format = self.format.unwrap_or(config.preview.format);

        let outcomes = preview_files(&self.files, config.preview.max_concurrency).await?;

        match format {
            OutputFormat::Text => print_text(&outcomes),
            OutputFormat::Json => print_json(&outcomes)?,
        }

        Ok(combined_exit_code(&outcomes))
    }
}

/// Previews files concurrently, returning outcomes in input order
pub async fn preview_files(
    files: &[String],
    max_concurrency: usize,
) -> anyhow::Result<Vec<FileOutcome>> {
    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));
    let mut handles = Vec::with_capacity(files.len());

    for file in files {
        let semaphore = Arc::clone(&semaphore);
        let path = PathBuf::from(file);
        handles.push(tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| PaperplanError::Other(format!("Preview scheduler closed: {e}")))?;
            preview_file(path).await
        }));
    }

    let mut outcomes = Vec::with_capacity(files.len());
    for (file, handle) in files.iter().zip(handles) {
        let result = handle.await?;
        match &result {
            Ok(preview) => {
                log_preview_summary!(file, preview);
            }
            Err(e) => tracing::warn!(source = %file, error = %e, "Blueprint rejected"),
        }
        outcomes.push(FileOutcome {
            source: file.clone(),
            result,
        });
    }

    Ok(outcomes)
}

async fn preview_file(path: PathBuf) -> Result<PreviewResult> {
    let format = BlueprintFormat::from_path(&path)?;
    let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
        PaperplanError::Io(format!("Failed to read blueprint {}: {e}", path.display()))
    })?;
    let input = BlueprintInput::parse(&contents, format)?;
    preview(&input)
}

/// Errors win over undetermined totals, which win over success
fn combined_exit_code(outcomes: &[FileOutcome]) -> i32 {
    let codes: Vec<i32> = outcomes.iter().map(FileOutcome::exit_code).collect();
    if codes.contains(&exit_code::INPUT_ERROR) {
        exit_code::INPUT_ERROR
    } else if codes.contains(&exit_code::UNDETERMINED) {
        exit_code::UNDETERMINED
    } else {
        exit_code::OK
    }
}

fn print_text(outcomes: &[FileOutcome]) {
    for outcome in outcomes {
        println!("📄 {}", outcome.source);
        match &outcome.result {
            Ok(result) => print!("{}", result.format_summary()),
            Err(e) => report_failure("Blueprint rejected", e),
        }
        println!();
    }
}

/// A single file prints the bare preview; several print an array of entries
fn print_json(outcomes: &[FileOutcome]) -> anyhow::Result<()> {
    if let [single] = outcomes {
        match &single.result {
            Ok(result) => println!("{}", serde_json::to_string_pretty(result)?),
            Err(e) => {
                let entry = json!({ "error": e.to_string() });
                println!("{}", serde_json::to_string_pretty(&entry)?);
            }
        }
        return Ok(());
    }

    let entries: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(result) => json!({ "source": outcome.source, "preview": result }),
            Err(e) => json!({ "source": outcome.source, "error": e.to_string() }),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
