//! Directory-backed job sink
//!
//! Writes each job as pretty-printed JSON to `<output_dir>/<job_id>.json`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;

use super::traits::{JobReceipt, JobSink};
use crate::core::generation::GenerationJob;
use crate::domain::{PaperplanError, Result};

/// Sink that persists jobs to a local directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    output_dir: PathBuf,
    dry_run: bool,
}

impl DirectorySink {
    pub fn new(output_dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            dry_run,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn job_path(&self, job: &GenerationJob) -> PathBuf {
        self.output_dir.join(job.file_name())
    }
}

#[async_trait]
impl JobSink for DirectorySink {
    async fn submit(&self, job: &GenerationJob) -> Result<JobReceipt> {
        let path = self.job_path(job);

        if self.dry_run {
            tracing::info!(
                job_id = %job.job_id,
                path = %path.display(),
                "Dry run: skipping job write"
            );
        } else {
            tokio::fs::create_dir_all(&self.output_dir)
                .await
                .map_err(|e| {
                    PaperplanError::Io(format!(
                        "Failed to create job directory {}: {e}",
                        self.output_dir.display()
                    ))
                })?;

            let body = serde_json::to_vec_pretty(job)?;
            tokio::fs::write(&path, body).await.map_err(|e| {
                PaperplanError::Io(format!("Failed to write job {}: {e}", path.display()))
            })?;

            tracing::info!(
                job_id = %job.job_id,
                path = %path.display(),
                "Job written"
            );
        }

        Ok(JobReceipt {
            job_id: job.job_id,
            location: path.display().to_string(),
            accepted_at: Utc::now(),
            dry_run: self.dry_run,
        })
    }

    fn name(&self) -> &str {
        "directory"
    }
}
