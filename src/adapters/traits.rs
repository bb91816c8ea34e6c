//! Job sink abstraction
//!
//! This module defines the trait that generation back-ends implement to
//! receive prepared jobs.

use crate::core::generation::GenerationJob;
use crate::domain::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Acknowledgement returned by a sink for a submitted job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobReceipt {
    pub job_id: Uuid,

    /// Where the job ended up (a file path, a queue name...)
    pub location: String,

    pub accepted_at: DateTime<Utc>,

    /// Whether the job was only logged and not delivered
    pub dry_run: bool,
}

/// Destination for generation jobs
///
/// A sink receives a job whose blueprint has already been validated and
/// reconciled; it must forward the blueprint unmodified.
#[async_trait]
pub trait JobSink: Send + Sync {
    /// Submit a prepared job
    ///
    /// # Errors
    ///
    /// Returns an error if the job cannot be delivered.
    async fn submit(&self, job: &GenerationJob) -> Result<JobReceipt>;

    /// Short name used in logs
    fn name(&self) -> &str;
}
