//! Generation hand-off
//!
//! A [`GenerationJob`] wraps a preview, unmodified, together with the
//! identifiers a question-selection service needs. Jobs are only prepared from
//! valid previews; the preview that a user saw is exactly what gets generated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::fingerprint::fingerprint;
use super::preview::preview;
use crate::domain::{BlueprintInput, PaperplanError, PreviewResult, Result};

/// A blueprint ready to be handed to a generation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationJob {
    pub job_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    /// SHA-256 fingerprint of `blueprint`
    pub fingerprint: String,
    pub blueprint: PreviewResult,
}

impl GenerationJob {
    /// Previews the input and wraps the result in a new job
    ///
    /// # Errors
    ///
    /// Returns a structural error if the input is malformed, or
    /// [`PaperplanError::Generation`] if no question total could be established.
    pub fn prepare(input: &BlueprintInput) -> Result<Self> {
        let result = preview(input)?;
        Self::from_preview(result)
    }

    /// Wraps an existing preview in a new job
    ///
    /// # Errors
    ///
    /// Returns [`PaperplanError::Generation`] for an invalid preview.
    pub fn from_preview(blueprint: PreviewResult) -> Result<Self> {
        if !blueprint.valid {
            return Err(PaperplanError::Generation(format!(
                "blueprint is not usable: {}",
                blueprint.warnings.join("; ")
            )));
        }

        let job = Self {
            job_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            fingerprint: fingerprint(&blueprint)?,
            blueprint,
        };

        tracing::info!(
            job_id = %job.job_id,
            fingerprint = %job.fingerprint,
            total_questions = job.blueprint.totals.total_questions,
            "Prepared generation job"
        );

        Ok(job)
    }

    /// File name used when the job is persisted
    pub fn file_name(&self) -> String {
        format!("{}.json", self.job_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BlueprintBuilder;

    #[test]
    fn test_prepare_wraps_preview_unmodified() {
        let input = BlueprintBuilder::new("competitive")
            .domain_type_count("integer", 10)
            .build();

        let job = GenerationJob::prepare(&input).unwrap();
        assert_eq!(job.blueprint, preview(&input).unwrap());
        assert_eq!(job.fingerprint, fingerprint(&job.blueprint).unwrap());
        assert_eq!(job.file_name(), format!("{}.json", job.job_id));
    }

    #[test]
    fn test_prepare_refuses_undetermined_total() {
        let input = BlueprintBuilder::new("general").build();

        match GenerationJob::prepare(&input) {
            Err(PaperplanError::Generation(msg)) => {
                assert!(msg.contains("cannot determine total question count"))
            }
            other => panic!("expected generation error, got {other:?}"),
        }
    }

    #[test]
    fn test_prepare_propagates_structural_errors() {
        let input = BlueprintBuilder::new("olympiad").type_count("mcq", 1).build();
        assert!(matches!(
            GenerationJob::prepare(&input),
            Err(PaperplanError::Structural(_))
        ));
    }

    #[test]
    fn test_jobs_get_distinct_ids() {
        let input = BlueprintBuilder::new("general").type_count("mcq", 3).build();
        let a = GenerationJob::prepare(&input).unwrap();
        let b = GenerationJob::prepare(&input).unwrap();

        assert_ne!(a.job_id, b.job_id);
        assert_eq!(a.fingerprint, b.fingerprint);
    }
}
