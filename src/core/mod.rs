//! Core business logic for paperplan.
//!
//! # Modules
//!
//! - [`preview`] - The reconciliation engine (normalize, reconcile, marks, duration)
//! - [`fingerprint`] - SHA-256 fingerprints of previews
//! - [`generation`] - Generation jobs built from valid previews
//!
//! # Workflow
//!
//! 1. **Validate**: Reject structurally malformed blueprints
//! 2. **Preview**: Produce a [`crate::domain::PreviewResult`] with warnings
//! 3. **Prepare**: Wrap a valid preview in a [`generation::GenerationJob`]
//! 4. **Submit**: Hand the job to a [`crate::adapters::JobSink`]
//!
//! # Example
//!
//! ```rust,no_run
//! use paperplan::adapters::create_sink;
//! use paperplan::config::GenerationConfig;
//! use paperplan::core::generation::GenerationJob;
//! use paperplan::domain::load_blueprint;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let input = load_blueprint("blueprint.json")?;
//! let job = GenerationJob::prepare(&input)?;
//!
//! let sink = create_sink(&GenerationConfig::default())?;
//! let receipt = sink.submit(&job).await?;
//! println!("Submitted {}", receipt.job_id);
//! # Ok(())
//! # }
//! ```

pub mod fingerprint;
pub mod generation;
pub mod preview;
