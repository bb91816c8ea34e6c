//! External system integrations for paperplan.
//!
//! - [`traits`] - The [`JobSink`] interface to a generation service
//! - [`directory`] - A sink that writes jobs to a local directory
//! - [`factory`] - Builds the configured sink
//!
//! # Design Pattern
//!
//! Sinks follow the **Adapter Pattern**: the engine only ever sees the
//! [`JobSink`] trait, so a networked generation service can replace the
//! directory sink without touching the core.
//!
//! ```rust,no_run
//! use paperplan::adapters::{create_sink, JobSink};
//! use paperplan::config::GenerationConfig;
//! use paperplan::core::generation::GenerationJob;
//! use paperplan::domain::BlueprintBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let input = BlueprintBuilder::new("general").type_count("mcq", 20).build();
//! let job = GenerationJob::prepare(&input)?;
//!
//! let sink = create_sink(&GenerationConfig::default())?;
//! let receipt = sink.submit(&job).await?;
//! println!("Job stored at {}", receipt.location);
//! # Ok(())
//! # }
//! ```

pub mod directory;
pub mod factory;
pub mod traits;

pub use directory::DirectorySink;
pub use factory::create_sink;
pub use traits::{JobReceipt, JobSink};
