// Paperplan - Exam blueprint reconciliation engine
// Copyright (c) 2025 Paperplan Contributors
// Licensed under the MIT License

//! # Paperplan - Exam blueprint reconciliation
//!
//! Paperplan turns a loosely specified exam blueprint (question totals, type
//! breakdowns, difficulty splits, sections, marks and a duration) into one
//! self-consistent plan that a question-generation service can act on.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Validating** blueprints and rejecting structurally malformed input
//! - **Normalizing** type counts to a single vocabulary per exam domain
//! - **Reconciling** competing question totals under a fixed precedence
//! - **Resolving** marks and estimating the paper duration
//! - **Handing off** valid previews as generation jobs
//!
//! ## Architecture
//!
//! Paperplan follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (preview engine, fingerprints, generation jobs)
//! - [`adapters`] - Job sinks for the generation hand-off
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use paperplan::core::preview::preview;
//! use paperplan::domain::{BlueprintBuilder, SectionInput};
//!
//! let input = BlueprintBuilder::new("general")
//!     .total_questions(20)
//!     .type_count("mcq", 10)
//!     .type_count("short", 5)
//!     .section(SectionInput::new("", 20))
//!     .build();
//!
//! let result = preview(&input).unwrap();
//! assert_eq!(result.totals.total_questions, 20);
//! assert!(result
//!     .warnings
//!     .iter()
//!     .any(|w| w == "type-count sum (15) differs from total_questions (20)"));
//! ```
//!
//! ## Error Handling
//!
//! Structural problems (unknown domain, negative counts, malformed sections)
//! fail with [`domain::PaperplanError::Structural`]. Everything else is a
//! warning on the [`domain::PreviewResult`]:
//!
//! ```rust
//! use paperplan::core::preview::preview;
//! use paperplan::domain::{BlueprintBuilder, PaperplanError};
//!
//! let input = BlueprintBuilder::new("general").type_count("mcq", -3).build();
//! assert!(matches!(preview(&input), Err(PaperplanError::Structural(_))));
//! ```
//!
//! ## Logging
//!
//! Paperplan uses structured logging with the `tracing` crate. Engine stages
//! emit `debug` events; set `RUST_LOG=paperplan=debug` to see them.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
