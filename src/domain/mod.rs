//! Domain models and types for paperplan.
//!
//! This module contains the plain value types the engine works on. Nothing here
//! performs I/O apart from [`load_blueprint`], which reads a blueprint file.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Code newtypes** ([`TypeCode`], [`DifficultyCode`])
//! - **Exam domains** ([`ExamDomain`]) with their vocabulary, marks and timing tables
//! - **Blueprint input** ([`BlueprintInput`], [`SectionInput`]) and its validated form
//!   ([`ValidatedBlueprint`], [`SectionSpec`])
//! - **Preview output** ([`PreviewResult`], [`Totals`], [`NormalizedBlueprint`])
//! - **Error types** ([`PaperplanError`], [`StructuralError`]) and the [`Result`] alias
//!
//! # Builder Pattern
//!
//! ```rust
//! use paperplan::domain::{BlueprintBuilder, SectionInput};
//!
//! let input = BlueprintBuilder::new("board")
//!     .domain_type_count("short2", 3)
//!     .section(SectionInput::new("A", 3).types(["short2"]))
//!     .duration_minutes(30)
//!     .build();
//! assert!(input.validate().is_ok());
//! ```

pub mod blueprint;
pub mod codes;
pub mod errors;
pub mod exam_domain;
pub mod preview;
pub mod result;

// Re-export commonly used types for convenience
pub use blueprint::{
    load_blueprint, BlueprintBuilder, BlueprintFormat, BlueprintInput, DifficultyCount,
    MarksSchedule, SectionInput, SectionSpec, TypeCount, ValidatedBlueprint,
};
pub use codes::{DifficultyCode, TypeCode};
pub use errors::{PaperplanError, StructuralError};
pub use exam_domain::{DomainProfile, ExamDomain, TypeSpec, VocabularyKind};
pub use preview::{NormalizedBlueprint, PreviewResult, Totals};
pub use result::Result;
