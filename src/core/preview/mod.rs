//! Blueprint preview engine
//!
//! Turns a [`BlueprintInput`] into a [`PreviewResult`] by running four stages
//! in a fixed order, all feeding one [`WarningCollector`]:
//!
//! 1. [`normalizer`] picks one type vocabulary and produces the canonical counts
//! 2. [`reconciler`] establishes the question total and reports disagreements
//! 3. [`marks`] resolves marks per type and totals them
//! 4. [`duration`] honours or estimates the paper duration
//!
//! The engine is synchronous and holds no state; the same input always yields
//! the same result.
//!
//! # Example
//!
//! ```rust
//! use paperplan::core::preview::preview;
//! use paperplan::domain::BlueprintBuilder;
//!
//! let input = BlueprintBuilder::new("general")
//!     .type_count("mcq", 10)
//!     .type_count("short", 5)
//!     .marks("mcq", 1)
//!     .build();
//!
//! let result = preview(&input).unwrap();
//! assert!(result.valid);
//! assert_eq!(result.totals.total_marks, 25);
//! ```

pub mod duration;
pub mod marks;
pub mod normalizer;
pub mod reconciler;
pub mod warnings;

pub use duration::{estimate_duration, DURATION_TOLERANCE};
pub use marks::{resolve_marks, MarksOutcome, FALLBACK_MARKS};
pub use normalizer::{normalize, TypeSelection, Vocabulary};
pub use reconciler::{reconcile, Reconciliation};
pub use warnings::{CountSource, Diagnostic, DiagnosticKind, WarningCollector, UNDETERMINED_TOTAL};

use crate::domain::{
    BlueprintInput, MarksSchedule, NormalizedBlueprint, PreviewResult, Result, Totals,
    ValidatedBlueprint,
};

/// Validates and previews a blueprint
///
/// # Errors
///
/// Returns [`crate::domain::PaperplanError::Structural`] when the input fails
/// structural validation. Soft problems never fail; they are reported in
/// [`PreviewResult::warnings`].
pub fn preview(input: &BlueprintInput) -> Result<PreviewResult> {
    let blueprint = input.validate()?;
    Ok(preview_validated(&blueprint))
}

/// Previews a blueprint that already passed structural validation
pub fn preview_validated(blueprint: &ValidatedBlueprint) -> PreviewResult {
    let mut collector = WarningCollector::new();

    let selection = normalize(blueprint, &mut collector);
    let reconciliation = reconcile(blueprint, &selection, &mut collector);
    let marks = resolve_marks(
        blueprint.domain,
        &selection.counts,
        &blueprint.marks,
        &mut collector,
    );
    let duration = estimate_duration(
        blueprint.domain,
        &selection.counts,
        blueprint.duration_minutes,
        &mut collector,
    );

    let (totals, resolved_marks, collector) = if reconciliation.is_valid() {
        let totals = Totals {
            total_questions: reconciliation.total_questions,
            total_marks: marks.total_marks,
        };
        (totals, marks.resolved, collector)
    } else {
        // An undetermined total carries exactly one warning
        (
            Totals::default(),
            MarksSchedule::new(),
            WarningCollector::undetermined(),
        )
    };

    let result = PreviewResult {
        valid: reconciliation.is_valid(),
        totals,
        duration_estimate: duration,
        warnings: collector.into_warnings(),
        normalized_blueprint: NormalizedBlueprint {
            by_type: selection.counts,
            by_difficulty: blueprint.by_difficulty.clone(),
            sections: blueprint.sections.clone(),
            marks: resolved_marks,
        },
    };

    tracing::debug!(
        domain = %blueprint.domain,
        valid = result.valid,
        total_questions = result.totals.total_questions,
        total_marks = result.totals.total_marks,
        duration_estimate = result.duration_estimate,
        warnings = result.warnings.len(),
        "Blueprint preview assembled"
    );

    result
}
