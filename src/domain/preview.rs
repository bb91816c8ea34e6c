//! Preview result types
//!
//! A [`PreviewResult`] is what the engine hands back for a blueprint. The same
//! value is shown to a user as a preview and passed, unmodified, to the
//! generation job.

use serde::{Deserialize, Serialize};

use super::blueprint::{DifficultyCount, MarksSchedule, SectionSpec, TypeCount};

/// Outcome of reconciling a blueprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewResult {
    /// False only when no count source could establish a total
    pub valid: bool,

    pub totals: Totals,

    /// Estimated or requested duration in minutes
    pub duration_estimate: u64,

    /// Ordered, de-duplicated diagnostics
    pub warnings: Vec<String>,

    pub normalized_blueprint: NormalizedBlueprint,
}

/// Derived totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total_questions: u64,
    pub total_marks: u64,
}

/// Canonical, self-describing blueprint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBlueprint {
    /// Canonical type counts (one vocabulary only, zero entries dropped)
    pub by_type: TypeCount,
    /// Difficulty counts as given
    pub by_difficulty: DifficultyCount,
    /// Sections as given
    pub sections: Vec<SectionSpec>,
    /// Resolved marks for every type in `by_type`
    pub marks: MarksSchedule,
}

impl PreviewResult {
    /// Whether any diagnostics were attached
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Formats the result as a human-readable report
    pub fn format_summary(&self) -> String {
        let mut summary = String::new();
        if self.valid {
            summary.push_str("✅ Blueprint is usable\n");
        } else {
            summary.push_str("❌ Blueprint total could not be determined\n");
        }
        summary.push_str(&format!(
            "  Total questions: {}\n",
            self.totals.total_questions
        ));
        summary.push_str(&format!("  Total marks: {}\n", self.totals.total_marks));
        summary.push_str(&format!(
            "  Duration estimate: {} min\n",
            self.duration_estimate
        ));

        if !self.normalized_blueprint.by_type.is_empty() {
            summary.push_str("\n  Type breakdown:\n");
            for (code, count) in &self.normalized_blueprint.by_type {
                let marks = self
                    .normalized_blueprint
                    .marks
                    .get(code)
                    .copied()
                    .unwrap_or_default();
                summary.push_str(&format!(
                    "    {code}: {count} × {marks} marks = {}\n",
                    count.saturating_mul(marks)
                ));
            }
        }

        if !self.normalized_blueprint.sections.is_empty() {
            summary.push_str("\n  Sections:\n");
            for (index, section) in self.normalized_blueprint.sections.iter().enumerate() {
                summary.push_str(&format!(
                    "    {}: {} questions\n",
                    section.label(index),
                    section.count
                ));
            }
        }

        if self.has_warnings() {
            summary.push_str("\n⚠️  Warnings:\n");
            for warning in &self.warnings {
                summary.push_str(&format!("    - {warning}\n"));
            }
        }

        summary
    }
}
