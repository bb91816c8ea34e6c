//! Canonical total reconciliation
//!
//! Up to three sources can claim the question total: the explicit
//! `total_questions`, the sum of the canonical type counts and the sum of the
//! section counts. Only positive values are candidates. The first candidate in
//! that order wins outright; every other candidate that disagrees with it is
//! reported, never averaged in.

use crate::domain::{SectionSpec, ValidatedBlueprint};

use super::normalizer::TypeSelection;
use super::warnings::{CountSource, Diagnostic, WarningCollector};

/// Result of reconciling the competing totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub total_questions: u64,
    /// Source the total was taken from; `None` when undetermined
    pub source: Option<CountSource>,
}

impl Reconciliation {
    pub fn is_valid(&self) -> bool {
        self.source.is_some()
    }
}

fn sum<'a>(values: impl IntoIterator<Item = &'a u64>) -> u64 {
    values
        .into_iter()
        .fold(0u64, |acc, v| acc.saturating_add(*v))
}

/// Establishes the canonical total and reports disagreements
pub fn reconcile(
    blueprint: &ValidatedBlueprint,
    selection: &TypeSelection,
    collector: &mut WarningCollector,
) -> Reconciliation {
    let section_sum = sum(blueprint.sections.iter().map(|s| &s.count));
    let candidates: Vec<(CountSource, u64)> = [
        (CountSource::Explicit, blueprint.total_questions.unwrap_or(0)),
        (CountSource::TypeSum, selection.total()),
        (CountSource::SectionSum, section_sum),
    ]
    .into_iter()
    .filter(|(_, value)| *value > 0)
    .collect();

    let Some(&(canonical, total)) = candidates.first() else {
        tracing::debug!("No count source yields a total");
        collector.push(Diagnostic::UndeterminedTotal);
        return Reconciliation {
            total_questions: 0,
            source: None,
        };
    };

    for &(source, value) in &candidates[1..] {
        if value != total {
            collector.push(Diagnostic::CountMismatch {
                source,
                value,
                canonical,
                total,
            });
        }
    }

    if !blueprint.by_difficulty.is_empty() {
        let difficulty_sum = sum(blueprint.by_difficulty.values());
        if difficulty_sum != total {
            collector.push(Diagnostic::DifficultyMismatch {
                sum: difficulty_sum,
                canonical,
                total,
            });
        }
    }

    for (index, section) in blueprint.sections.iter().enumerate() {
        check_section(index, section, selection, collector);
    }

    tracing::debug!(
        total_questions = total,
        source = %canonical,
        candidates = candidates.len(),
        "Reconciled question total"
    );

    Reconciliation {
        total_questions: total,
        source: Some(canonical),
    }
}

fn check_section(
    index: usize,
    section: &SectionSpec,
    selection: &TypeSelection,
    collector: &mut WarningCollector,
) {
    if let Some(difficulty) = &section.difficulty {
        let difficulty_sum = sum(difficulty.values());
        if difficulty_sum != section.count {
            collector.push(Diagnostic::SectionDifficultyMismatch {
                section: section.label(index),
                sum: difficulty_sum,
                count: section.count,
            });
        }
    }

    if !selection.counts.is_empty()
        && !section.types.is_empty()
        && !section
            .types
            .iter()
            .any(|code| selection.counts.contains_key(code))
    {
        collector.push(Diagnostic::SectionTypesAbsent {
            section: section.label(index),
            types: section.types.iter().cloned().collect(),
        });
    }
}
