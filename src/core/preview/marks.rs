//! Marks resolution
//!
//! Every canonical type gets a marks-per-question value from the first tier
//! that has one: the caller's schedule (positive values only), then the exam
//! domain's default table, then [`FALLBACK_MARKS`]. Tiers below the caller's
//! schedule always leave a warning behind.

use std::collections::BTreeMap;

use crate::domain::{ExamDomain, MarksSchedule, TypeCode, TypeCount};

use super::warnings::{Diagnostic, WarningCollector};

/// Marks per question when neither the caller nor the domain provides one
pub const FALLBACK_MARKS: u64 = 1;

/// Fully resolved marks and the resulting paper total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarksOutcome {
    /// One entry per canonical type
    pub resolved: MarksSchedule,
    pub total_marks: u64,
}

/// Resolves marks for every canonical type and totals them
pub fn resolve_marks(
    domain: ExamDomain,
    counts: &TypeCount,
    requested: &BTreeMap<TypeCode, i64>,
    collector: &mut WarningCollector,
) -> MarksOutcome {
    let mut resolved = MarksSchedule::new();
    let mut total_marks = 0u64;

    for (code, count) in counts.iter().filter(|(_, count)| **count > 0) {
        let caller = requested
            .get(code)
            .copied()
            .filter(|marks| *marks > 0)
            .map(|marks| marks as u64);

        let marks = match (caller, domain.default_marks(code)) {
            (Some(marks), _) => marks,
            (None, Some(marks)) => {
                collector.push(Diagnostic::MarksDomainDefault {
                    code: code.clone(),
                    marks,
                });
                marks
            }
            (None, None) => {
                collector.push(Diagnostic::MarksFallback {
                    code: code.clone(),
                    domain,
                    marks: FALLBACK_MARKS,
                });
                FALLBACK_MARKS
            }
        };

        total_marks = total_marks.saturating_add(count.saturating_mul(marks));
        resolved.insert(code.clone(), marks);
    }

    tracing::debug!(
        total_marks,
        resolved_types = resolved.len(),
        "Resolved marks schedule"
    );

    MarksOutcome {
        resolved,
        total_marks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> TypeCode {
        TypeCode::new(s).unwrap()
    }

    fn counts(entries: &[(&str, u64)]) -> TypeCount {
        entries.iter().map(|(c, n)| (code(c), *n)).collect()
    }

    fn requested(entries: &[(&str, i64)]) -> BTreeMap<TypeCode, i64> {
        entries.iter().map(|(c, m)| (code(c), *m)).collect()
    }

    #[test]
    fn test_caller_marks_then_domain_default() {
        let mut collector = WarningCollector::new();
        let outcome = resolve_marks(
            ExamDomain::General,
            &counts(&[("mcq", 10), ("short", 5)]),
            &requested(&[("mcq", 1)]),
            &mut collector,
        );

        assert_eq!(outcome.total_marks, 25);
        assert_eq!(outcome.resolved.get(&code("short")), Some(&3));
        assert_eq!(
            collector.into_warnings(),
            vec!["marks for 'short' not specified; using domain default of 3"]
        );
    }

    #[test]
    fn test_last_resort_fallback() {
        let mut collector = WarningCollector::new();
        let outcome = resolve_marks(
            ExamDomain::General,
            &counts(&[("essay", 4)]),
            &BTreeMap::new(),
            &mut collector,
        );

        assert_eq!(outcome.total_marks, 4);
        assert_eq!(outcome.resolved.get(&code("essay")), Some(&FALLBACK_MARKS));
        assert_eq!(
            collector.into_warnings(),
            vec!["marks for 'essay' not specified and domain 'general' has no default; using fallback of 1"]
        );
    }

    #[test]
    fn test_non_positive_caller_marks_fall_through() {
        let mut collector = WarningCollector::new();
        let outcome = resolve_marks(
            ExamDomain::Competitive,
            &counts(&[("integer", 5)]),
            &requested(&[("integer", 0)]),
            &mut collector,
        );

        assert_eq!(outcome.resolved.get(&code("integer")), Some(&4));
        assert_eq!(outcome.total_marks, 20);
        assert_eq!(collector.diagnostics().len(), 1);
    }

    #[test]
    fn test_every_canonical_type_is_resolved() {
        let mut collector = WarningCollector::new();
        let canonical = counts(&[("single_correct", 5), ("short2", 3), ("mystery", 1)]);
        let outcome = resolve_marks(
            ExamDomain::Board,
            &canonical,
            &requested(&[("single_correct", 1)]),
            &mut collector,
        );

        assert_eq!(
            outcome.resolved.keys().collect::<Vec<_>>(),
            canonical.keys().collect::<Vec<_>>()
        );
        assert!(outcome.resolved.values().all(|m| *m > 0));
        assert_eq!(outcome.total_marks, 5 + 3 * 2 + 1);
    }

    #[test]
    fn test_marks_for_absent_types_are_ignored() {
        let mut collector = WarningCollector::new();
        let outcome = resolve_marks(
            ExamDomain::General,
            &counts(&[("mcq", 2)]),
            &requested(&[("mcq", 2), ("long", 10)]),
            &mut collector,
        );

        assert_eq!(outcome.resolved.len(), 1);
        assert_eq!(outcome.total_marks, 4);
        assert!(collector.diagnostics().is_empty());
    }
}
