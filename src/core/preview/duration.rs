//! Duration estimation
//!
//! The natural duration of a paper is the sum of each type's count times the
//! domain's minutes-per-question allowance. An explicit positive duration is
//! always honoured; the natural figure is then only used to warn when the
//! request looks too short.

use crate::domain::{ExamDomain, TypeCount};

use super::warnings::{Diagnostic, WarningCollector};

/// How far the natural duration may exceed an explicit one before warning
pub const DURATION_TOLERANCE: f64 = 0.5;

/// Sum of count × minutes-per-question over the canonical types
pub fn natural_minutes(domain: ExamDomain, counts: &TypeCount) -> f64 {
    counts
        .iter()
        .map(|(code, count)| *count as f64 * domain.minutes_per_question(code))
        .sum()
}

/// Resolves the duration estimate, in minutes, for a blueprint
pub fn estimate_duration(
    domain: ExamDomain,
    counts: &TypeCount,
    explicit: Option<u64>,
    collector: &mut WarningCollector,
) -> u64 {
    let natural = natural_minutes(domain, counts);

    let estimate = match explicit.filter(|minutes| *minutes > 0) {
        Some(requested) => {
            if natural > requested as f64 * (1.0 + DURATION_TOLERANCE) {
                collector.push(Diagnostic::DurationTooShort {
                    requested,
                    estimated: natural.round() as u64,
                });
            }
            requested
        }
        None => (natural.round() as u64).max(1),
    };

    tracing::debug!(
        estimate,
        natural_minutes = natural,
        explicit = explicit.is_some(),
        "Estimated duration"
    );

    estimate
}
