//! Vocabulary selection
//!
//! Picks exactly one type vocabulary for a blueprint. When the exam domain has
//! a domain-specific vocabulary and the caller used it, those counts replace the
//! generic ones wholesale; the two are never merged.

use crate::domain::{TypeCount, ValidatedBlueprint, VocabularyKind};

use super::warnings::{Diagnostic, WarningCollector};

/// Which vocabulary the canonical type counts came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    DomainSpecific,
    Generic,
    /// Neither vocabulary carried a positive count
    Untyped,
}

/// Canonical type counts plus the vocabulary they were taken from
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSelection {
    pub counts: TypeCount,
    pub vocabulary: Vocabulary,
}

impl TypeSelection {
    pub fn is_untyped(&self) -> bool {
        self.vocabulary == Vocabulary::Untyped
    }

    /// Sum of the canonical counts
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, c| acc.saturating_add(*c))
    }
}

fn positive_only(counts: &TypeCount) -> TypeCount {
    counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(code, count)| (code.clone(), *count))
        .collect()
}

/// Selects the canonical type counts for a blueprint
pub fn normalize(
    blueprint: &ValidatedBlueprint,
    collector: &mut WarningCollector,
) -> TypeSelection {
    let domain = blueprint.domain;
    let generic = positive_only(&blueprint.by_type);
    let domain_specific = positive_only(&blueprint.by_type_domain);

    let selection = if domain.has_domain_vocabulary() && !domain_specific.is_empty() {
        if !generic.is_empty() {
            collector.push(Diagnostic::GenericDiscarded {
                codes: generic.keys().cloned().collect(),
            });
        }
        TypeSelection {
            counts: domain_specific,
            vocabulary: Vocabulary::DomainSpecific,
        }
    } else {
        let selection = if generic.is_empty() {
            collector.push(Diagnostic::Untyped);
            TypeSelection {
                counts: TypeCount::new(),
                vocabulary: Vocabulary::Untyped,
            }
        } else {
            TypeSelection {
                counts: generic,
                vocabulary: Vocabulary::Generic,
            }
        };
        if !domain_specific.is_empty() {
            collector.push(Diagnostic::DomainCountsIgnored { domain });
        }
        selection
    };

    let kind = match selection.vocabulary {
        Vocabulary::DomainSpecific => Some(VocabularyKind::DomainSpecific),
        Vocabulary::Generic => Some(VocabularyKind::Generic),
        Vocabulary::Untyped => None,
    };
    if let Some(kind) = kind {
        for code in selection.counts.keys() {
            if !domain.recognizes(kind, code) {
                collector.push(Diagnostic::UnrecognizedType {
                    code: code.clone(),
                    vocabulary: kind,
                    domain,
                });
            }
        }
    }

    tracing::debug!(
        domain = %domain,
        vocabulary = ?selection.vocabulary,
        types = selection.counts.len(),
        "Selected type vocabulary"
    );

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlueprintBuilder, TypeCode};

    fn code(s: &str) -> TypeCode {
        TypeCode::new(s).unwrap()
    }

    fn run(builder: BlueprintBuilder) -> (TypeSelection, Vec<String>) {
        let blueprint = builder.build().validate().unwrap();
        let mut collector = WarningCollector::new();
        let selection = normalize(&blueprint, &mut collector);
        (selection, collector.into_warnings())
    }

    #[test]
    fn test_domain_vocabulary_replaces_generic() {
        let (selection, warnings) = run(BlueprintBuilder::new("board")
            .domain_type_count("single_correct", 5)
            .domain_type_count("short2", 3)
            .type_count("mcq", 10));

        assert_eq!(selection.vocabulary, Vocabulary::DomainSpecific);
        assert_eq!(selection.counts.len(), 2);
        assert!(!selection.counts.contains_key(&code("mcq")));
        assert_eq!(selection.total(), 8);
        assert_eq!(
            warnings,
            vec!["generic type counts discarded in favour of the domain-specific breakdown (mcq)"]
        );
    }

    #[test]
    fn test_zero_domain_counts_fall_back_to_generic() {
        let (selection, warnings) = run(BlueprintBuilder::new("board")
            .domain_type_count("short2", 0)
            .type_count("mcq", 10));

        assert_eq!(selection.vocabulary, Vocabulary::Generic);
        assert_eq!(selection.counts.get(&code("mcq")), Some(&10));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_domain_counts_ignored_without_domain_vocabulary() {
        let (selection, warnings) = run(BlueprintBuilder::new("general")
            .domain_type_count("short2", 3)
            .type_count("long", 2));

        assert_eq!(selection.vocabulary, Vocabulary::Generic);
        assert_eq!(
            warnings,
            vec!["domain-specific type counts ignored: domain 'general' has no domain-specific vocabulary"]
        );
    }

    #[test]
    fn test_untyped_when_both_empty() {
        let (selection, warnings) = run(BlueprintBuilder::new("general").total_questions(10));

        assert!(selection.is_untyped());
        assert!(selection.counts.is_empty());
        assert_eq!(warnings, vec!["no question-type breakdown provided"]);
    }

    #[test]
    fn test_zero_counts_dropped_from_canonical() {
        let (selection, _) = run(BlueprintBuilder::new("general")
            .type_count("mcq", 10)
            .type_count("long", 0));

        assert_eq!(selection.counts.len(), 1);
        assert!(!selection.counts.contains_key(&code("long")));
    }

    #[test]
    fn test_unrecognized_codes_flagged() {
        let (selection, warnings) = run(BlueprintBuilder::new("general")
            .type_count("essay", 2)
            .type_count("mcq", 5));

        assert_eq!(selection.counts.len(), 2);
        assert_eq!(
            warnings,
            vec!["type 'essay' is not part of the generic vocabulary for domain 'general'"]
        );
    }
}
