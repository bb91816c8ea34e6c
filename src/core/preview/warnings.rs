//! Typed diagnostics and the warning collector
//!
//! Stages push [`Diagnostic`] values into a [`WarningCollector`] as they run.
//! The collector renders them to strings once, at assembly, dropping exact
//! duplicates while keeping first-occurrence order.

use std::collections::HashSet;
use std::fmt;

use crate::domain::{ExamDomain, TypeCode, VocabularyKind};

/// Exact text of the single warning attached to an undetermined total
pub const UNDETERMINED_TOTAL: &str = "cannot determine total question count";

/// One of the competing sources for the question total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSource {
    /// The caller's explicit `total_questions`
    Explicit,
    /// Sum of the canonical type counts
    TypeSum,
    /// Sum of the section counts
    SectionSum,
}

impl fmt::Display for CountSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountSource::Explicit => write!(f, "total_questions"),
            CountSource::TypeSum => write!(f, "type-count sum"),
            CountSource::SectionSum => write!(f, "section-count sum"),
        }
    }
}

/// Broad category of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// No question-type breakdown at all
    Untyped,
    /// Vocabulary selection discarded or could not place some counts
    VocabularyNotice,
    /// No total could be established
    UndeterminedTotal,
    /// Two count sources disagree
    SoftInconsistency,
    /// Marks came from a domain default or the last-resort fallback
    MarksFallbackUsed,
    /// Requested duration looks too short for the question load
    DurationTooShort,
}

/// A single non-fatal finding about a blueprint
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    Untyped,
    GenericDiscarded {
        codes: Vec<TypeCode>,
    },
    DomainCountsIgnored {
        domain: ExamDomain,
    },
    UnrecognizedType {
        code: TypeCode,
        vocabulary: VocabularyKind,
        domain: ExamDomain,
    },
    UndeterminedTotal,
    CountMismatch {
        source: CountSource,
        value: u64,
        canonical: CountSource,
        total: u64,
    },
    DifficultyMismatch {
        sum: u64,
        canonical: CountSource,
        total: u64,
    },
    SectionDifficultyMismatch {
        section: String,
        sum: u64,
        count: u64,
    },
    SectionTypesAbsent {
        section: String,
        types: Vec<TypeCode>,
    },
    MarksDomainDefault {
        code: TypeCode,
        marks: u64,
    },
    MarksFallback {
        code: TypeCode,
        domain: ExamDomain,
        marks: u64,
    },
    DurationTooShort {
        requested: u64,
        estimated: u64,
    },
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::Untyped => DiagnosticKind::Untyped,
            Diagnostic::GenericDiscarded { .. }
            | Diagnostic::DomainCountsIgnored { .. }
            | Diagnostic::UnrecognizedType { .. } => DiagnosticKind::VocabularyNotice,
            Diagnostic::UndeterminedTotal => DiagnosticKind::UndeterminedTotal,
            Diagnostic::CountMismatch { .. }
            | Diagnostic::DifficultyMismatch { .. }
            | Diagnostic::SectionDifficultyMismatch { .. }
            | Diagnostic::SectionTypesAbsent { .. } => DiagnosticKind::SoftInconsistency,
            Diagnostic::MarksDomainDefault { .. } | Diagnostic::MarksFallback { .. } => {
                DiagnosticKind::MarksFallbackUsed
            }
            Diagnostic::DurationTooShort { .. } => DiagnosticKind::DurationTooShort,
        }
    }
}

fn join_codes(codes: &[TypeCode]) -> String {
    codes
        .iter()
        .map(TypeCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Untyped => write!(f, "no question-type breakdown provided"),
            Diagnostic::GenericDiscarded { codes } => write!(
                f,
                "generic type counts discarded in favour of the domain-specific breakdown ({})",
                join_codes(codes)
            ),
            Diagnostic::DomainCountsIgnored { domain } => write!(
                f,
                "domain-specific type counts ignored: domain '{domain}' has no domain-specific vocabulary"
            ),
            Diagnostic::UnrecognizedType {
                code,
                vocabulary,
                domain,
            } => write!(
                f,
                "type '{code}' is not part of the {vocabulary} vocabulary for domain '{domain}'"
            ),
            Diagnostic::UndeterminedTotal => write!(f, "{UNDETERMINED_TOTAL}"),
            Diagnostic::CountMismatch {
                source,
                value,
                canonical,
                total,
            } => write!(f, "{source} ({value}) differs from {canonical} ({total})"),
            Diagnostic::DifficultyMismatch {
                sum,
                canonical,
                total,
            } => write!(
                f,
                "difficulty-count sum ({sum}) differs from {canonical} ({total})"
            ),
            Diagnostic::SectionDifficultyMismatch { section, sum, count } => write!(
                f,
                "section '{section}' difficulty sum ({sum}) differs from its count ({count})"
            ),
            Diagnostic::SectionTypesAbsent { section, types } => write!(
                f,
                "section '{section}' allows no type present in the type breakdown ({})",
                join_codes(types)
            ),
            Diagnostic::MarksDomainDefault { code, marks } => write!(
                f,
                "marks for '{code}' not specified; using domain default of {marks}"
            ),
            Diagnostic::MarksFallback {
                code,
                domain,
                marks,
            } => write!(
                f,
                "marks for '{code}' not specified and domain '{domain}' has no default; using fallback of {marks}"
            ),
            Diagnostic::DurationTooShort {
                requested,
                estimated,
            } => write!(
                f,
                "requested duration ({requested} min) may be too short for the question load (estimated {estimated} min)"
            ),
        }
    }
}

/// Ordered accumulator for diagnostics from every stage
#[derive(Debug, Default)]
pub struct WarningCollector {
    diagnostics: Vec<Diagnostic>,
}

impl WarningCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collector holding only the undetermined-total diagnostic
    pub fn undetermined() -> Self {
        Self {
            diagnostics: vec![Diagnostic::UndeterminedTotal],
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(kind = ?diagnostic.kind(), warning = %diagnostic, "Blueprint diagnostic");
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn contains_kind(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind() == kind)
    }

    /// Renders to strings, keeping the first occurrence of each exact text
    pub fn into_warnings(self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.diagnostics
            .into_iter()
            .map(|d| d.to_string())
            .filter(|text| seen.insert(text.clone()))
            .collect()
    }
}
