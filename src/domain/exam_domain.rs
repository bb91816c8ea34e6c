//! Exam domains and their per-type tables
//!
//! Every exam domain carries its own question-type vocabulary, default marks
//! and time allowances. All of that lives in one static [`DomainProfile`] per
//! variant, reached through [`ExamDomain::profile`], so no other module has to
//! branch on the domain name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::codes::TypeCode;
use super::errors::StructuralError;

/// Minutes per question assumed for a type no table knows about
pub const FALLBACK_MINUTES_PER_QUESTION: f64 = 2.0;

/// Closed set of supported exam domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamDomain {
    /// General-purpose papers using only the generic vocabulary
    General,
    /// School-board papers with marks-banded question categories
    Board,
    /// Competitive entrance papers with objective-format categories
    Competitive,
}

/// Static description of a single question type within a domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeSpec {
    /// Wire code of the type
    pub code: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Marks per question when the caller gives none
    pub default_marks: u64,
    /// Time allowance in minutes per question
    pub minutes_per_question: f64,
}

/// Per-domain tables
#[derive(Debug, Clone, Copy)]
pub struct DomainProfile {
    /// Generic vocabulary (`mcq` / `short` / `long` ...)
    pub generic: &'static [TypeSpec],
    /// Richer domain-specific vocabulary; empty when the domain has none
    pub domain_specific: &'static [TypeSpec],
}

/// Which vocabulary a lookup should consult
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyKind {
    /// The generic vocabulary
    Generic,
    /// The domain-specific vocabulary
    DomainSpecific,
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularyKind::Generic => write!(f, "generic"),
            VocabularyKind::DomainSpecific => write!(f, "domain-specific"),
        }
    }
}

const fn spec(
    code: &'static str,
    label: &'static str,
    default_marks: u64,
    minutes_per_question: f64,
) -> TypeSpec {
    TypeSpec {
        code,
        label,
        default_marks,
        minutes_per_question,
    }
}

static GENERAL: DomainProfile = DomainProfile {
    generic: &[
        spec("mcq", "Multiple choice", 1, 1.0),
        spec("short", "Short answer", 3, 3.0),
        spec("long", "Long answer", 5, 5.0),
        spec("true_false", "True / false", 1, 0.5),
        spec("fill_blank", "Fill in the blank", 1, 1.0),
    ],
    domain_specific: &[],
};

static BOARD: DomainProfile = DomainProfile {
    generic: &[
        spec("mcq", "Multiple choice", 1, 1.5),
        spec("short", "Short answer", 3, 4.0),
        spec("long", "Long answer", 5, 7.0),
        spec("true_false", "True / false", 1, 0.5),
        spec("fill_blank", "Fill in the blank", 1, 1.0),
    ],
    domain_specific: &[
        spec("single_correct", "Single correct option", 1, 1.5),
        spec("assertion_reason", "Assertion and reason", 1, 2.0),
        spec("short2", "Short answer (2 marks)", 2, 3.0),
        spec("short3", "Short answer (3 marks)", 3, 5.0),
        spec("long5", "Long answer (5 marks)", 5, 8.0),
        spec("case_based", "Case-based", 4, 8.0),
    ],
};

static COMPETITIVE: DomainProfile = DomainProfile {
    generic: &[
        spec("mcq", "Multiple choice", 4, 2.0),
        spec("short", "Short answer", 4, 3.0),
        spec("long", "Long answer", 4, 5.0),
        spec("true_false", "True / false", 4, 1.0),
        spec("fill_blank", "Fill in the blank", 4, 2.0),
    ],
    domain_specific: &[
        spec("single_correct", "Single correct option", 4, 2.0),
        spec("multi_correct", "Multiple correct options", 4, 3.0),
        spec("integer", "Integer answer", 4, 3.0),
        spec("matrix_match", "Matrix match", 8, 4.0),
        spec("comprehension", "Comprehension", 3, 3.0),
    ],
};

impl ExamDomain {
    /// All domains, in display order
    pub const ALL: [ExamDomain; 3] = [
        ExamDomain::General,
        ExamDomain::Board,
        ExamDomain::Competitive,
    ];

    /// Returns the canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            ExamDomain::General => "general",
            ExamDomain::Board => "board",
            ExamDomain::Competitive => "competitive",
        }
    }

    /// Returns the static tables for this domain
    pub fn profile(self) -> &'static DomainProfile {
        match self {
            ExamDomain::General => &GENERAL,
            ExamDomain::Board => &BOARD,
            ExamDomain::Competitive => &COMPETITIVE,
        }
    }

    /// Whether the domain exposes a domain-specific vocabulary
    pub fn has_domain_vocabulary(self) -> bool {
        !self.profile().domain_specific.is_empty()
    }

    /// Whether `code` belongs to the given vocabulary of this domain
    pub fn recognizes(self, kind: VocabularyKind, code: &TypeCode) -> bool {
        self.profile()
            .vocabulary(kind)
            .iter()
            .any(|t| t.code == code.as_str())
    }

    /// Default marks for a type, searching both vocabularies
    pub fn default_marks(self, code: &TypeCode) -> Option<u64> {
        self.profile().lookup(code).map(|t| t.default_marks)
    }

    /// Minutes per question for a type, or [`FALLBACK_MINUTES_PER_QUESTION`]
    pub fn minutes_per_question(self, code: &TypeCode) -> f64 {
        self.profile()
            .lookup(code)
            .map(|t| t.minutes_per_question)
            .unwrap_or(FALLBACK_MINUTES_PER_QUESTION)
    }
}

impl DomainProfile {
    /// Returns the requested vocabulary
    pub fn vocabulary(&self, kind: VocabularyKind) -> &'static [TypeSpec] {
        match kind {
            VocabularyKind::Generic => self.generic,
            VocabularyKind::DomainSpecific => self.domain_specific,
        }
    }

    // Domain-specific entries shadow generic ones with the same code.
    fn lookup(&self, code: &TypeCode) -> Option<&'static TypeSpec> {
        self.domain_specific
            .iter()
            .chain(self.generic.iter())
            .find(|t| t.code == code.as_str())
    }
}

impl fmt::Display for ExamDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExamDomain {
    type Err = StructuralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" | "default" | "standard" => Ok(ExamDomain::General),
            "board" | "school_board" | "cbse" => Ok(ExamDomain::Board),
            "competitive" | "entrance" | "jee" => Ok(ExamDomain::Competitive),
            _ => Err(StructuralError::UnknownDomain(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn code(s: &str) -> TypeCode {
        TypeCode::new(s).unwrap()
    }

    #[test_case("general", ExamDomain::General ; "canonical general")]
    #[test_case("Board", ExamDomain::Board ; "mixed case board")]
    #[test_case(" cbse ", ExamDomain::Board ; "board alias with padding")]
    #[test_case("jee", ExamDomain::Competitive ; "competitive alias")]
    fn test_domain_from_str(input: &str, expected: ExamDomain) {
        assert_eq!(input.parse::<ExamDomain>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_domain_is_structural() {
        let err = "astrology".parse::<ExamDomain>().unwrap_err();
        assert_eq!(err, StructuralError::UnknownDomain("astrology".to_string()));
    }

    #[test]
    fn test_general_has_no_domain_vocabulary() {
        assert!(!ExamDomain::General.has_domain_vocabulary());
        assert!(ExamDomain::Board.has_domain_vocabulary());
        assert!(ExamDomain::Competitive.has_domain_vocabulary());
    }

    #[test]
    fn test_default_marks_lookup() {
        assert_eq!(ExamDomain::General.default_marks(&code("short")), Some(3));
        assert_eq!(ExamDomain::Board.default_marks(&code("short2")), Some(2));
        assert_eq!(
            ExamDomain::Competitive.default_marks(&code("matrix_match")),
            Some(8)
        );
        assert_eq!(ExamDomain::General.default_marks(&code("essay")), None);
    }

    #[test]
    fn test_minutes_fall_back_for_unknown_types() {
        assert_eq!(ExamDomain::General.minutes_per_question(&code("long")), 5.0);
        assert_eq!(
            ExamDomain::General.minutes_per_question(&code("essay")),
            FALLBACK_MINUTES_PER_QUESTION
        );
    }

    #[test]
    fn test_recognizes_respects_vocabulary_kind() {
        let board = ExamDomain::Board;
        assert!(board.recognizes(VocabularyKind::DomainSpecific, &code("short2")));
        assert!(!board.recognizes(VocabularyKind::Generic, &code("short2")));
        assert!(board.recognizes(VocabularyKind::Generic, &code("mcq")));
    }

    #[test]
    fn test_domain_serializes_lowercase() {
        let json = serde_json::to_string(&ExamDomain::Competitive).unwrap();
        assert_eq!(json, "\"competitive\"");
    }
}
