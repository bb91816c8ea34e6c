//! Blueprint input and structural validation
//!
//! [`BlueprintInput`] is the wire form of a paper blueprint exactly as a caller
//! sends it: counts are signed so that negative values survive deserialization
//! and can be rejected here, before any normalization runs.
//! [`BlueprintInput::validate`] turns it into a [`ValidatedBlueprint`] with
//! typed codes and unsigned counts, or fails with a [`StructuralError`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use super::codes::{DifficultyCode, TypeCode};
use super::errors::{PaperplanError, StructuralError};
use super::exam_domain::ExamDomain;
use super::result::Result;

/// Canonical mapping from type code to question count
pub type TypeCount = BTreeMap<TypeCode, u64>;

/// Mapping from difficulty code to question count
pub type DifficultyCount = BTreeMap<DifficultyCode, u64>;

/// Mapping from type code to marks per question
pub type MarksSchedule = BTreeMap<TypeCode, u64>;

/// Blueprint request as received from a caller
///
/// Unknown keys are rejected so a misspelled field never reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlueprintInput {
    /// Exam domain name (see [`ExamDomain`] for accepted names)
    pub domain: String,

    /// Explicit question total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<i64>,

    /// Counts in the generic vocabulary
    #[serde(default)]
    pub by_type: BTreeMap<String, i64>,

    /// Counts in the domain-specific vocabulary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_type_domain: Option<BTreeMap<String, i64>>,

    /// Counts per difficulty bucket
    #[serde(default)]
    pub by_difficulty: BTreeMap<String, i64>,

    /// Paper sections
    #[serde(default)]
    pub sections: Vec<SectionInput>,

    /// Caller-supplied marks per question, possibly partial
    #[serde(default)]
    pub marks: BTreeMap<String, i64>,

    /// Requested duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
}

/// Section entry as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionInput {
    #[serde(default)]
    pub name: String,

    /// Type codes allowed in this section
    #[serde(default)]
    pub types: Vec<String>,

    /// Target question count; an entry without one is malformed
    #[serde(default)]
    pub count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<BTreeMap<String, i64>>,

    /// Fraction of a question's marks deducted for a wrong answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_marking: Option<f64>,
}

impl SectionInput {
    /// Creates a section with a name and target count
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            count: Some(count),
            ..Default::default()
        }
    }

    /// Sets the allowed type codes
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a difficulty bucket to the section's sub-distribution
    pub fn difficulty(mut self, code: impl Into<String>, count: i64) -> Self {
        self.difficulty
            .get_or_insert_with(BTreeMap::new)
            .insert(code.into(), count);
        self
    }

    /// Sets the negative-marking factor
    pub fn negative_marking(mut self, factor: f64) -> Self {
        self.negative_marking = Some(factor);
        self
    }
}

/// Validated section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub name: String,
    pub types: BTreeSet<TypeCode>,
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<DifficultyCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_marking: Option<f64>,
}

impl SectionSpec {
    /// Label used in diagnostics; unnamed sections are numbered from 1
    pub fn label(&self, index: usize) -> String {
        if self.name.trim().is_empty() {
            format!("#{}", index + 1)
        } else {
            self.name.clone()
        }
    }
}

/// Blueprint that passed structural validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBlueprint {
    pub domain: ExamDomain,
    /// Explicit total; zero is normalized to `None`
    pub total_questions: Option<u64>,
    pub by_type: TypeCount,
    pub by_type_domain: TypeCount,
    pub by_difficulty: DifficultyCount,
    pub sections: Vec<SectionSpec>,
    /// Raw caller marks; non-positive values are kept and skipped during resolution
    pub marks: BTreeMap<TypeCode, i64>,
    /// Explicit duration; non-positive values are normalized to `None`
    pub duration_minutes: Option<u64>,
}

impl BlueprintInput {
    /// Runs every structural check and converts the input into typed values
    ///
    /// Checks run in a fixed order (domain, total, type counts, domain type
    /// counts, difficulty counts, sections, marks) and the first failure is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns a [`StructuralError`] for an unknown domain, any negative count,
    /// a blank code, or a malformed section entry.
    pub fn validate(&self) -> std::result::Result<ValidatedBlueprint, StructuralError> {
        let domain: ExamDomain = self.domain.parse()?;

        let total_questions = match self.total_questions {
            Some(v) => Some(non_negative("total_questions", v)?).filter(|v| *v > 0),
            None => None,
        };

        let by_type = count_map("by_type", &self.by_type, TypeCode::new)?;
        let by_type_domain = match &self.by_type_domain {
            Some(map) => count_map("by_type_domain", map, TypeCode::new)?,
            None => TypeCount::new(),
        };
        let by_difficulty = count_map("by_difficulty", &self.by_difficulty, DifficultyCode::new)?;

        let mut sections = Vec::with_capacity(self.sections.len());
        let mut seen_names = BTreeSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            let spec = validate_section(index, section)?;
            if !spec.name.trim().is_empty() && !seen_names.insert(spec.name.clone()) {
                return Err(StructuralError::malformed_section(
                    index,
                    format!("duplicate section name '{}'", spec.name),
                ));
            }
            sections.push(spec);
        }

        let mut marks = BTreeMap::new();
        for (code, value) in &self.marks {
            let code = TypeCode::new(code.as_str()).map_err(|_| StructuralError::BlankCode {
                field: "marks".to_string(),
            })?;
            marks.insert(code, *value);
        }

        Ok(ValidatedBlueprint {
            domain,
            total_questions,
            by_type,
            by_type_domain,
            by_difficulty,
            sections,
            marks,
            duration_minutes: self
                .duration_minutes
                .filter(|d| *d > 0)
                .map(|d| d as u64),
        })
    }

    /// Parses a blueprint from a string in the given format
    pub fn parse(contents: &str, format: BlueprintFormat) -> Result<Self> {
        let input = match format {
            BlueprintFormat::Json => serde_json::from_str(contents)?,
            BlueprintFormat::Toml => toml::from_str(contents).map_err(|e| {
                PaperplanError::Serialization(format!("Invalid TOML blueprint: {e}"))
            })?,
        };
        Ok(input)
    }
}

fn non_negative(field: &str, value: i64) -> std::result::Result<u64, StructuralError> {
    u64::try_from(value).map_err(|_| StructuralError::negative(field, value))
}

fn count_map<K: Ord>(
    field: &str,
    raw: &BTreeMap<String, i64>,
    make_key: impl Fn(String) -> std::result::Result<K, String>,
) -> std::result::Result<BTreeMap<K, u64>, StructuralError> {
    let mut out = BTreeMap::new();
    for (code, value) in raw {
        let key = make_key(code.clone()).map_err(|_| StructuralError::BlankCode {
            field: field.to_string(),
        })?;
        out.insert(key, non_negative(&format!("{field}.{code}"), *value)?);
    }
    Ok(out)
}

fn validate_section(
    index: usize,
    section: &SectionInput,
) -> std::result::Result<SectionSpec, StructuralError> {
    let prefix = format!("sections[{index}]");
    let count = section
        .count
        .ok_or_else(|| StructuralError::malformed_section(index, "missing count"))?;
    let count = non_negative(&format!("{prefix}.count"), count)?;

    let difficulty = match &section.difficulty {
        Some(map) => Some(count_map(
            &format!("{prefix}.difficulty"),
            map,
            DifficultyCode::new,
        )?),
        None => None,
    };

    let mut types = BTreeSet::new();
    for code in &section.types {
        let code = TypeCode::new(code.as_str())
            .map_err(|_| StructuralError::malformed_section(index, "blank type code"))?;
        types.insert(code);
    }

    if let Some(factor) = section.negative_marking {
        if !factor.is_finite() || factor < 0.0 {
            return Err(StructuralError::malformed_section(
                index,
                format!("negative_marking must be a non-negative number, got {factor}"),
            ));
        }
    }

    Ok(SectionSpec {
        name: section.name.clone(),
        types,
        count,
        difficulty,
        negative_marking: section.negative_marking,
    })
}

/// On-disk blueprint formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlueprintFormat {
    Json,
    Toml,
}

impl BlueprintFormat {
    /// Picks the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(BlueprintFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(BlueprintFormat::Toml),
            _ => Err(PaperplanError::Configuration(format!(
                "Unsupported blueprint file {}: expected a .json or .toml extension",
                path.display()
            ))),
        }
    }
}

/// Loads a blueprint from a `.json` or `.toml` file
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported extension,
/// or does not deserialize into a [`BlueprintInput`].
pub fn load_blueprint(path: impl AsRef<Path>) -> Result<BlueprintInput> {
    let path = path.as_ref();
    let format = BlueprintFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|e| {
        PaperplanError::Io(format!(
            "Failed to read blueprint file {}: {}",
            path.display(),
            e
        ))
    })?;
    BlueprintInput::parse(&contents, format)
}

/// Builder for [`BlueprintInput`]
///
/// # Examples
///
/// ```
/// use paperplan::domain::BlueprintBuilder;
///
/// let input = BlueprintBuilder::new("general")
///     .total_questions(20)
///     .type_count("mcq", 10)
///     .type_count("short", 5)
///     .marks("mcq", 1)
///     .build();
/// assert_eq!(input.by_type.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct BlueprintBuilder {
    input: BlueprintInput,
}

impl BlueprintBuilder {
    /// Starts a blueprint for the named domain
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            input: BlueprintInput {
                domain: domain.into(),
                ..Default::default()
            },
        }
    }

    pub fn total_questions(mut self, total: i64) -> Self {
        self.input.total_questions = Some(total);
        self
    }

    /// Adds a count in the generic vocabulary
    pub fn type_count(mut self, code: impl Into<String>, count: i64) -> Self {
        self.input.by_type.insert(code.into(), count);
        self
    }

    /// Adds a count in the domain-specific vocabulary
    pub fn domain_type_count(mut self, code: impl Into<String>, count: i64) -> Self {
        self.input
            .by_type_domain
            .get_or_insert_with(BTreeMap::new)
            .insert(code.into(), count);
        self
    }

    pub fn difficulty(mut self, code: impl Into<String>, count: i64) -> Self {
        self.input.by_difficulty.insert(code.into(), count);
        self
    }

    pub fn section(mut self, section: SectionInput) -> Self {
        self.input.sections.push(section);
        self
    }

    pub fn marks(mut self, code: impl Into<String>, marks: i64) -> Self {
        self.input.marks.insert(code.into(), marks);
        self
    }

    pub fn duration_minutes(mut self, minutes: i64) -> Self {
        self.input.duration_minutes = Some(minutes);
        self
    }

    pub fn build(self) -> BlueprintInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use test_case::test_case;

    fn code(s: &str) -> TypeCode {
        TypeCode::new(s).unwrap()
    }

    #[test]
    fn test_validate_minimal_blueprint() {
        let input = BlueprintBuilder::new("general")
            .type_count("mcq", 10)
            .build();
        let validated = input.validate().unwrap();

        assert_eq!(validated.domain, ExamDomain::General);
        assert_eq!(validated.by_type.get(&code("mcq")), Some(&10));
        assert!(validated.total_questions.is_none());
        assert!(validated.by_type_domain.is_empty());
    }

    #[test]
    fn test_unknown_domain_rejected_first() {
        let input = BlueprintBuilder::new("astrology")
            .type_count("mcq", -1)
            .build();
        assert_eq!(
            input.validate().unwrap_err(),
            StructuralError::UnknownDomain("astrology".to_string())
        );
    }

    #[test_case(BlueprintBuilder::new("general").total_questions(-5).build(), "total_questions" ; "explicit total")]
    #[test_case(BlueprintBuilder::new("general").type_count("mcq", -1).build(), "by_type.mcq" ; "generic type count")]
    #[test_case(BlueprintBuilder::new("board").domain_type_count("short2", -2).build(), "by_type_domain.short2" ; "domain type count")]
    #[test_case(BlueprintBuilder::new("general").difficulty("hard", -3).build(), "by_difficulty.hard" ; "difficulty count")]
    #[test_case(BlueprintBuilder::new("general").section(SectionInput::new("A", 5)).section(SectionInput::new("B", -1)).build(), "sections[1].count" ; "section count")]
    #[test_case(BlueprintBuilder::new("general").section(SectionInput::new("A", 5).difficulty("easy", -1)).build(), "sections[0].difficulty.easy" ; "section difficulty")]
    fn test_negative_counts_are_structural(input: BlueprintInput, expected_field: &str) {
        match input.validate().unwrap_err() {
            StructuralError::NegativeCount { field, value } => {
                assert_eq!(field, expected_field);
                assert!(value < 0);
            }
            other => panic!("expected NegativeCount, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_total_and_non_positive_duration_become_absent() {
        let input = BlueprintBuilder::new("general")
            .total_questions(0)
            .duration_minutes(-10)
            .build();
        let validated = input.validate().unwrap();
        assert_eq!(validated.total_questions, None);
        assert_eq!(validated.duration_minutes, None);
    }

    #[test]
    fn test_blank_type_code_rejected() {
        let input = BlueprintBuilder::new("general").type_count("  ", 3).build();
        assert_eq!(
            input.validate().unwrap_err(),
            StructuralError::BlankCode {
                field: "by_type".to_string()
            }
        );
    }

    #[test]
    fn test_negative_marking_must_be_finite_and_non_negative() {
        let input = BlueprintBuilder::new("competitive")
            .section(SectionInput::new("Physics", 10).negative_marking(-0.25))
            .build();
        assert!(matches!(
            input.validate().unwrap_err(),
            StructuralError::MalformedSection { index: 0, .. }
        ));

        let input = BlueprintBuilder::new("competitive")
            .section(SectionInput::new("Physics", 10).negative_marking(f64::NAN))
            .build();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_duplicate_section_names_rejected() {
        let input = BlueprintBuilder::new("general")
            .section(SectionInput::new("A", 5))
            .section(SectionInput::new("A", 5))
            .build();
        assert!(matches!(
            input.validate().unwrap_err(),
            StructuralError::MalformedSection { index: 1, .. }
        ));
    }

    #[test]
    fn test_section_without_count_is_structural() {
        let raw = r#"{"domain":"general","by_type":{"mcq":5},"sections":[{"name":"A"}]}"#;
        let input = BlueprintInput::parse(raw, BlueprintFormat::Json).unwrap();

        assert_eq!(input.sections[0].count, None);
        assert_eq!(
            input.validate().unwrap_err(),
            StructuralError::malformed_section(0, "missing count")
        );
    }

    #[test_case(r#"{"domain":"general","by_types":{"mcq":5},"total_questions":5}"#, "by_types" ; "top level")]
    #[test_case(r#"{"domain":"general","sections":[{"count":5,"typse":["mcq"]}]}"#, "typse" ; "section entry")]
    fn test_misspelled_keys_are_rejected(raw: &str, key: &str) {
        match BlueprintInput::parse(raw, BlueprintFormat::Json) {
            Err(PaperplanError::Serialization(msg)) => assert!(msg.contains(key), "{msg}"),
            other => panic!("expected a serialization error, got {other:?}"),
        }
    }

    #[test]
    fn test_unnamed_sections_may_repeat() {
        let input = BlueprintBuilder::new("general")
            .section(SectionInput::new("", 5))
            .section(SectionInput::new("", 5))
            .build();
        let validated = input.validate().unwrap();
        assert_eq!(validated.sections[1].label(1), "#2");
    }

    #[test]
    fn test_negative_marks_are_not_structural() {
        let input = BlueprintBuilder::new("general")
            .type_count("mcq", 4)
            .marks("mcq", -2)
            .build();
        let validated = input.validate().unwrap();
        assert_eq!(validated.marks.get(&code("mcq")), Some(&-2));
    }

    #[test]
    fn test_parse_json_wire_shape() {
        let json = r#"{
            "domain": "board",
            "total_questions": 20,
            "by_type": {"mcq": 10},
            "by_type_domain": {"single_correct": 5, "short2": 3},
            "sections": [{"count": 20}],
            "marks": {"mcq": 1}
        }"#;
        let input = BlueprintInput::parse(json, BlueprintFormat::Json).unwrap();
        assert_eq!(input.total_questions, Some(20));
        assert_eq!(input.sections[0].name, "");
        assert_eq!(input.by_type_domain.as_ref().map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_load_toml_blueprint() {
        let toml_content = r#"
domain = "general"
total_questions = 15
duration_minutes = 45

[by_type]
mcq = 10
short = 5

[[sections]]
name = "A"
types = ["mcq"]
count = 10

[[sections]]
name = "B"
types = ["short"]
count = 5
negative_marking = 0.25
"#;
        let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let input = load_blueprint(temp_file.path()).unwrap();
        assert_eq!(input.sections.len(), 2);
        assert_eq!(input.sections[1].negative_marking, Some(0.25));
        assert_eq!(input.duration_minutes, Some(45));
    }

    #[test]
    fn test_load_blueprint_rejects_unknown_extension() {
        let temp_file = NamedTempFile::new().unwrap();
        let result = load_blueprint(temp_file.path());
        assert!(matches!(result, Err(PaperplanError::Configuration(_))));
    }
}
