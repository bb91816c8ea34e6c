//! Code newtypes for question types and difficulty buckets
//!
//! Type and difficulty codes arrive as free-form strings on the wire. Wrapping
//! them keeps the two vocabularies from being mixed up in the engine's maps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Question-type code newtype wrapper
///
/// Identifies a question type within a vocabulary, e.g. `mcq` in the generic
/// vocabulary or `short2` in a board vocabulary.
///
/// # Examples
///
/// ```
/// use paperplan::domain::codes::TypeCode;
/// use std::str::FromStr;
///
/// let code = TypeCode::from_str("mcq").unwrap();
/// assert_eq!(code.as_str(), "mcq");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeCode(String);

impl TypeCode {
    /// Creates a new TypeCode from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(TypeCode)` if the code is not blank, `Err` otherwise
    pub fn new(code: impl Into<String>) -> Result<Self, String> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err("Type code cannot be empty".to_string());
        }
        Ok(Self(code))
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TypeCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TypeCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Difficulty code newtype wrapper (`easy`, `medium`, `hard`, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DifficultyCode(String);

impl DifficultyCode {
    /// Creates a new DifficultyCode, rejecting blank strings
    pub fn new(code: impl Into<String>) -> Result<Self, String> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err("Difficulty code cannot be empty".to_string());
        }
        Ok(Self(code))
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DifficultyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DifficultyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DifficultyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_type_code_creation() {
        let code = TypeCode::new("short2").unwrap();
        assert_eq!(code.as_str(), "short2");
    }

    #[test]
    fn test_type_code_empty_fails() {
        assert!(TypeCode::new("").is_err());
        assert!(TypeCode::new("   ").is_err());
    }

    #[test]
    fn test_difficulty_code_empty_fails() {
        assert!(DifficultyCode::new("").is_err());
        assert!("hard".parse::<DifficultyCode>().is_ok());
    }

    #[test]
    fn test_type_code_display() {
        let code = TypeCode::new("long").unwrap();
        assert_eq!(format!("{}", code), "long");
    }

    #[test]
    fn test_codes_serialize_as_plain_map_keys() {
        let mut counts = BTreeMap::new();
        counts.insert(TypeCode::new("short").unwrap(), 5u64);
        counts.insert(TypeCode::new("mcq").unwrap(), 10u64);

        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"mcq":10,"short":5}"#);

        let back: BTreeMap<TypeCode, u64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }
}
