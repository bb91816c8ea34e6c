//! Result type alias for paperplan

use super::errors::PaperplanError;

/// Result type alias for paperplan operations
///
/// # Examples
///
/// ```
/// use paperplan::domain::result::Result;
/// use paperplan::domain::errors::PaperplanError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PaperplanError::Other("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PaperplanError>;
