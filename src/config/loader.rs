//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{OutputFormat, PaperplanConfig};
use crate::domain::errors::PaperplanError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PaperplanConfig
/// 4. Applies environment variable overrides (PAPERPLAN_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use paperplan::config::loader::load_config;
///
/// let config = load_config("paperplan.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PaperplanConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PaperplanError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PaperplanError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PaperplanConfig = toml::from_str(&contents)
        .map_err(|e| PaperplanError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    Ok(config)
}

/// Loads configuration, falling back to defaults when the file does not exist
///
/// Environment overrides still apply to the defaults. A file that exists but
/// is invalid is an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<PaperplanConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
    let mut config = PaperplanConfig::default();
    apply_env_overrides(&mut config)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &PaperplanConfig) -> Result<()> {
    config.validate().map_err(|e| {
        PaperplanError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PaperplanError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Comment lines are copied through untouched
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PaperplanError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using PAPERPLAN_* prefix
///
/// Environment variables follow the pattern: PAPERPLAN_<SECTION>_<KEY>
/// For example: PAPERPLAN_PREVIEW_FORMAT, PAPERPLAN_GENERATION_DRY_RUN
fn parse_override<T>(key: &str, val: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    val.parse::<T>().map_err(|e| {
        PaperplanError::Configuration(format!("Invalid value '{val}' for {key}: {e}"))
    })
}

fn apply_env_overrides(config: &mut PaperplanConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("PAPERPLAN_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Preview overrides
    if let Ok(val) = std::env::var("PAPERPLAN_PREVIEW_FORMAT") {
        config.preview.format = val
            .parse::<OutputFormat>()
            .map_err(PaperplanError::Configuration)?;
    }
    if let Ok(val) = std::env::var("PAPERPLAN_PREVIEW_MAX_CONCURRENCY") {
        config.preview.max_concurrency =
            parse_override("PAPERPLAN_PREVIEW_MAX_CONCURRENCY", &val)?;
    }

    // Generation overrides
    if let Ok(val) = std::env::var("PAPERPLAN_GENERATION_OUTPUT_DIR") {
        config.generation.output_dir = val;
    }
    if let Ok(val) = std::env::var("PAPERPLAN_GENERATION_DRY_RUN") {
        config.generation.dry_run =
            parse_override("PAPERPLAN_GENERATION_DRY_RUN", &val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PAPERPLAN_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled =
            parse_override("PAPERPLAN_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("PAPERPLAN_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PAPERPLAN_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_substitute_env_vars() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("PAPERPLAN_TEST_DIR", "/srv/jobs");
        let input = "output_dir = \"${PAPERPLAN_TEST_DIR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "output_dir = \"/srv/jobs\"\n");
        std::env::remove_var("PAPERPLAN_TEST_DIR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("PAPERPLAN_MISSING_VAR");
        let input = "output_dir = \"${PAPERPLAN_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# output_dir = \"${PAPERPLAN_NEVER_SET}\"\n";
        assert_eq!(substitute_env_vars(input).unwrap(), input);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(PaperplanError::Configuration(_))));
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let config = load_config_or_default("definitely-not-here.toml").unwrap();
        assert_eq!(config.preview.max_concurrency, 8);
    }

    #[test]
    fn test_load_config_valid() {
        let _guard = ENV_LOCK.lock().unwrap();
        let toml_content = r#"
[application]
log_level = "debug"

[preview]
format = "json"
max_concurrency = 4

[generation]
output_dir = "/tmp/paperplan-jobs"
dry_run = true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.preview.format, OutputFormat::Json);
        assert_eq!(config.preview.max_concurrency, 4);
        assert!(config.generation.dry_run);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[preview]\nmax_concurrency = 0\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("max_concurrency"));
    }
}
