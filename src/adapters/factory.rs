//! Job sink factory
//!
//! Creates the configured sink as a trait object.

use crate::adapters::directory::DirectorySink;
use crate::adapters::traits::JobSink;
use crate::config::GenerationConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create a job sink based on the generation configuration
///
/// # Errors
///
/// Returns an error if the sink cannot be created
pub fn create_sink(config: &GenerationConfig) -> Result<Arc<dyn JobSink + Send + Sync>> {
    tracing::info!(
        output_dir = %config.output_dir,
        dry_run = config.dry_run,
        "Creating directory job sink"
    );
    let sink = DirectorySink::new(&config.output_dir, config.dry_run);

    Ok(Arc::new(sink) as Arc<dyn JobSink + Send + Sync>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sink_uses_directory_backend() {
        let config = GenerationConfig {
            output_dir: "/tmp/paperplan-factory".to_string(),
            dry_run: true,
        };
        let sink = create_sink(&config).unwrap();
        assert_eq!(sink.name(), "directory");
    }
}
