//! Init command implementation
//!
//! This module implements the `init` command for writing a sample blueprint
//! and, optionally, a starter configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

use crate::cli::{exit_code, report_failure};
use crate::domain::{BlueprintBuilder, BlueprintInput, ExamDomain, SectionInput};

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the blueprint file
    #[arg(short, long, default_value = "blueprint.json")]
    pub output: String,

    /// Exam domain of the sample (general, board, competitive)
    #[arg(long, default_value = "general")]
    pub domain: String,

    /// Also write a starter paperplan.toml next to the blueprint
    #[arg(long)]
    pub with_config: bool,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, domain = %self.domain, "Initializing blueprint file");

        println!("📝 Initializing paperplan blueprint");
        println!();

        let domain: ExamDomain = match self.domain.parse() {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(exit_code::INPUT_ERROR);
            }
        };

        let output = Path::new(&self.output);
        let config_path = output.with_file_name("paperplan.toml");

        let mut targets = vec![output];
        if self.with_config {
            targets.push(config_path.as_path());
        }
        if let Some(existing) = targets.iter().find(|p| p.exists()) {
            if !self.force {
                eprintln!("❌ File already exists: {}", existing.display());
                eprintln!("   Use --force to overwrite");
                return Ok(exit_code::INPUT_ERROR);
            }
        }

        let blueprint = serde_json::to_string_pretty(&sample_blueprint(domain))?;
        if let Err(e) = fs::write(output, blueprint) {
            report_failure("Failed to write blueprint file", &e);
            return Ok(exit_code::FATAL);
        }
        println!("✅ Blueprint file created: {}", self.output);

        if self.with_config {
            if let Err(e) = fs::write(&config_path, sample_config()) {
                report_failure("Failed to write configuration file", &e);
                return Ok(exit_code::FATAL);
            }
            println!("✅ Configuration file created: {}", config_path.display());
        }

        println!();
        println!("Next steps:");
        println!("  1. Edit {} with your paper's counts and marks", self.output);
        println!("  2. Preview it: paperplan preview {}", self.output);
        println!("  3. Submit it: paperplan generate {}", self.output);
        println!();
        Ok(exit_code::OK)
    }
}

/// Builds a self-consistent sample blueprint for a domain
pub fn sample_blueprint(domain: ExamDomain) -> BlueprintInput {
    let builder = match domain {
        ExamDomain::General => BlueprintBuilder::new(domain.as_str())
            .total_questions(20)
            .type_count("mcq", 10)
            .type_count("short", 6)
            .type_count("long", 4)
            .difficulty("easy", 8)
            .difficulty("medium", 8)
            .difficulty("hard", 4)
            .section(SectionInput::new("A", 10).types(["mcq"]))
            .section(SectionInput::new("B", 10).types(["short", "long"]))
            .marks("mcq", 1)
            .marks("short", 3)
            .marks("long", 5)
            .duration_minutes(60),
        ExamDomain::Board => BlueprintBuilder::new(domain.as_str())
            .domain_type_count("single_correct", 16)
            .domain_type_count("assertion_reason", 4)
            .domain_type_count("short2", 5)
            .domain_type_count("short3", 6)
            .domain_type_count("case_based", 3)
            .domain_type_count("long5", 4)
            .section(SectionInput::new("A", 20).types(["single_correct", "assertion_reason"]))
            .section(SectionInput::new("B", 11).types(["short2", "short3"]))
            .section(SectionInput::new("C", 7).types(["case_based", "long5"]))
            .marks("single_correct", 1)
            .marks("assertion_reason", 1)
            .marks("short2", 2)
            .marks("short3", 3)
            .marks("case_based", 4)
            .marks("long5", 5)
            .duration_minutes(180),
        ExamDomain::Competitive => BlueprintBuilder::new(domain.as_str())
            .domain_type_count("single_correct", 20)
            .domain_type_count("integer", 5)
            .section(
                SectionInput::new("Objective", 20)
                    .types(["single_correct"])
                    .negative_marking(0.25),
            )
            .section(SectionInput::new("Numerical", 5).types(["integer"]))
            .marks("single_correct", 4)
            .marks("integer", 4)
            .duration_minutes(60),
    };
    builder.build()
}

fn sample_config() -> &'static str {
    r#"# paperplan configuration

[application]
log_level = "info"

[preview]
format = "text"       # text | json
max_concurrency = 8

[generation]
output_dir = "./jobs"
dry_run = false

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
"#
}
