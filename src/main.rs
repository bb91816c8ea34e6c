// Paperplan - Exam blueprint reconciliation engine
// Copyright (c) 2025 Paperplan Contributors
// Licensed under the MIT License

use paperplan::cli::{exit_code, Cli, Commands};
use paperplan::config::load_config_or_default;
use paperplan::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // A broken config file is reported by the command itself; logging falls
    // back to console-only defaults here.
    let config = load_config_or_default(&cli.config).ok();
    let logging_config = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(exit_code::FATAL);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Paperplan - Exam blueprint reconciliation engine"
    );

    let code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            exit_code::FATAL
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Preview(args) => args.execute(&cli.config).await,
        Commands::Generate(args) => args.execute(&cli.config).await,
        Commands::Domains(args) => args.execute().await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
