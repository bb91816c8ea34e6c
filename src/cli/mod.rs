//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for paperplan using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::io::{self, Write};

/// Paperplan - Exam blueprint reconciliation engine
#[derive(Parser, Debug)]
#[command(name = "paperplan")]
#[command(version, about, long_about = None)]
#[command(author = "Paperplan Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "paperplan.toml", env = "PAPERPLAN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PAPERPLAN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preview one or more blueprint files
    Preview(commands::preview::PreviewArgs),

    /// Prepare a generation job from a blueprint and submit it
    Generate(commands::generate::GenerateArgs),

    /// List exam domains with their vocabularies, marks and timings
    Domains(commands::domains::DomainsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write a sample blueprint file
    Init(commands::init::InitArgs),
}

/// Exit codes shared by all commands
pub mod exit_code {
    pub const OK: i32 = 0;
    /// Configuration, input or structural error
    pub const INPUT_ERROR: i32 = 2;
    /// A blueprint whose question total could not be determined
    pub const UNDETERMINED: i32 = 3;
    pub const FATAL: i32 = 5;
}

/// Writes a failure heading followed by the indented error
pub fn write_failure<W: Write>(out: &mut W, heading: &str, error: &dyn Display) -> io::Result<()> {
    writeln!(out, "❌ {heading}")?;
    writeln!(out, "   Error: {error}")
}

/// Reports a failure on stderr, keeping stdout for command output
pub fn report_failure(heading: &str, error: &dyn Display) {
    let _ = write_failure(&mut io::stderr().lock(), heading, error);
}
