// glyphguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the glyphguard
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use glyphguard_core::HeadlessEngineType;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "glyphguard",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip zalgo text and replace character classes",
    long_about = "glyphguard replaces grapheme clusters that carry an abnormal stack of combining marks (\"zalgo\" text) with a single U+FFFD marker, and optionally applies character-class replacement rules such as whitespace normalization.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `glyphguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes an input file or stdin.
    #[command(about = "Sanitizes an input file or stdin and writes the result.")]
    Sanitize(SanitizeCommand),

    /// Exits with status 1 if the input contains excessive clusters.
    #[command(about = "Checks whether an input needs sanitization without rewriting it.")]
    Check(CheckCommand),

    /// Lists the character class names usable in rule configs.
    #[command(about = "Lists the standard character classes usable in rule configs.")]
    Classes,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "GLYPHGUARD_CONFIG", help = "Path to a custom rule configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Enable these rule names, including opt-in rules (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Select which engine(s) to run.
    #[arg(long = "engine", value_name = "ENGINE", default_value = "cluster", help = "Select the engine(s) to run.")]
    pub engine: EngineChoice,

    /// Suppress the sanitization summary.
    #[arg(long = "no-summary", help = "Suppress the sanitization summary.")]
    pub no_summary: bool,

    /// Format of the summary written to stderr.
    #[arg(long = "summary-format", value_name = "FORMAT", default_value = "text", help = "Format of the summary written to stderr.")]
    pub summary_format: SummaryFormat,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom rule configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "GLYPHGUARD_CONFIG", help = "Path to a custom configuration file (YAML).")]
    pub config: Option<PathBuf>,
}

/// Engine selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineChoice {
    /// Replace zalgo clusters only.
    Cluster,
    /// Apply the character-class replacement rules only.
    Replace,
    /// Replace zalgo clusters, then apply the rules.
    All,
}

impl From<EngineChoice> for HeadlessEngineType {
    fn from(choice: EngineChoice) -> Self {
        match choice {
            EngineChoice::Cluster => HeadlessEngineType::Cluster,
            EngineChoice::Replace => HeadlessEngineType::Replace,
            EngineChoice::All => HeadlessEngineType::All,
        }
    }
}

/// Summary output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}
