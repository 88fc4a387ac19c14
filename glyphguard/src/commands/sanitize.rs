// glyphguard/src/commands/sanitize.rs
//! `sanitize` command: runs the selected engines and writes the result.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};

use glyphguard_core::{SanitizationEngine, SanitizationSummaryItem, run_engines};

use super::info_msg;
use crate::cli::SummaryFormat;
use crate::ui::output_format;

/// Options for [`run_sanitize`].
#[derive(Debug)]
pub struct SanitizeOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
    pub summary_format: SummaryFormat,
}

/// The main operation runner for the `sanitize` command.
pub fn run_sanitize(engines: &[Box<dyn SanitizationEngine>], opts: SanitizeOptions) -> Result<()> {
    info!("Starting sanitize operation.");

    let (sanitized_content, summary) =
        run_engines(engines, &opts.input).context("Sanitization failed")?;

    debug!(
        "Content sanitized. Original length: {}, Sanitized length: {}",
        opts.input.len(),
        sanitized_content.len()
    );

    handle_primary_output(&opts, &sanitized_content)?;
    handle_summary(&summary, &opts)?;

    info!("Sanitize operation completed.");
    Ok(())
}

fn handle_primary_output(opts: &SanitizeOptions, sanitized_content: &str) -> Result<()> {
    // Output is written verbatim: no trailing newline is added or removed.
    if let Some(path) = &opts.output_path {
        if !opts.quiet {
            info_msg(format!("Writing sanitized content to file: {}", path.display()));
        }
        fs::write(path, sanitized_content)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    } else {
        debug!("Writing sanitized content to stdout.");
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writer.write_all(sanitized_content.as_bytes())?;
        writer.flush()?;
    }
    Ok(())
}

fn handle_summary(summary: &[SanitizationSummaryItem], opts: &SanitizeOptions) -> Result<()> {
    if opts.no_summary || opts.quiet {
        return Ok(());
    }
    debug!("Displaying sanitization summary.");
    let mut stderr = io::stderr();
    match opts.summary_format {
        SummaryFormat::Text => {
            let supports_color = stderr.is_terminal();
            output_format::print_summary(summary, &mut stderr, supports_color)
        }
        SummaryFormat::Json => output_format::print_summary_json(summary, &mut stderr),
    }
}
