// glyphguard/src/ui/output_format.rs
//! Formatting of status messages and the sanitization summary.
//!
//! Everything here writes to a caller-supplied writer (stderr in practice) and
//! only emits ANSI colors when `supports_color` is set.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use glyphguard_core::SanitizationSummaryItem;

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())?;
    } else {
        writeln!(writer, "{}", msg)?;
    }
    Ok(())
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg.yellow())?;
    } else {
        writeln!(writer, "Warning: {}", msg)?;
    }
    Ok(())
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg.red())?;
    } else {
        writeln!(writer, "Error: {}", msg)?;
    }
    Ok(())
}

/// Prints the human-readable summary block.
pub fn print_summary<W: Write>(
    summary: &[SanitizationSummaryItem],
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    let header = "--- Sanitization Summary ---";
    if supports_color {
        writeln!(writer, "\n{}", header.bold())?;
    } else {
        writeln!(writer, "\n{}", header)?;
    }

    if summary.is_empty() {
        writeln!(writer, "No changes were necessary.")?;
    }

    for item in summary {
        if supports_color {
            writeln!(
                writer,
                "{} ({} occurrences)",
                item.rule_name.magenta(),
                item.occurrences.to_string().bright_yellow()
            )?;
        } else {
            writeln!(writer, "{} ({} occurrences)", item.rule_name, item.occurrences)?;
        }
    }
    writeln!(writer, "{}", "-".repeat(header.len()))?;
    Ok(())
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    changed: bool,
    items: &'a [SanitizationSummaryItem],
}

/// Prints the summary as a single JSON object.
pub fn print_summary_json<W: Write>(summary: &[SanitizationSummaryItem], writer: &mut W) -> Result<()> {
    let doc = JsonSummary { changed: !summary.is_empty(), items: summary };
    writeln!(writer, "{}", serde_json::to_string(&doc)?)?;
    Ok(())
}
