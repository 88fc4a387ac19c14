// glyphguard/src/commands/mod.rs
//! Command implementations and the helpers they share.

pub mod check;
pub mod sanitize;

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use glyphguard_core::{GlyphConfig, merge_rules};
use is_terminal::IsTerminal;
use log::{debug, info};

use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin (input must be valid UTF-8)")?;
            Ok(buffer)
        }
    }
}

/// Loads the default config, merges an optional user config on top, and
/// applies the enable/disable lists.
pub fn load_config(
    config_path: Option<&Path>,
    enable: &[String],
    disable: &[String],
) -> Result<GlyphConfig> {
    let default_config = GlyphConfig::load_default_rules()?;
    let user_config = config_path
        .map(|path| GlyphConfig::load_from_file(path))
        .transpose()?;
    let mut config = merge_rules(default_config, user_config);
    config.set_active_rules(enable, disable);
    debug!(
        "Effective config: threshold {}, {} rule(s).",
        config.sanitizer.combining_mark_threshold,
        config.rules.len()
    );
    Ok(config)
}
