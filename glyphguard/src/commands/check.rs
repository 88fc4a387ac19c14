// glyphguard/src/commands/check.rs
//! `check` command: reports whether an input contains zalgo clusters.

use anyhow::Result;
use log::info;

use glyphguard_core::{ClusterSanitizer, SanitizerOptions};

use super::{info_msg, warn_msg};

/// Returns `true` when `input` needs sanitization under `options`.
pub fn run_check(input: &str, options: &SanitizerOptions, quiet: bool) -> Result<bool> {
    options.validate()?;
    let sanitizer = ClusterSanitizer::with_options(input, options);
    let needs = sanitizer.needs_sanitization();
    info!("Check finished: {} excessive cluster(s).", sanitizer.replaced_clusters());

    if !quiet {
        if needs {
            warn_msg(format!(
                "Input needs sanitization: {} excessive cluster(s) found.",
                sanitizer.replaced_clusters()
            ));
        } else {
            info_msg("Input is clean.");
        }
    }
    Ok(needs)
}
