// glyphguard-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using core engines in headless mode (non-UI).
//! Provides helper functions for a full, one-shot sanitization of strings.
//!
//! Supports running the cluster engine, the replacement engine, or both chained.

use anyhow::Result;
use log::debug;

use crate::config::GlyphConfig;
use crate::engine::{SanitizationEngine, SanitizationSummaryItem};
use crate::engines::cluster_engine::ClusterEngine;
use crate::engines::replacement_engine::ReplacementEngine;

/// Enum to select which sanitization engine(s) to use in headless mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessEngineType {
    /// Zalgo cluster replacement only.
    Cluster,
    /// Character-class replacement rules only.
    Replace,
    /// Cluster replacement followed by the replacement rules.
    All,
}

/// Builds the engines for `engine_type`, in the order they must run.
pub fn build_engines(
    config: GlyphConfig,
    engine_type: HeadlessEngineType,
) -> Result<Vec<Box<dyn SanitizationEngine>>> {
    let engines: Vec<Box<dyn SanitizationEngine>> = match engine_type {
        HeadlessEngineType::Cluster => vec![Box::new(ClusterEngine::new(config)?)],
        HeadlessEngineType::Replace => vec![Box::new(ReplacementEngine::new(config)?)],
        HeadlessEngineType::All => vec![
            Box::new(ClusterEngine::new(config.clone())?),
            Box::new(ReplacementEngine::new(config)?),
        ],
    };
    Ok(engines)
}

/// Runs `engines` in sequence, concatenating their summaries.
pub fn run_engines(
    engines: &[Box<dyn SanitizationEngine>],
    content: &str,
) -> Result<(String, Vec<SanitizationSummaryItem>)> {
    let mut current = content.to_string();
    let mut summary = Vec::new();
    for engine in engines {
        let (next, items) = engine.sanitize(&current)?;
        debug!("Engine '{}' produced {} summary item(s).", engine.name(), items.len());
        current = next;
        summary.extend(items);
    }
    Ok((current, summary))
}

/// Fully sanitizes an input string with the selected engine(s).
/// This function is the primary entry point for non-interactive (headless) use.
///
/// # Arguments
///
/// * `config` - The merged GlyphConfig (defaults + optional user overrides).
/// * `content` - The string to be sanitized.
/// * `engine_type` - Which engine(s) to run.
pub fn headless_sanitize_string(
    config: GlyphConfig,
    content: &str,
    engine_type: HeadlessEngineType,
) -> Result<String> {
    let engines = build_engines(config, engine_type)?;
    let (sanitized_content, _) = run_engines(&engines, content)?;
    Ok(sanitized_content)
}
