// glyphguard-core/src/engine.rs
//! Defines the core SanitizationEngine trait and related data structures.
//!
//! The `SanitizationEngine` trait provides a pluggable interface for the
//! different sanitization passes (zalgo cluster replacement, character-class
//! replacement). Every engine takes text in and hands back the transformed text
//! plus a per-rule summary, so the CLI can chain and report them uniformly.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use serde::Serialize;

/// One line of the summary reported after a sanitization pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizationSummaryItem {
    /// The rule (or built-in check) that fired.
    pub rule_name: String,
    /// Number of clusters or scalars it replaced.
    pub occurrences: usize,
}

/// A trait that defines the core functionality of a sanitization engine.
pub trait SanitizationEngine: Send + Sync {
    /// Short identifier used in logs and summaries.
    fn name(&self) -> &'static str;

    /// Sanitizes `content`, returning the new text and a summary of what changed.
    ///
    /// Summary items are only produced for rules that actually replaced something.
    fn sanitize(&self, content: &str) -> Result<(String, Vec<SanitizationSummaryItem>)>;

    /// Reports what [`SanitizationEngine::sanitize`] would change without
    /// returning the rewritten text.
    fn analyze_for_stats(&self, content: &str) -> Result<Vec<SanitizationSummaryItem>> {
        self.sanitize(content).map(|(_, summary)| summary)
    }
}
