// glyphguard-core/src/engines/cluster_engine.rs
//! A `SanitizationEngine` that replaces grapheme clusters carrying an
//! excessive number of combining marks.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;

use crate::cluster::{ClusterSanitizer, SanitizerOptions};
use crate::config::GlyphConfig;
use crate::engine::{SanitizationEngine, SanitizationSummaryItem};

/// Summary rule name reported for replaced zalgo clusters.
pub const EXCESSIVE_CLUSTERS_RULE: &str = "excessive_clusters";

#[derive(Debug)]
pub struct ClusterEngine {
    options: SanitizerOptions,
}

impl ClusterEngine {
    pub fn new(config: GlyphConfig) -> Result<Self> {
        config
            .sanitizer
            .validate()
            .context("Invalid sanitizer options for ClusterEngine")?;
        Ok(Self { options: config.sanitizer })
    }

    /// The threshold and marker this engine sanitizes with.
    pub fn options(&self) -> &SanitizerOptions {
        &self.options
    }
}

impl SanitizationEngine for ClusterEngine {
    fn name(&self) -> &'static str {
        "cluster"
    }

    fn sanitize(&self, content: &str) -> Result<(String, Vec<SanitizationSummaryItem>)> {
        let sanitizer = ClusterSanitizer::with_options(content, &self.options);
        let mut summary = Vec::new();
        if sanitizer.needs_sanitization() {
            debug!("ClusterEngine replaced {} cluster(s).", sanitizer.replaced_clusters());
            summary.push(SanitizationSummaryItem {
                rule_name: EXCESSIVE_CLUSTERS_RULE.to_string(),
                occurrences: sanitizer.replaced_clusters(),
            });
        }
        Ok((sanitizer.into_sanitized(), summary))
    }
}
