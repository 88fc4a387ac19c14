// glyphguard-core/src/engines/replacement_engine.rs
//! A `SanitizationEngine` that applies the configured character-class
//! replacement rules, in order, to its input.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;

use crate::char_class::ClassSet;
use crate::config::GlyphConfig;
use crate::engine::{SanitizationEngine, SanitizationSummaryItem};
use crate::replace::replace_counted;

/// A rule with its class set resolved, ready to apply.
#[derive(Debug)]
struct CompiledRule {
    name: String,
    class: ClassSet,
    replace_with: String,
}

#[derive(Debug)]
pub struct ReplacementEngine {
    rules: Vec<CompiledRule>,
}

impl ReplacementEngine {
    pub fn new(config: GlyphConfig) -> Result<Self> {
        config
            .validate()
            .context("Failed to validate replacement rules for ReplacementEngine")?;

        let rules: Vec<CompiledRule> = config
            .rules
            .iter()
            .filter(|rule| rule.is_active())
            .map(|rule| CompiledRule {
                name: rule.name.clone(),
                class: rule.class_set(),
                replace_with: rule.replace_with.clone(),
            })
            .collect();
        debug!(
            "ReplacementEngine compiled {} active rule(s) out of {}.",
            rules.len(),
            config.rules.len()
        );

        Ok(Self { rules })
    }

    /// Names of the rules this engine will apply, in order.
    pub fn active_rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }
}

impl SanitizationEngine for ReplacementEngine {
    fn name(&self) -> &'static str {
        "replace"
    }

    fn sanitize(&self, content: &str) -> Result<(String, Vec<SanitizationSummaryItem>)> {
        let mut current = content.to_string();
        let mut summary = Vec::new();

        for rule in &self.rules {
            let replacement = replace_counted(&current, &rule.class, &rule.replace_with);
            if replacement.replaced_scalars > 0 {
                debug!("Rule '{}' replaced {} scalar(s).", rule.name, replacement.replaced_scalars);
                summary.push(SanitizationSummaryItem {
                    rule_name: rule.name.clone(),
                    occurrences: replacement.replaced_scalars,
                });
            }
            current = replacement.output;
        }

        Ok((current, summary))
    }
}
