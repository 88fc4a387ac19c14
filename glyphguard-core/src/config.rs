//! Configuration management for `glyphguard-core`.
//!
//! This module defines the replacement rules and sanitizer settings, handles
//! YAML (de)serialization, and provides utilities for loading, merging, and
//! validating configs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::char_class::{ClassSet, StandardClass};
use crate::cluster::SanitizerOptions;
use crate::errors::GlyphGuardError;

/// A single character-class replacement rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReplacementRule {
    /// Unique identifier for the rule (e.g., "normalize_whitespace").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// Standard classes whose union the rule matches.
    pub classes: Vec<StandardClass>,
    /// Extra scalars matched in addition to `classes`.
    pub extra_chars: String,
    /// Emitted once per matching scalar.
    pub replace_with: String,
    /// If true, the rule is disabled unless explicitly enabled.
    pub opt_in: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl ReplacementRule {
    /// Whether the replacement engine should apply this rule.
    pub fn is_active(&self) -> bool {
        match self.enabled {
            Some(enabled) => enabled,
            None => !self.opt_in,
        }
    }

    /// The character class this rule matches.
    pub fn class_set(&self) -> ClassSet {
        ClassSet::new(&self.classes, &self.extra_chars)
    }
}

/// Represents the top-level configuration structure for glyphguard.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct GlyphConfig {
    /// Zalgo detection settings.
    #[serde(default)]
    pub sanitizer: SanitizerOptions,
    /// Replacement rules, applied in order.
    #[serde(default)]
    pub rules: Vec<ReplacementRule>,
}

impl GlyphConfig {
    /// Loads a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());
        Ok(config)
    }

    /// Loads the embedded default configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config = Self::from_yaml(default_yaml).context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: GlyphConfig = serde_yml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks rule integrity and sanitizer settings.
    pub fn validate(&self) -> Result<(), GlyphGuardError> {
        self.sanitizer.validate()?;
        validate_rules(&self.rules)
    }

    /// Applies enable/disable lists provided via CLI.
    ///
    /// Disabled rules are dropped. Opt-in rules survive only when named in
    /// `enable_rules`, in which case they are marked enabled.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let name = rule.name.as_str();
            !disable_set.contains(name) && (!rule.opt_in || enable_set.contains(name))
        });

        for rule in &mut self.rules {
            if enable_set.contains(rule.name.as_str()) {
                rule.enabled = Some(true);
            }
        }

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }
}

/// Merges user-defined rules and sanitizer settings with defaults.
///
/// A user rule replaces the default rule of the same name in place; new user
/// rules are appended in the order they were declared.
pub fn merge_rules(default_config: GlyphConfig, user_config: Option<GlyphConfig>) -> GlyphConfig {
    debug!("merge_rules called. Initial default rules count: {}", default_config.rules.len());

    let Some(user_cfg) = user_config else {
        return default_config;
    };

    debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());
    let mut final_rules = default_config.rules;
    for user_rule in user_cfg.rules {
        if let Some(index) = final_rules.iter().position(|r| r.name == user_rule.name) {
            final_rules[index] = user_rule;
        } else {
            final_rules.push(user_rule);
        }
    }

    let sanitizer = if user_cfg.sanitizer != SanitizerOptions::default() {
        debug!(
            "Overriding sanitizer options with user values: threshold {}, marker U+{:04X}",
            user_cfg.sanitizer.combining_mark_threshold,
            user_cfg.sanitizer.replacement_marker as u32
        );
        user_cfg.sanitizer
    } else {
        default_config.sanitizer
    };

    debug!("Final total rules after merge: {}", final_rules.len());
    GlyphConfig {
        sanitizer,
        rules: final_rules,
    }
}

fn validate_rules(rules: &[ReplacementRule]) -> Result<(), GlyphGuardError> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.classes.is_empty() && rule.extra_chars.is_empty() {
            errors.push(format!(
                "Rule '{}' matches nothing: set `classes` or `extra_chars`.",
                rule.name
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(GlyphGuardError::RuleValidation(errors.join("\n")))
    }
}
