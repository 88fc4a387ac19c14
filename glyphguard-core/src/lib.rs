// glyphguard-core/src/lib.rs
//! # glyphguard Core Library
//!
//! `glyphguard-core` provides platform-independent, defensive Unicode text
//! sanitization. It detects grapheme clusters carrying an abnormal stack of
//! combining marks ("zalgo" text) and replaces each with a single replacement
//! marker, and it offers per-scalar replacement driven by composable
//! character classes.
//!
//! The library is pure and stateless: every operation reads its input and
//! allocates a fresh output, with no I/O and no shared mutable state.
//!
//! ## Modules
//!
//! * `cluster`: The grapheme-aware zalgo sanitizer, [`ClusterSanitizer`].
//! * `replace`: [`replace_characters`] and the [`ReplaceCharacters`] extension trait.
//! * `char_class`: The [`CharacterClass`] trait, standard classes and unions.
//! * `config`: [`ReplacementRule`]s and [`GlyphConfig`], loaded from YAML.
//! * `engine`: The [`SanitizationEngine`] trait, enabling a modular design.
//! * `engines`: Concrete implementations of the `SanitizationEngine` trait.
//! * `headless`: Convenience wrappers for one-shot, non-interactive use.
//!
//! ## Usage Example
//!
//! ```rust
//! use glyphguard_core::{sanitize, ReplaceCharacters, CharacterClass, StandardClass};
//!
//! let zalgo = format!("x{}", "\u{0301}".repeat(20));
//! let result = sanitize(&format!("{zalgo}b{zalgo}"));
//! assert!(result.needs_sanitization);
//! assert_eq!(result.sanitized, "\u{FFFD}b\u{FFFD}");
//!
//! let class = StandardClass::Punctuation.union(StandardClass::LowercaseLetters);
//! assert_eq!("ab  1 cd ".replace_characters(&class, ""), "  1  ");
//!
//! let spaced = "ab  1 cd ".replace_characters(&StandardClass::WhitespacesAndNewlines, "X ");
//! assert_eq!(spaced, "abX X 1X cdX ");
//! ```
//!
//! ## Error Handling
//!
//! Sanitization and replacement are total and never fail. Configuration and
//! engine construction use `anyhow::Result`, with [`GlyphGuardError`] for
//! typed failures.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod char_class;
pub mod cluster;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod replace;

/// Re-exports the zalgo sanitizer and its tuning options.
pub use cluster::{
    combining_mark_count,
    is_excessive,
    sanitize,
    ClusterSanitizer,
    Sanitized,
    SanitizerOptions,
    DEFAULT_COMBINING_MARK_THRESHOLD,
    DEFAULT_REPLACEMENT_MARKER,
};

/// Re-exports the character-class replacer.
pub use replace::{replace_characters, replace_counted, ReplaceCharacters, Replacement};

/// Re-exports the character-class abstraction.
pub use char_class::{CharSet, CharacterClass, ClassSet, StandardClass, Union};

/// Re-exports the configuration types and functions.
pub use config::{merge_rules, GlyphConfig, ReplacementRule};

/// Re-exports the custom error type for clear error reporting.
pub use errors::GlyphGuardError;

/// Re-exports types related to the core sanitization engine trait.
pub use engine::{SanitizationEngine, SanitizationSummaryItem};

/// Re-exports the concrete engines.
pub use engines::cluster_engine::ClusterEngine;
pub use engines::replacement_engine::ReplacementEngine;

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{build_engines, headless_sanitize_string, run_engines, HeadlessEngineType};
