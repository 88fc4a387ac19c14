//! errors.rs - Custom error types for the glyphguard-core library.
//!
//! The sanitizer and the replacer themselves are total and never fail. These
//! variants cover the configuration and engine layers built around them.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `glyphguard-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GlyphGuardError {
    #[error("Replacement marker U+{0:04X} is a combining mark and would re-trigger sanitization")]
    InvalidReplacementMarker(u32),

    #[error("Combining mark threshold must be at least 1, got {0}")]
    InvalidThreshold(usize),

    #[error("Unknown character class '{0}'")]
    UnknownCharacterClass(String),

    #[error("Rule validation failed:\n{0}")]
    RuleValidation(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
