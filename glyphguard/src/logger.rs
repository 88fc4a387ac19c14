// glyphguard/src/logger.rs
//! Logger setup for the glyphguard binary.
//!
//! Uses `env_logger`, honouring `RUST_LOG` unless an explicit level is given.
//! Lines are written to stderr as `[LEVEL target] message` so they never mix
//! with sanitized output on stdout.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    let _ = builder.try_init();
}
