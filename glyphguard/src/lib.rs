// glyphguard/src/lib.rs
//! # glyphguard CLI Application
//!
//! This crate provides the command-line interface for the glyphguard
//! sanitizer. The sanitization logic itself lives in `glyphguard-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
