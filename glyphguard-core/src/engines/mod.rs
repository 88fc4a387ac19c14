// glyphguard-core/src/engines/mod.rs
//! This module contains the sanitization engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `SanitizationEngine` trait. To add a new engine, create a new file, define
//! its logic, and declare it here using `pub mod <engine_name>;`.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod cluster_engine;
pub mod replacement_engine;
