// glyphguard/src/main.rs
//! glyphguard entry point.
//!
//! Parses the command line, initializes logging, and dispatches to the
//! command implementations.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use glyphguard::cli::{Cli, Commands};
use glyphguard::commands::{self, check, error_msg, sanitize};
use glyphguard::logger;
use glyphguard_core::{StandardClass, build_engines};

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("glyphguard started. Version: {}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

fn run(args: Cli) -> Result<ExitCode> {
    match args.command {
        Commands::Sanitize(cmd) => {
            let config = commands::load_config(cmd.config.as_deref(), &cmd.enable, &cmd.disable)?;
            let engines = build_engines(config, cmd.engine.into())
                .context("Failed to initialize sanitization engines")?;
            let input = commands::read_input(cmd.input_file.as_deref())?;
            sanitize::run_sanitize(
                &engines,
                sanitize::SanitizeOptions {
                    input,
                    output_path: cmd.output,
                    no_summary: cmd.no_summary,
                    quiet: args.quiet,
                    summary_format: cmd.summary_format,
                },
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(cmd) => {
            let config = commands::load_config(cmd.config.as_deref(), &[], &[])?;
            let input = commands::read_input(cmd.input_file.as_deref())?;
            let needs = check::run_check(&input, &config.sanitizer, args.quiet)?;
            Ok(if needs { ExitCode::from(1) } else { ExitCode::SUCCESS })
        }
        Commands::Classes => {
            for class in StandardClass::ALL {
                println!("{}", class);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
