//! Swagger generator - command-line tool for generating a Swagger 2.0 document.
//!
//! This binary analyzes a Rust project's source code for annotated controller types and
//! writes a Swagger 2.0 descriptor of the project's HTTP API surface, suitable for running as
//! a build step.
//!
//! # Usage
//!
//! ```bash
//! swagger-from-source [OPTIONS] <PROJECT_PATH>
//! ```
//!
//! # Examples
//!
//! Generate swagger.json under target/generated-api:
//! ```bash
//! swagger-from-source ./my-api-project
//! ```
//!
//! Restrict scanning to a module and pick an output directory:
//! ```bash
//! swagger-from-source ./my-api-project -p crate::controllers -o docs/api
//! ```
//!
//! Generate YAML instead:
//! ```bash
//! swagger-from-source ./my-api-project -f yaml
//! ```

mod attrs;
mod cli;
mod discovery;
mod error;
mod extractor;
mod generator;
mod metadata;
mod parser;
mod scanner;
mod serializer;
mod swagger;

use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    // We need to parse args twice: once to get verbose flag, then again after logger init
    // First, do a quick parse just to check for verbose flag
    let args_for_verbose = cli::CliArgs::parse();

    // Initialize logger based on verbose flag
    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Swagger generator starting...");

    // Now do the full parse with validation
    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    // Run the main workflow
    cli::run(args)?;

    info!("Swagger document generation completed successfully");

    Ok(())
}
