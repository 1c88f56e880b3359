//! Spring Endpoint Inventory - Command-line tool for listing Spring MVC endpoints.
//!
//! This binary provides a command-line interface for inventorying the HTTP endpoints
//! of a Java Spring project. It scans the source tree for controller files, extracts
//! every recognized route-mapping annotation, and prints the result as text, JSON,
//! YAML, or NDJSON.
//!
//! # Usage
//!
//! ```bash
//! endpoints-from-source [OPTIONS] <PROJECT_PATH>
//! ```
//!
//! # Examples
//!
//! List endpoints on the console:
//! ```bash
//! endpoints-from-source ./my-spring-project
//! ```
//!
//! Write the inventory as JSON:
//! ```bash
//! endpoints-from-source ./my-spring-project -f json -o endpoints.json
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! endpoints-from-source ./my-spring-project -v
//! ```

mod cli;
mod scanner;
mod parser;
mod extractor;
mod aggregator;
mod serializer;

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

    info!("Spring Endpoint Inventory starting...");

    // Now do the full parse with validation
    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    // Run the main workflow
    cli::run(args)?;

    info!("Endpoint inventory completed successfully");

    Ok(())
}
