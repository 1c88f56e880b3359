use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// Spring Endpoint Inventory - List the HTTP endpoints of a Java Spring project
#[derive(Parser, Debug)]
#[command(name = "endpoints-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the Java project directory
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Newline-delimited JSON, one endpoint per line
    Ndjson,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    // Validate project path exists
    if !args.project_path.exists() {
        anyhow::bail!(
            "Project path does not exist: {}",
            args.project_path.display()
        );
    }

    // Validate project path is a directory
    if !args.project_path.is_dir() {
        anyhow::bail!(
            "Project path is not a directory: {}",
            args.project_path.display()
        );
    }

    info!("Project path: {}", args.project_path.display());
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::aggregator::scan_project;
    use crate::serializer::{
        render_text, serialize_json, serialize_ndjson, serialize_yaml, write_to_file,
    };

    info!("Starting endpoint inventory...");

    // Step 1: Scan the project (walk, parse, extract)
    let report = scan_project(&args.project_path);

    for warning in &report.warnings {
        log::warn!("{}", warning);
    }

    if report.endpoints.is_empty() {
        log::warn!("No endpoints found in the project");
    }

    // Step 2: Render to the requested format
    info!("Rendering to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => serialize_json(&report)?,
        OutputFormat::Yaml => serialize_yaml(&report)?,
        OutputFormat::Ndjson => serialize_ndjson(&report)?,
    };

    // Step 3: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&content, output_path)?;
        info!(
            "Successfully wrote endpoint inventory to {}",
            output_path.display()
        );
    } else {
        print!("{}", content);
    }

    // Step 4: Display summary
    info!("Scan complete!");
    info!("Summary:");
    info!("  - Endpoints found: {}", report.endpoints.len());
    info!("  - Warnings: {}", report.warnings.len());

    Ok(())
}
