//! Serialization module for rendering scan reports.
//!
//! This module provides functions to render a [`ScanReport`](crate::aggregator::ScanReport)
//! for human inspection or serialize it to JSON, YAML, or newline-delimited JSON,
//! and to write the result to a file.

use crate::aggregator::ScanReport;
use anyhow::{Context, Result};
use log::debug;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Renders a scan report as a human-readable listing.
///
/// One line per endpoint with aligned marker and path columns, followed by any
/// warnings with a `warning:` prefix. An empty report renders as
/// `No endpoints found.`.
///
/// # Arguments
///
/// * `report` - The scan report to render
pub fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();

    if report.endpoints.is_empty() {
        out.push_str("No endpoints found.\n");
    } else {
        let marker_width = report
            .endpoints
            .iter()
            .map(|e| e.marker.annotation_name().len())
            .max()
            .unwrap_or(0);
        let path_width = report
            .endpoints
            .iter()
            .map(|e| e.path.len())
            .max()
            .unwrap_or(0);

        for endpoint in &report.endpoints {
            let _ = writeln!(
                out,
                "{:<mw$}  {:<pw$}  {}  ({})",
                endpoint.marker.annotation_name(),
                endpoint.path,
                endpoint.method_name,
                endpoint.source_file.display(),
                mw = marker_width,
                pw = path_width,
            );
        }
    }

    for warning in &report.warnings {
        let _ = writeln!(out, "warning: {}", warning);
    }

    out
}

/// Serializes a scan report to pretty-printed JSON.
///
/// # Arguments
///
/// * `report` - The scan report to serialize
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(report: &ScanReport) -> Result<String> {
    debug!("Serializing scan report to JSON");
    serde_json::to_string_pretty(report).context("Failed to serialize scan report to JSON")
}

/// Serializes a scan report to YAML format.
///
/// # Arguments
///
/// * `report` - The scan report to serialize
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(report: &ScanReport) -> Result<String> {
    debug!("Serializing scan report to YAML");
    serde_yaml::to_string(report).context("Failed to serialize scan report to YAML")
}

/// Serializes the endpoints of a scan report as newline-delimited JSON.
///
/// One compact JSON object per endpoint per line, suitable for piping into
/// line-oriented tooling. Warnings are not part of the stream; they are surfaced
/// through the logger by the caller.
///
/// # Arguments
///
/// * `report` - The scan report whose endpoints to serialize
///
/// # Errors
///
/// Returns an error if serialization of any endpoint fails.
pub fn serialize_ndjson(report: &ScanReport) -> Result<String> {
    debug!("Serializing scan report to NDJSON");

    let mut out = String::new();
    for endpoint in &report.endpoints {
        let line = serde_json::to_string(endpoint)
            .context("Failed to serialize endpoint to NDJSON")?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does. Parent
/// directories are created as needed.
///
/// # Arguments
///
/// * `content` - The string content to write
/// * `path` - The file path to write to
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!(
        "Successfully wrote {} bytes to {}",
        content.len(),
        path.display()
    );
    Ok(())
}
