//! Whole-scan orchestration: walk the project, parse each controller, extract
//! endpoints, and assemble the final report.
//!
//! The entry point is [`scan_project`], which takes the project root as its sole
//! input and never fails: every edge case (missing root, unreadable file, malformed
//! source) degrades to an empty or partial report with an explanatory warning, so a
//! caller can distinguish "nothing found" from "something went wrong".

use crate::extractor::spring::SpringExtractor;
use crate::extractor::{Endpoint, EndpointExtractor};
use crate::parser::{JavaParser, ParsedFile};
use crate::scanner::FileScanner;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The assembled result of one scan invocation.
///
/// Endpoints appear in discovery order: files in walk order, within a file in
/// document order. Warnings record every degradation encountered along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Every endpoint discovered, in discovery order
    pub endpoints: Vec<Endpoint>,
    /// Per-path and per-file degradations (inaccessible paths, parse failures,
    /// files containing syntax errors)
    pub warnings: Vec<String>,
}

/// Scans a Java project directory and inventories its Spring MVC endpoints.
///
/// Runs the full pipeline: controller discovery, parallel parsing, and annotation
/// extraction. The root path is the sole configurable input.
///
/// # Arguments
///
/// * `root` - The project directory to scan
///
/// # Returns
///
/// Returns a `ScanReport`. The report is empty (but carries a warning) when the
/// root does not exist; a file that cannot be read or parsed is skipped with a
/// warning while the rest of the scan proceeds.
pub fn scan_project(root: &Path) -> ScanReport {
    info!("Scanning project directory: {}", root.display());

    // Step 1: Walk the tree for controller files
    let scan_result = FileScanner::new(root.to_path_buf()).scan();
    let mut warnings = scan_result.warnings;

    info!(
        "Found {} controller files",
        scan_result.controller_files.len()
    );

    // Step 2: Parse controllers into syntax trees, in parallel, merged in file order
    let parse_results = JavaParser::parse_files(&scan_result.controller_files);

    let mut parsed_files: Vec<ParsedFile> = Vec::new();
    for (path, result) in scan_result.controller_files.iter().zip(parse_results) {
        match result {
            Ok(parsed) => {
                if parsed.tree.root_node().has_error() {
                    warnings.push(format!(
                        "{}: source contains syntax errors; endpoints in malformed regions may be missed",
                        path.display()
                    ));
                }
                parsed_files.push(parsed);
            }
            Err(e) => {
                warnings.push(format!("{}: {:#}", path.display(), e));
            }
        }
    }

    debug!("Parsed {} controller files", parsed_files.len());

    // Step 3: Extract endpoints
    let endpoints = SpringExtractor.extract_endpoints(&parsed_files);

    info!("Extracted {} endpoints", endpoints.len());

    ScanReport { endpoints, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::MappingKind;
    use std::fs;
    use tempfile::TempDir;

    /// Helper to lay out a temporary project from (relative path, content) pairs
    fn create_project(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for (path, content) in files {
            let file_path = temp_dir.path().join(path);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&file_path, content).unwrap();
        }
        temp_dir
    }

    #[test]
    fn test_scan_project_end_to_end() {
        let temp_dir = create_project(&[(
            "src/main/java/com/demo/UserController.java",
            r#"
            public class UserController {
                @GetMapping("/user/{id}")
                public String getUser(Long id) {
                    return "user";
                }

                @PostMapping
                public String createUser(String body) {
                    return "created";
                }
            }
            "#,
        )]);

        let report = scan_project(temp_dir.path());

        assert!(report.warnings.is_empty());
        assert_eq!(report.endpoints.len(), 2);
        assert_eq!(report.endpoints[0].method_name, "getUser");
        assert_eq!(report.endpoints[0].marker, MappingKind::Get);
        assert_eq!(report.endpoints[0].path, "/user/{id}");
        assert_eq!(report.endpoints[1].method_name, "createUser");
        assert_eq!(report.endpoints[1].path, "");
    }

    #[test]
    fn test_scan_project_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let report = scan_project(temp_dir.path());

        assert!(report.endpoints.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_scan_project_missing_root_degrades_with_warning() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let report = scan_project(&missing);

        assert!(report.endpoints.is_empty());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_scan_project_ignores_non_controller_files() {
        let temp_dir = create_project(&[
            (
                "src/UserService.java",
                r#"
                public class UserService {
                    @GetMapping("/should-not-count")
                    public String sneaky() { return ""; }
                }
                "#,
            ),
            ("src/notes.txt", "nothing here"),
        ]);

        let report = scan_project(temp_dir.path());

        assert!(report.endpoints.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_scan_project_is_idempotent() {
        let temp_dir = create_project(&[
            (
                "src/AController.java",
                r#"
                public class AController {
                    @GetMapping("/a")
                    public String a() { return ""; }
                }
                "#,
            ),
            (
                "src/BController.java",
                r#"
                public class BController {
                    @PutMapping("/b")
                    public String b() { return ""; }
                }
                "#,
            ),
        ]);

        let first = scan_project(temp_dir.path());
        let second = scan_project(temp_dir.path());

        // Two scans of an unchanged directory yield identical reports
        assert_eq!(first, second);
        assert_eq!(first.endpoints.len(), 2);
    }

    #[test]
    fn test_scan_project_warns_on_malformed_file_but_continues() {
        let temp_dir = create_project(&[
            (
                "src/BrokenController.java",
                "public class BrokenController { public String oops( {",
            ),
            (
                "src/GoodController.java",
                r#"
                public class GoodController {
                    @DeleteMapping("/good")
                    public String good() { return ""; }
                }
                "#,
            ),
        ]);

        let report = scan_project(temp_dir.path());

        // The good file is still scanned; the broken one is reported
        assert_eq!(report.endpoints.len(), 1);
        assert_eq!(report.endpoints[0].path, "/good");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("BrokenController.java"));
        assert!(report.warnings[0].contains("syntax errors"));
    }

    #[test]
    fn test_scan_project_endpoint_paths_carry_source_file() {
        let temp_dir = create_project(&[(
            "src/UserController.java",
            r#"
            public class UserController {
                @GetMapping("/user")
                public String user() { return ""; }
            }
            "#,
        )]);

        let report = scan_project(temp_dir.path());

        assert_eq!(report.endpoints.len(), 1);
        assert!(report.endpoints[0]
            .source_file
            .ends_with("src/UserController.java"));
    }
}
