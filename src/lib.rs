//! Spring Endpoint Inventory - Automatic endpoint discovery from Java web projects.
//!
//! This library provides tools to inventory the HTTP endpoints of a Spring MVC project
//! by static analysis of its Java source code. It scans the project for controller
//! files, parses them with an error-tolerant parser, and extracts one endpoint record
//! per route-mapping annotation found on a method declaration.
//!
//! # Recognized Annotations
//!
//! The fixed, case-sensitive marker set of Spring MVC route mappings:
//! `@RequestMapping`, `@GetMapping`, `@PostMapping`, `@PutMapping`, `@DeleteMapping`.
//! Custom composed annotations are not recognized.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`scanner`] - Recursively scans project directories for controller files
//! 2. [`parser`] - Parses Java source files into tree-sitter syntax trees
//! 3. [`extractor`] - Extracts endpoint information from parsed controllers
//! 4. [`aggregator`] - Runs the whole scan and assembles the final report
//! 5. [`serializer`] - Renders the report as text, JSON, YAML, or NDJSON
//!
//! # Example Usage
//!
//! ```no_run
//! use endpoints_from_source::aggregator::scan_project;
//! use endpoints_from_source::serializer::render_text;
//! use std::path::Path;
//!
//! let report = scan_project(Path::new("./my-spring-project"));
//! println!("{}", render_text(&report));
//! for warning in &report.warnings {
//!     eprintln!("warning: {}", warning);
//! }
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod scanner;
pub mod parser;
pub mod extractor;
pub mod aggregator;
pub mod serializer;
