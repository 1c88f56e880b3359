//! Endpoint extraction module for reading route-mapping annotations.
//!
//! This module defines the endpoint descriptor model and the extraction interface.
//! The Spring MVC implementation lives in [`spring::SpringExtractor`]; it knows how
//! to walk a parsed controller and turn each recognized mapping annotation into one
//! [`Endpoint`].
//!
//! # Example
//!
//! ```no_run
//! use endpoints_from_source::extractor::{EndpointExtractor, spring::SpringExtractor};
//! use endpoints_from_source::parser::JavaParser;
//! use std::path::Path;
//!
//! let parsed = JavaParser::parse_file(Path::new("UserController.java")).unwrap();
//! let extractor = SpringExtractor;
//! let endpoints = extractor.extract_endpoints(&[parsed]);
//! println!("Found {} endpoints", endpoints.len());
//! ```

pub mod spring;

use crate::parser::ParsedFile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Trait for extracting endpoint information from parsed Java files.
///
/// Implementations of this trait know how to analyze the syntax trees of a specific
/// annotation convention and extract endpoint descriptors from them.
pub trait EndpointExtractor {
    /// Extracts all endpoint descriptors from parsed Java files.
    ///
    /// # Arguments
    ///
    /// * `parsed_files` - Parsed controller files, in discovery order
    ///
    /// # Returns
    ///
    /// Returns a vector of `Endpoint` structs, one per recognized mapping annotation
    /// across all files, preserving file order.
    fn extract_endpoints(&self, parsed_files: &[ParsedFile]) -> Vec<Endpoint>;
}

/// One discovered API endpoint.
///
/// A descriptor is only ever created for a method declaration carrying at least one
/// recognized mapping annotation; a method with several mapping annotations yields
/// one descriptor per annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// The declared method name, or empty string when the declaration has no name
    pub method_name: String,
    /// Which mapping annotation produced this descriptor
    pub marker: MappingKind,
    /// The annotation argument literal; empty string when no arguments were given.
    /// Not normalized further (no leading-slash enforcement).
    pub path: String,
    /// Path to the file where the endpoint was found
    pub source_file: PathBuf,
}

/// The fixed set of recognized Spring MVC mapping annotations.
///
/// Matching is case-sensitive and exact: composed or custom route annotations are
/// ignored even if they denote a route by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MappingKind {
    /// `@RequestMapping` - generic mapping, any HTTP method
    #[serde(rename = "RequestMapping")]
    Request,
    /// `@GetMapping`
    #[serde(rename = "GetMapping")]
    Get,
    /// `@PostMapping`
    #[serde(rename = "PostMapping")]
    Post,
    /// `@PutMapping`
    #[serde(rename = "PutMapping")]
    Put,
    /// `@DeleteMapping`
    #[serde(rename = "DeleteMapping")]
    Delete,
}

impl MappingKind {
    /// Resolve an annotation's bare name (no `@`) to a mapping kind.
    ///
    /// Returns `None` for any name outside the recognized set.
    pub fn from_annotation_name(name: &str) -> Option<Self> {
        match name {
            "RequestMapping" => Some(MappingKind::Request),
            "GetMapping" => Some(MappingKind::Get),
            "PostMapping" => Some(MappingKind::Post),
            "PutMapping" => Some(MappingKind::Put),
            "DeleteMapping" => Some(MappingKind::Delete),
            _ => None,
        }
    }

    /// The annotation name this kind was matched from.
    pub fn annotation_name(&self) -> &'static str {
        match self {
            MappingKind::Request => "RequestMapping",
            MappingKind::Get => "GetMapping",
            MappingKind::Post => "PostMapping",
            MappingKind::Put => "PutMapping",
            MappingKind::Delete => "DeleteMapping",
        }
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.annotation_name())
    }
}

impl Endpoint {
    /// Create a new Endpoint
    pub fn new(method_name: String, marker: MappingKind, path: String, source_file: PathBuf) -> Self {
        Self {
            method_name,
            marker,
            path,
            source_file,
        }
    }
}
