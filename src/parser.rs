use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::Tree;

/// Syntax parser for Java source files.
///
/// The `JavaParser` uses tree-sitter with the Java grammar to parse source code into
/// a concrete syntax tree. The parse is error-tolerant: a malformed file produces a
/// best-effort tree containing error nodes rather than a failure, so downstream
/// extraction can still walk whatever structure survived.
///
/// # Example
///
/// ```no_run
/// use endpoints_from_source::parser::JavaParser;
/// use std::path::Path;
///
/// let parsed = JavaParser::parse_file(Path::new("src/main/java/UserController.java")).unwrap();
/// println!("Parsed tree rooted at {}", parsed.tree.root_node().kind());
/// ```
pub struct JavaParser;

/// A parsed Java file with its syntax tree.
///
/// Contains the original file path, the source text, and the parsed tree. The source
/// is kept alongside the tree because tree-sitter nodes resolve their text against it.
#[derive(Debug)]
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// The source text the tree was parsed from
    pub source: String,
    /// The parsed syntax tree
    pub tree: Tree,
}

impl JavaParser {
    /// Parses a single Java source file into a syntax tree.
    ///
    /// This method reads the file content and parses it with tree-sitter. Syntax
    /// errors in the source do not cause a failure; the resulting tree simply
    /// contains error nodes around the malformed regions.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the Java source file to parse
    ///
    /// # Returns
    ///
    /// Returns a `ParsedFile` containing the file path, source text, and syntax tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the parser yields no tree at all.
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        debug!("Parsing file: {}", path.display());

        // Read file content
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let parsed = Self::parse_source(path, content)?;

        debug!("Successfully parsed file: {}", path.display());

        Ok(parsed)
    }

    /// Parses Java source text that is already in memory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to associate with the parsed file (used in reports)
    /// * `source` - The Java source text to parse
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the parser yields no tree.
    pub fn parse_source(path: &Path, source: String) -> Result<ParsedFile> {
        let language: tree_sitter::Language = tree_sitter_java::LANGUAGE.into();

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&language)
            .context("Failed to load the Java grammar")?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| anyhow!("Parser produced no tree for: {}", path.display()))?;

        Ok(ParsedFile {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }

    /// Parses multiple Java source files, continuing even if some fail.
    ///
    /// Files are parsed on a bounded worker pool, one task per file, and the results
    /// are merged back in input order so the outcome is deterministic. Files that
    /// fail to parse are logged as warnings, but parsing continues for remaining
    /// files. This allows the tool to report a partial inventory even when some
    /// files are unreadable.
    ///
    /// # Arguments
    ///
    /// * `paths` - Slice of file paths to parse
    ///
    /// # Returns
    ///
    /// Returns a vector of `Result<ParsedFile>`, one for each input path, in input
    /// order.
    pub fn parse_files(paths: &[PathBuf]) -> Vec<Result<ParsedFile>> {
        debug!("Parsing {} files", paths.len());

        let results: Vec<Result<ParsedFile>> = paths
            .par_iter()
            .map(|path| match Self::parse_file(path) {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Err(e)
                }
            })
            .collect();

        let success_count = results.iter().filter(|r| r.is_ok()).count();
        let failure_count = results.len() - success_count;

        debug!(
            "Parsing complete: {} succeeded, {} failed",
            success_count, failure_count
        );

        results
    }
}
