use log::warn;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File scanner for traversing project directories.
///
/// The `FileScanner` recursively walks through a project directory to find all
/// controller sources, identified by the Spring naming convention of a file name
/// ending in `Controller.java`. It automatically skips build output directories
/// (`target` for Maven, `build` for Gradle) and hidden directories (those starting
/// with `.`).
///
/// # Example
///
/// ```no_run
/// use endpoints_from_source::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./my-spring-project"));
/// let result = scanner.scan();
/// println!("Found {} controller files", result.controller_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
}

/// Result of directory scanning operation.
///
/// Contains the list of discovered controller files and any warnings encountered
/// during scanning.
pub struct ScanResult {
    /// List of paths to all discovered `*Controller.java` files, in walk order
    pub controller_files: Vec<PathBuf>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

/// File name suffix that marks a controller source file.
const CONTROLLER_SUFFIX: &str = "Controller.java";

impl FileScanner {
    /// Creates a new `FileScanner` for the specified root directory.
    ///
    /// # Arguments
    ///
    /// * `root_path` - The root directory to scan for controller files
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Scans the directory tree and collects all `*Controller.java` files.
    ///
    /// This method recursively traverses the directory tree starting from the root
    /// path. Entries are visited in file-name-sorted order so that two scans of an
    /// unchanged tree yield the same list. It automatically skips:
    /// - The `target` and `build` directories (Maven/Gradle output)
    /// - Hidden directories (starting with `.`)
    ///
    /// Scanning never fails: a missing root directory or an inaccessible
    /// subdirectory yields a warning in the result and scanning continues with
    /// whatever remains.
    ///
    /// # Returns
    ///
    /// Returns a `ScanResult` containing the list of discovered files and any warnings.
    pub fn scan(&self) -> ScanResult {
        let mut controller_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                // Don't filter the root directory itself
                if e.path() == self.root_path {
                    return true;
                }

                // Skip build output and hidden directories
                let file_name = e.file_name().to_string_lossy();
                let is_hidden = file_name.starts_with('.');
                let is_build_output = file_name == "target" || file_name == "build";

                !is_hidden && !is_build_output
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();

                    // Check for the controller naming convention
                    let is_controller = path
                        .file_name()
                        .map(|name| name.to_string_lossy().ends_with(CONTROLLER_SUFFIX))
                        .unwrap_or(false);

                    if path.is_file() && is_controller {
                        controller_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    // Record warning for inaccessible directories/files
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        ScanResult {
            controller_files,
            warnings,
        }
    }
}
