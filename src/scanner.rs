use anyhow::Result;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Source scanner for traversing project directories.
///
/// The `SourceScanner` recursively walks through a project directory to find all Rust source
/// files and derives the module path each file contributes to the crate. It automatically skips
/// common directories that should be ignored, such as `target` and hidden directories (those
/// starting with `.`).
///
/// # Example
///
/// ```no_run
/// use swagger_from_source::scanner::SourceScanner;
/// use std::path::PathBuf;
///
/// let scanner = SourceScanner::new(PathBuf::from("./my-project"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} source files", result.source_files.len());
/// ```
pub struct SourceScanner {
    root_path: PathBuf,
}

/// A discovered Rust source file together with its derived module path.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path to the `.rs` file on disk
    pub path: PathBuf,
    /// Module path of the file within the crate (e.g. `crate::controllers::user`)
    pub module_path: String,
}

/// Result of directory scanning operation.
///
/// Contains the list of discovered source files and any warnings encountered during scanning.
/// Warnings are surfaced to the caller instead of being swallowed, so the final generation
/// report can carry them.
pub struct ScanResult {
    /// All discovered `.rs` files with their module paths
    pub source_files: Vec<SourceFile>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

impl SourceScanner {
    /// Creates a new `SourceScanner` for the specified project root directory.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Scans the directory tree and collects all `.rs` files.
    ///
    /// This method recursively traverses the directory tree starting from the root path,
    /// collecting all files with the `.rs` extension. It automatically skips:
    /// - The `target` directory (build artifacts)
    /// - Hidden directories (starting with `.`)
    ///
    /// If any directories or files cannot be accessed, warnings are logged and added to
    /// the result, but scanning continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be accessed.
    pub fn scan(&self) -> Result<ScanResult> {
        let mut source_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .into_iter()
            .filter_entry(|e| {
                // Don't filter the root directory itself
                if e.path() == self.root_path {
                    return true;
                }

                // Skip target directory and hidden directories
                let file_name = e.file_name().to_string_lossy();
                let is_hidden = file_name.starts_with('.');
                let is_target = file_name == "target";

                !is_hidden && !is_target
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();

                    if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("rs") {
                        let module_path = derive_module_path(&self.root_path, path);
                        source_files.push(SourceFile {
                            path: path.to_path_buf(),
                            module_path,
                        });
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

        Ok(ScanResult {
            source_files,
            warnings,
        })
    }
}

/// Derives the module path a source file contributes to the crate.
///
/// The leading `src` component is dropped, `main.rs`, `lib.rs` and `mod.rs` map to their
/// containing directory, and every other file maps to a module named after its stem.
/// Examples: `src/main.rs` -> `crate`, `src/controllers/user.rs` ->
/// `crate::controllers::user`, `src/controllers/mod.rs` -> `crate::controllers`.
fn derive_module_path(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);

    let mut segments: Vec<String> = Vec::new();
    for component in relative.components() {
        let name = component.as_os_str().to_string_lossy().to_string();
        segments.push(name);
    }

    if segments.first().map(String::as_str) == Some("src") {
        segments.remove(0);
    }

    // Replace the file name with its module segment
    if let Some(file_name) = segments.pop() {
        let stem = file_name.trim_end_matches(".rs");
        if !matches!(stem, "main" | "lib" | "mod") {
            segments.push(stem.to_string());
        }
    }

    if segments.is_empty() {
        "crate".to_string()
    } else {
        format!("crate::{}", segments.join("::"))
    }
}
