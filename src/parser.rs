use crate::scanner::SourceFile;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

/// AST (Abstract Syntax Tree) parser for Rust source files.
///
/// The `AstParser` uses the `syn` crate to parse Rust source code into an abstract syntax tree,
/// which is then analyzed to discover annotated controller types and their route metadata.
pub struct AstParser;

/// A successfully parsed Rust file with its abstract syntax tree.
///
/// Carries the file path, the module path the file contributes to the crate, and the parsed
/// syntax tree structure.
#[derive(Debug)]
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// Module path of the file within the crate (e.g. `crate::controllers::user`)
    pub module_path: String,
    /// The parsed abstract syntax tree
    pub syntax_tree: syn::File,
}

impl AstParser {
    /// Parses a single Rust source file into an AST.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid Rust syntax
    pub fn parse_file(source: &SourceFile) -> Result<ParsedFile> {
        debug!("Parsing file: {}", source.path.display());

        let content = fs::read_to_string(&source.path)
            .with_context(|| format!("Failed to read file: {}", source.path.display()))?;

        let syntax_tree = syn::parse_file(&content).with_context(|| {
            format!(
                "Failed to parse Rust syntax in file: {}",
                source.path.display()
            )
        })?;

        Ok(ParsedFile {
            path: source.path.clone(),
            module_path: source.module_path.clone(),
            syntax_tree,
        })
    }

    /// Parses multiple Rust source files, continuing even if some fail.
    ///
    /// Files that fail to parse are logged as warnings and reported back to the caller, but
    /// parsing continues for the remaining files. This allows the tool to generate partial
    /// documentation even when some files have syntax errors.
    ///
    /// # Returns
    ///
    /// Returns the successfully parsed files together with one warning message per failure.
    pub fn parse_files(sources: &[SourceFile]) -> (Vec<ParsedFile>, Vec<String>) {
        debug!("Parsing {} files", sources.len());

        let mut parsed_files = Vec::new();
        let mut warnings = Vec::new();

        for source in sources {
            match Self::parse_file(source) {
                Ok(parsed) => parsed_files.push(parsed),
                Err(e) => {
                    let warning = format!("Skipping {}: {:#}", source.path.display(), e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        debug!(
            "Parsing complete: {} succeeded, {} failed",
            parsed_files.len(),
            warnings.len()
        );

        (parsed_files, warnings)
    }
}
