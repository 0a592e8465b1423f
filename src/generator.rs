//! End-to-end generation workflow: scan, parse, discover, extract, assemble.
//!
//! The result is a [`GenerationReport`] carrying the document together with every warning
//! collected along the way, so the caller decides how to surface them instead of having
//! failures silently dropped during scanning.

use crate::discovery;
use crate::extractor;
use crate::metadata::ProjectMetadata;
use crate::parser::AstParser;
use crate::scanner::SourceScanner;
use crate::swagger::{DocumentBuilder, SwaggerDocument};
use anyhow::Result;
use log::{debug, info, warn};
use std::path::Path;

/// The outcome of one generation run.
pub struct GenerationReport {
    /// The assembled document
    pub document: SwaggerDocument,
    /// Structured warnings collected during scanning, parsing and extraction
    pub warnings: Vec<String>,
}

/// Runs one full generation pass over the project.
///
/// A project with no annotated controllers produces a document with no paths; that is not an
/// error. Fatal conditions are an inaccessible project root, malformed recognized attributes,
/// and the defensive unsupported-mapping case.
pub fn generate(
    project_path: &Path,
    scan_package: &str,
    metadata: &ProjectMetadata,
) -> Result<GenerationReport> {
    let mut warnings = Vec::new();

    // Step 1: scan the project directory for source files
    info!("Scanning project directory...");
    let scanner = SourceScanner::new(project_path.to_path_buf());
    let scan_result = scanner.scan()?;
    warnings.extend(scan_result.warnings);

    info!("Found {} source files", scan_result.source_files.len());
    if scan_result.source_files.is_empty() {
        let warning = format!("No Rust source files found in {}", project_path.display());
        warn!("{}", warning);
        warnings.push(warning);
    }

    // Step 2: parse sources into ASTs, continuing past per-file failures
    let (parsed_files, parse_warnings) = AstParser::parse_files(&scan_result.source_files);
    warnings.extend(parse_warnings);
    info!("Successfully parsed {} files", parsed_files.len());

    // Step 3: discover group-annotated types under the scan package
    let api_types = discovery::find_api_types(&parsed_files, scan_package)?;
    info!(
        "Discovered {} annotated type(s) under {}",
        api_types.len(),
        scan_package
    );

    // Step 4: extract route descriptors
    let extraction = extractor::extract_routes(&api_types)?;
    warnings.extend(extraction.warnings);
    info!("Extracted {} route(s)", extraction.routes.len());

    if extraction.routes.is_empty() {
        warn!("No routes found under {}", scan_package);
    }

    // Step 5: assemble the document
    let mut builder = DocumentBuilder::new(metadata);
    for route in &extraction.routes {
        debug!("Adding route {}", route.url);
        builder.add_route(route);
    }

    Ok(GenerationReport {
        document: builder.build(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::load_project_metadata;
    use std::fs;
    use tempfile::TempDir;

    fn metadata() -> ProjectMetadata {
        ProjectMetadata {
            name: "demo".to_string(),
            description: None,
            licenses: Vec::new(),
        }
    }

    #[test]
    fn test_empty_project_yields_empty_document() {
        let temp_dir = TempDir::new().unwrap();

        let report = generate(temp_dir.path(), "crate", &metadata()).unwrap();

        assert!(report.document.paths.is_empty());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("No Rust source files")));
    }

    #[test]
    fn test_simple_controller_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        fs::write(
            temp_dir.path().join("src/main.rs"),
            r#"
            #[api_group(tags("users"))]
            #[rest_controller]
            #[request_mapping("/api")]
            pub struct UserController;

            impl UserController {
                #[get_mapping("/users")]
                pub fn list(&self) {}
            }
            "#,
        )
        .unwrap();

        let report = generate(temp_dir.path(), "crate", &metadata()).unwrap();

        assert_eq!(report.document.paths.len(), 1);
        assert!(report.document.paths.contains_key("/api/users"));
        assert!(report.document.paths["/api/users"].get.is_some());
        assert_eq!(report.document.tags.len(), 1);
        assert_eq!(report.document.tags[0].name, "users");
    }

    #[test]
    fn test_unparsable_file_becomes_warning() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("src/broken.rs"), "fn broken( {").unwrap();
        fs::write(
            temp_dir.path().join("src/main.rs"),
            r#"
            #[api_group(tags("ok"))]
            #[rest_controller]
            pub struct OkController;

            impl OkController {
                #[get_mapping("/ok")]
                pub fn ok(&self) {}
            }
            "#,
        )
        .unwrap();

        let report = generate(temp_dir.path(), "crate", &metadata()).unwrap();

        assert!(report.document.paths.contains_key("/ok"));
        assert!(report.warnings.iter().any(|w| w.contains("broken.rs")));
    }

    #[test]
    fn test_metadata_flows_into_info() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("Cargo.toml"),
            "[package]\nname = \"titled\"\nversion = \"0.1.0\"\ndescription = \"desc\"\nlicense = \"MIT\"\n",
        )
        .unwrap();

        let (metadata, _) = load_project_metadata(temp_dir.path());
        let report = generate(temp_dir.path(), "crate", &metadata).unwrap();

        assert_eq!(report.document.info.title, "titled");
        assert_eq!(report.document.info.description.as_deref(), Some("desc"));
        assert_eq!(report.document.info.license.unwrap().name, "MIT");
    }
}
