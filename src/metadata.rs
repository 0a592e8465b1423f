//! Project metadata for the document `info` section.
//!
//! The original input here is the build tool's project model (name, description, licenses).
//! For a Rust project that model is the scanned project's `Cargo.toml`, read leniently: a
//! missing or malformed manifest degrades to defaults with a warning instead of failing the
//! run, since the manifest only feeds the descriptive header of the document.

use log::warn;
use std::fs;
use std::path::Path;
use toml::Value;

/// One declared license. The manifest's `license` field supplies the name; an optional
/// `[package.metadata.swagger] license-url` supplies the URL.
#[derive(Debug, Clone)]
pub struct LicenseMeta {
    pub name: String,
    pub url: Option<String>,
}

/// Project-level metadata feeding the document's `info` section.
#[derive(Debug, Clone)]
pub struct ProjectMetadata {
    pub name: String,
    pub description: Option<String>,
    pub licenses: Vec<LicenseMeta>,
}

impl ProjectMetadata {
    fn fallback(project_root: &Path) -> Self {
        let name = project_root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Generated API".to_string());
        ProjectMetadata {
            name,
            description: None,
            licenses: Vec::new(),
        }
    }
}

/// Loads project metadata from `<project_root>/Cargo.toml`.
///
/// Returns the metadata together with warnings for anything that could not be read; the
/// fallback title is the project directory name.
pub fn load_project_metadata(project_root: &Path) -> (ProjectMetadata, Vec<String>) {
    let mut warnings = Vec::new();
    let manifest_path = project_root.join("Cargo.toml");

    let content = match fs::read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(e) => {
            let warning = format!(
                "Failed to read {}: {}; using directory name as title",
                manifest_path.display(),
                e
            );
            warn!("{}", warning);
            warnings.push(warning);
            return (ProjectMetadata::fallback(project_root), warnings);
        }
    };

    let manifest: Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let warning = format!(
                "Failed to parse {}: {}; using directory name as title",
                manifest_path.display(),
                e
            );
            warn!("{}", warning);
            warnings.push(warning);
            return (ProjectMetadata::fallback(project_root), warnings);
        }
    };

    let package = manifest.get("package");

    let name = package
        .and_then(|p| p.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| ProjectMetadata::fallback(project_root).name);

    let description = package
        .and_then(|p| p.get("description"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let license_url = package
        .and_then(|p| p.get("metadata"))
        .and_then(|m| m.get("swagger"))
        .and_then(|s| s.get("license-url"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let licenses = package
        .and_then(|p| p.get("license"))
        .and_then(Value::as_str)
        .map(|license| {
            vec![LicenseMeta {
                name: license.to_string(),
                url: license_url,
            }]
        })
        .unwrap_or_default();

    (
        ProjectMetadata {
            name,
            description,
            licenses,
        },
        warnings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_manifest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("Cargo.toml"),
            r#"
            [package]
            name = "demo-api"
            version = "0.1.0"
            description = "A demo HTTP API"
            license = "MIT"

            [package.metadata.swagger]
            license-url = "https://opensource.org/licenses/MIT"
            "#,
        )
        .unwrap();

        let (metadata, warnings) = load_project_metadata(temp_dir.path());

        assert!(warnings.is_empty());
        assert_eq!(metadata.name, "demo-api");
        assert_eq!(metadata.description.as_deref(), Some("A demo HTTP API"));
        assert_eq!(metadata.licenses.len(), 1);
        assert_eq!(metadata.licenses[0].name, "MIT");
        assert_eq!(
            metadata.licenses[0].url.as_deref(),
            Some("https://opensource.org/licenses/MIT")
        );
    }

    #[test]
    fn test_load_minimal_manifest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("Cargo.toml"),
            "[package]\nname = \"bare\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();

        let (metadata, warnings) = load_project_metadata(temp_dir.path());

        assert!(warnings.is_empty());
        assert_eq!(metadata.name, "bare");
        assert!(metadata.description.is_none());
        assert!(metadata.licenses.is_empty());
    }

    #[test]
    fn test_missing_manifest_falls_back_to_directory_name() {
        let temp_dir = TempDir::new().unwrap();

        let (metadata, warnings) = load_project_metadata(temp_dir.path());

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Failed to read"));
        assert_eq!(
            metadata.name,
            temp_dir.path().file_name().unwrap().to_string_lossy()
        );
    }

    #[test]
    fn test_malformed_manifest_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Cargo.toml"), "not toml [[[").unwrap();

        let (metadata, warnings) = load_project_metadata(temp_dir.path());

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Failed to parse"));
        assert!(metadata.licenses.is_empty());
    }
}
