//! Serialization of the Swagger document to JSON or YAML and writing it to the output
//! directory.

use crate::error::{Error, Result};
use crate::swagger::SwaggerDocument;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Serializes a Swagger document to pretty-printed JSON.
///
/// Pretty printing keeps the generated file reviewable and diff-friendly under version
/// control.
pub fn serialize_json(doc: &SwaggerDocument) -> Result<String> {
    debug!("Serializing Swagger document to JSON");
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Serializes a Swagger document to YAML.
pub fn serialize_yaml(doc: &SwaggerDocument) -> Result<String> {
    debug!("Serializing Swagger document to YAML");
    Ok(serde_yaml::to_string(doc)?)
}

/// Writes the serialized document into the output directory under the given file name.
///
/// The output directory (and any missing parents) is created first. A failure to create the
/// directory or write the file is fatal and names the target directory.
///
/// # Returns
///
/// Returns the full path of the written file.
pub fn write_document(content: &str, output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    debug!(
        "Writing {} bytes to {}/{}",
        content.len(),
        output_dir.display(),
        file_name
    );

    fs::create_dir_all(output_dir).map_err(|source| Error::WriteError {
        directory: output_dir.to_path_buf(),
        source,
    })?;

    let file_path = output_dir.join(file_name);
    fs::write(&file_path, content).map_err(|source| Error::WriteError {
        directory: output_dir.to_path_buf(),
        source,
    })?;

    debug!("Successfully wrote {}", file_path.display());
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::{Info, SwaggerDocument};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    /// Helper function to create a minimal Swagger document for testing
    fn create_test_document() -> SwaggerDocument {
        SwaggerDocument {
            swagger: "2.0".to_string(),
            info: Info {
                title: "Test API".to_string(),
                description: Some("A test API".to_string()),
                license: None,
            },
            tags: Vec::new(),
            paths: BTreeMap::new(),
        }
    }

    #[test]
    fn test_serialize_json() {
        let doc = create_test_document();
        let json = serialize_json(&doc).unwrap();

        assert!(json.contains("\"swagger\""));
        assert!(json.contains("\"2.0\""));
        assert!(json.contains("\"info\""));
        assert!(json.contains("\"Test API\""));
        assert!(json.contains("\"paths\""));

        // Verify it's valid JSON by parsing it back
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["swagger"], "2.0");
        assert_eq!(parsed["info"]["title"], "Test API");
    }

    #[test]
    fn test_serialize_json_pretty_format() {
        let doc = create_test_document();
        let json = serialize_json(&doc).unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("  "));
    }

    #[test]
    fn test_serialize_yaml() {
        let doc = create_test_document();
        let yaml = serialize_yaml(&doc).unwrap();

        assert!(yaml.contains("swagger:"));
        assert!(yaml.contains("2.0"));
        assert!(yaml.contains("title: Test API"));
        assert!(yaml.contains("paths:"));
    }

    #[test]
    fn test_empty_collections_are_omitted() {
        let doc = create_test_document();
        let json = serialize_json(&doc).unwrap();

        // No tags key for an empty tag list, no license for a missing license
        assert!(!json.contains("\"tags\""));
        assert!(!json.contains("\"license\""));
    }

    #[test]
    fn test_write_document() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("generated-api");

        let written = write_document("{}", &output_dir, "swagger.json").unwrap();

        assert!(written.exists());
        assert_eq!(written, output_dir.join("swagger.json"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "{}");
    }

    #[test]
    fn test_write_document_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("a").join("b").join("c");

        let written = write_document("content", &output_dir, "swagger.json").unwrap();
        assert!(written.exists());
    }

    #[test]
    fn test_write_document_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().to_path_buf();

        write_document("old", &output_dir, "swagger.json").unwrap();
        write_document("new", &output_dir, "swagger.json").unwrap();

        let content = fs::read_to_string(output_dir.join("swagger.json")).unwrap();
        assert_eq!(content, "new");
    }

    #[test]
    fn test_write_failure_names_the_directory() {
        let temp_dir = TempDir::new().unwrap();
        // A file where the output directory should be
        let blocker = temp_dir.path().join("blocked");
        fs::write(&blocker, "file, not a directory").unwrap();

        let result = write_document("content", &blocker, "swagger.json");

        let err = result.unwrap_err();
        assert!(matches!(err, Error::WriteError { .. }));
        assert!(err.to_string().contains("blocked"));
    }

    #[test]
    fn test_roundtrip_json_serialization() {
        let doc = create_test_document();
        let json = serialize_json(&doc).unwrap();

        let deserialized: SwaggerDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.swagger, doc.swagger);
        assert_eq!(deserialized.info.title, doc.info.title);
        assert_eq!(deserialized.info.description, doc.info.description);
    }

    #[test]
    fn test_roundtrip_yaml_serialization() {
        let doc = create_test_document();
        let yaml = serialize_yaml(&doc).unwrap();

        let deserialized: SwaggerDocument = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(deserialized.swagger, doc.swagger);
        assert_eq!(deserialized.info.title, doc.info.title);
    }
}
