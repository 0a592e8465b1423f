use crate::extractor::{HttpVerb, RouteDescriptor};
use crate::metadata::ProjectMetadata;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Swagger document builder.
///
/// Collects routes into path entries and assembles the final [`SwaggerDocument`]. Path and tag
/// collections are ordered maps so the generated file is deterministic across runs.
pub struct DocumentBuilder {
    info: Info,
    tags: BTreeSet<String>,
    paths: BTreeMap<String, PathItem>,
}

/// Swagger Info object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,
    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// API license
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// Swagger License object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Swagger Tag object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// Swagger PathItem object - all operations defined on a single URL pattern.
///
/// Parameters are attached at the path level and shared across every verb on the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameters: Vec<SwaggerParameter>,
}

/// Swagger Operation object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Swagger Parameter object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwaggerParameter {
    /// Parameter name
    pub name: String,
    /// Parameter location, one of path, query, body, formData
    #[serde(rename = "in")]
    pub location: String,
    /// Parameter description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Complete Swagger 2.0 document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwaggerDocument {
    /// Swagger version
    pub swagger: String,
    /// API info
    pub info: Info,
    /// API tags, one per distinct group name
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<Tag>,
    /// Paths map (URL pattern -> per-verb operations plus shared parameters)
    pub paths: BTreeMap<String, PathItem>,
}

impl DocumentBuilder {
    /// Creates a builder whose `info` section is populated from the project metadata: title
    /// from the project name, description as declared, license name and URL from the first
    /// declared license.
    pub fn new(metadata: &ProjectMetadata) -> Self {
        debug!("Initializing DocumentBuilder for {}", metadata.name);

        let license = metadata.licenses.first().map(|l| License {
            name: l.name.clone(),
            url: l.url.clone(),
        });

        Self {
            info: Info {
                title: metadata.name.clone(),
                description: metadata.description.clone(),
                license,
            },
            tags: BTreeSet::new(),
            paths: BTreeMap::new(),
        }
    }

    /// Replaces the title and/or description, for command-line overrides.
    pub fn override_info(&mut self, title: Option<String>, description: Option<String>) {
        if let Some(title) = title {
            self.info.title = title;
        }
        if let Some(description) = description {
            self.info.description = Some(description);
        }
    }

    /// Adds a route to the document.
    ///
    /// Routes with the same URL merge into one path entry. Each verb's operation replaces any
    /// earlier operation for that verb, and the path-level shared parameter list is replaced
    /// as well - last writer wins. A route with no verbs still registers its path, carrying
    /// parameters but no operations.
    pub fn add_route(&mut self, route: &RouteDescriptor) {
        debug!(
            "Adding route: {} ({} verb(s))",
            route.url,
            route.verbs.len()
        );

        if let Some(tag) = &route.tag {
            self.tags.insert(tag.clone());
        }

        let path_item = self.paths.entry(route.url.clone()).or_default();

        for verb in &route.verbs {
            let operation = Some(Operation {
                summary: route.summary.clone(),
            });
            match verb {
                HttpVerb::Get => path_item.get = operation,
                HttpVerb::Post => path_item.post = operation,
                HttpVerb::Put => path_item.put = operation,
                HttpVerb::Delete => path_item.delete = operation,
            }
        }

        path_item.parameters = route
            .parameters
            .iter()
            .map(|p| SwaggerParameter {
                name: p.name.clone(),
                location: p.kind.swagger_location().to_string(),
                description: p.description.clone(),
            })
            .collect();
    }

    /// Builds the final Swagger document.
    pub fn build(self) -> SwaggerDocument {
        debug!(
            "Building Swagger document: {} path(s), {} tag(s)",
            self.paths.len(),
            self.tags.len()
        );

        SwaggerDocument {
            swagger: "2.0".to_string(),
            info: self.info,
            tags: self.tags.into_iter().map(|name| Tag { name }).collect(),
            paths: self.paths,
        }
    }
}
