//! Swagger generator - a Swagger 2.0 document from annotated Rust controller types.
//!
//! This library generates a Swagger 2.0 descriptor of a project's HTTP API surface by
//! analyzing its source code. Controller types are marked with a structural attribute
//! vocabulary mirroring the common controller/mapping annotations (`#[api_group]`,
//! `#[rest_controller]`, `#[request_mapping]`, verb shorthands, parameter markers), and the
//! tool extracts route metadata (URL patterns, HTTP verbs, parameters) statically - the
//! scanned project is parsed, never compiled.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`scanner`] - Recursively scans project directories for Rust files and derives module paths
//! 2. [`parser`] - Parses Rust source files into Abstract Syntax Trees (AST)
//! 3. [`discovery`] - Finds group-annotated types under the configured scan package
//! 4. [`attrs`] - The recognized attribute vocabulary and its argument grammar
//! 5. [`extractor`] - Extracts route descriptors (URLs, verbs, parameters) from discovered types
//! 6. [`metadata`] - Reads project metadata from the scanned project's Cargo.toml
//! 7. [`swagger`] - The Swagger 2.0 document model and builder
//! 8. [`generator`] - The end-to-end workflow, returning a document plus warnings
//! 9. [`serializer`] - Serializes the document to JSON or YAML and writes it to disk
//!
//! # Example Usage
//!
//! ```no_run
//! use swagger_from_source::{
//!     generator,
//!     metadata::load_project_metadata,
//!     serializer::{serialize_json, write_document},
//! };
//! use std::path::Path;
//!
//! let project = Path::new("./my-project");
//! let (metadata, _warnings) = load_project_metadata(project);
//! let report = generator::generate(project, "crate", &metadata).unwrap();
//! let json = serialize_json(&report.document).unwrap();
//! write_document(&json, Path::new("target/generated-api"), "swagger.json").unwrap();
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod attrs;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod metadata;
pub mod parser;
pub mod scanner;
pub mod serializer;
pub mod swagger;
