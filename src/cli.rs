use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Swagger generator - generate a Swagger 2.0 document from annotated controller types
#[derive(Parser, Debug)]
#[command(name = "swagger-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the Rust project directory
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: PathBuf,

    /// Module path to scan for annotated controllers (the package and its sub-modules)
    #[arg(short = 'p', long = "package", default_value = "crate")]
    pub scan_package: String,

    /// Output directory for the generated document
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = "target/generated-api"
    )]
    pub output_dir: PathBuf,

    /// Output format (json or yaml)
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Override the document title (defaults to the project's Cargo.toml name)
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Override the document description
    #[arg(long = "description")]
    pub description: Option<String>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// JSON format, written as swagger.json
    Json,
    /// YAML format, written as swagger.yaml
    Yaml,
}

impl OutputFormat {
    /// File name of the generated document for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "swagger.json",
            OutputFormat::Yaml => "swagger.yaml",
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    // Validate project path exists
    if !args.project_path.exists() {
        anyhow::bail!(
            "Project path does not exist: {}",
            args.project_path.display()
        );
    }

    // Validate project path is a directory
    if !args.project_path.is_dir() {
        anyhow::bail!(
            "Project path is not a directory: {}",
            args.project_path.display()
        );
    }

    if args.scan_package.is_empty() {
        anyhow::bail!("Scan package must not be empty");
    }

    info!("Project path: {}", args.project_path.display());
    info!("Scan package: {}", args.scan_package);
    info!("Output directory: {}", args.output_dir.display());
    info!("Output format: {:?}", args.output_format);

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::generator;
    use crate::metadata::load_project_metadata;
    use crate::serializer::{serialize_json, serialize_yaml, write_document};

    info!("Starting Swagger document generation...");

    // Step 1: project metadata from the scanned project's Cargo.toml
    let (mut metadata, metadata_warnings) = load_project_metadata(&args.project_path);
    if let Some(title) = &args.title {
        metadata.name = title.clone();
    }
    if let Some(description) = &args.description {
        metadata.description = Some(description.clone());
    }

    // Step 2: generate the document
    let report = generator::generate(&args.project_path, &args.scan_package, &metadata)?;

    // Step 3: surface every collected warning
    let warning_count = metadata_warnings.len() + report.warnings.len();
    for warning in metadata_warnings.iter().chain(report.warnings.iter()) {
        warn!("{}", warning);
    }

    // Step 4: serialize and write
    let content = match args.output_format {
        OutputFormat::Json => serialize_json(&report.document)?,
        OutputFormat::Yaml => serialize_yaml(&report.document)?,
    };

    let file_name = args.output_format.file_name();
    let written = write_document(&content, &args.output_dir, file_name)?;
    info!("Wrote {}", written.display());

    // Step 5: summary
    info!("Generation complete!");
    info!("  - Paths: {}", report.document.paths.len());
    info!("  - Tags: {}", report.document.tags.len());
    info!("  - Warnings: {}", warning_count);

    Ok(())
}
