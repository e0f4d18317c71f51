//! # model-gen
//!
//! CLI tool for generating TypeScript content models from CMS
//! content-type schemas.
//!
//! ## Usage
//!
//! ```bash
//! # Generate models from a content-type snapshot
//! model-gen generate --input types.json
//!
//! # Generate into a specific output directory with camelCase properties
//! model-gen generate --input types.json --output ./models --name-resolver camelCase
//!
//! # Preview output without writing files
//! model-gen generate --input types.json --dry-run
//!
//! # Initialize configuration
//! model-gen init
//!
//! # Check that generated models are up-to-date
//! model-gen validate --input types.json
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use content_model_gen::{
    config::{CliArgs, ConfigManager},
    error::CliError,
    generator::ModelGenerator,
    report::ConsoleReporter,
    source::SchemaSource,
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "model-gen")]
#[command(author, version, about = "Generate TypeScript content models from content-type schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript models from a content-type snapshot
    Generate {
        /// Content-type snapshot file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for generated model files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Property-name resolver (camelCase, PascalCase, snake_case)
        #[arg(short, long)]
        name_resolver: Option<String>,

        /// Record a generation timestamp in each file header
        #[arg(short, long)]
        timestamp: bool,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new model-gen configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "model-gen.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that generated models are up-to-date
    Validate {
        /// Content-type snapshot file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory containing generated model files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e {
                CliError::Validation(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            name_resolver,
            timestamp,
            dry_run,
            config,
        } => cmd_generate(input, output, name_resolver, timestamp, dry_run, config),

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Validate {
            input,
            output,
            config,
        } => cmd_validate(input, output, config),
    }
}

/// Generate command implementation.
fn cmd_generate(
    input: PathBuf,
    output: Option<PathBuf>,
    name_resolver: Option<String>,
    timestamp: bool,
    dry_run: bool,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output,
            name_resolver,
            add_timestamp: timestamp.then_some(true),
        },
    );

    println!("{}", "Loading content types...".cyan());

    let types = SchemaSource::new(&input).load()?;

    if types.is_empty() {
        println!("{}", "No content types found.".yellow());
        return Ok(());
    }

    println!(
        "  Found {} content type(s)",
        types.len().to_string().green()
    );

    println!("{}", "Generating models...".cyan());

    let generator = ModelGenerator::new(config.generator_options());
    let mut reporter = ConsoleReporter;
    let files = generator.generate_models(&types, &mut reporter)?;

    let writer = FileWriter::new(dry_run);
    for file in &files {
        let path = config.output.dir.join(&file.filename);
        match writer.write(&path, &file.content)? {
            WriteResult::Written { path, bytes } => {
                println!(
                    "{} Written {} bytes to {}",
                    "✓".green(),
                    bytes,
                    path.display()
                );
            }
            WriteResult::DryRun { path, content } => {
                println!(
                    "{} Would write to {}:",
                    "[dry-run]".yellow(),
                    path.display()
                );
                println!("{}", "─".repeat(60).dimmed());
                print!("{content}");
                println!("{}", "─".repeat(60).dimmed());
            }
        }
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(
            "Configuration file already exists".to_string(),
        ));
    }

    let content = ConfigManager::default_config_content();
    std::fs::write(&output, content)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output,
            ..Default::default()
        },
    );

    println!("{}", "Validating models...".cyan());

    let types = SchemaSource::new(&input).load()?;

    let generator = ModelGenerator::new(config.generator_options());
    let mut reporter = ConsoleReporter;
    let files = generator.generate_models(&types, &mut reporter)?;

    let mut stale = Vec::new();
    for file in &files {
        let path = config.output.dir.join(&file.filename);
        match std::fs::read_to_string(&path) {
            Ok(existing) if existing.trim() == file.content.trim() => {}
            _ => stale.push(file.filename.clone()),
        }
    }

    if stale.is_empty() {
        println!("{} Models are up-to-date", "✓".green());
        Ok(())
    } else {
        println!("{} {} model(s) out of date:", "✗".red(), stale.len());
        for filename in &stale {
            println!("  {filename}");
        }
        println!("  Run 'model-gen generate' to update");
        Err(CliError::Validation(format!(
            "{} model(s) out of date",
            stale.len()
        )))
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
