//! Error types for the CLI.
//!
//! This module defines all error types used throughout the tool,
//! providing detailed error messages with context for debugging.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error loading content-type schemas.
    #[error("Failed to load content types: {0}")]
    Source(#[from] SourceError),

    /// Error during model generation.
    #[error("Failed to generate models: {0}")]
    Generate(#[from] GeneratorError),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Validation failed (models out of date).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error loading the content-type snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Snapshot file does not exist.
    #[error("Content type file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Snapshot is not valid JSON or has an unexpected shape.
    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: PathBuf, message: String },

    /// IO error reading the snapshot.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error during model generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Unrecognized name-resolver identifier.
    #[error(
        "Invalid name resolver '{given}': expected one of camelCase, PascalCase, snake_case"
    )]
    InvalidNameResolver { given: String },

    /// The assembled declaration could not be formatted.
    #[error("Failed to format model for '{codename}': {source}")]
    Format {
        codename: String,
        #[source]
        source: FormatError,
    },
}

/// Error formatting generated TypeScript text.
#[derive(Debug, Error)]
pub enum FormatError {
    /// An opening brace was never closed.
    #[error("Syntax error: unclosed '{{' opened at line {line}")]
    UnclosedBrace { line: usize },

    /// A closing brace had no matching opener.
    #[error("Syntax error: unexpected '}}' at line {line}")]
    UnexpectedBrace { line: usize },
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create the output directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a model file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Create a file not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create an invalid JSON error.
    pub fn invalid_json(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidJson {
            path,
            message: message.into(),
        }
    }
}

impl GeneratorError {
    /// Create an invalid name-resolver error.
    pub fn invalid_resolver(given: impl Into<String>) -> Self {
        Self::InvalidNameResolver {
            given: given.into(),
        }
    }

    /// Wrap a formatter failure with the content type it occurred in.
    pub fn format(codename: impl Into<String>, source: FormatError) -> Self {
        Self::Format {
            codename: codename.into(),
            source,
        }
    }
}

impl ConfigError {
    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}
