//! # content-model-gen
//!
//! Library for generating strongly-typed TypeScript content models from
//! CMS content-type schemas.
//!
//! This crate provides the core functionality for the `model-gen` CLI
//! tool: schema loading, property-name resolution, element-type mapping,
//! declaration assembly, formatting, and file output.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`schema`] - Content-type and element data model
//! - [`source`] - Content-type snapshot loading
//! - [`naming`] - Property-name resolution strategies
//! - [`generator`] - Model generation (the core)
//! - [`formatter`] - TypeScript output formatting
//! - [`report`] - Progress and warning reporting
//! - [`writer`] - File output and dry-run support
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod formatter;
pub mod generator;
pub mod naming;
pub mod report;
pub mod schema;
pub mod source;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use formatter::{FormatOptions, Formatter};
pub use generator::{GeneratedFile, GeneratorOptions, ModelGenerator};
pub use naming::{BuiltinResolver, NameResolution, ResolverFn};
pub use report::{ConsoleReporter, MemoryReporter, Reporter};
pub use schema::{ContentElement, ContentType};
pub use source::SchemaSource;
pub use writer::FileWriter;
