//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `model-gen.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use crate::formatter::FormatOptions;
use crate::generator::GeneratorOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "model-gen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Naming conventions.
    pub naming: NamingConfig,

    /// Generation flags.
    pub generation: GenerationConfig,

    /// Formatter options, passed through to the formatter unchanged.
    pub formatter: FormatOptions,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated model files.
    pub dir: PathBuf,
}

/// Naming convention configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Built-in property-name resolver (camelCase, PascalCase,
    /// snake_case). When unset, element codenames are used unchanged.
    pub element_resolver: Option<String>,
}

/// Generation flags.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Record a generation timestamp in each file header.
    pub add_timestamp: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./models"),
        }
    }
}

impl Config {
    /// Build generator options from this configuration.
    ///
    /// A custom resolver can only be supplied through the library API,
    /// not the config file.
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            add_timestamp: self.generation.add_timestamp,
            name_resolver: self.naming.element_resolver.clone(),
            custom_resolver: None,
            formatter: self.formatter.clone(),
        }
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))?;

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref resolver) = args.name_resolver {
            config.naming.element_resolver = Some(resolver.clone());
        }

        if let Some(add_timestamp) = args.add_timestamp {
            config.generation.add_timestamp = add_timestamp;
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# model-gen configuration file

[output]
# Output directory for generated TypeScript model files
dir = "./models"

[naming]
# Property-name resolver applied to element codenames.
# One of: camelCase, PascalCase, snake_case. Remove to keep codenames unchanged.
element_resolver = "camelCase"

[generation]
# Record a generation timestamp in each file header.
# Note: timestamped output is not byte-stable across runs.
add_timestamp = false

[formatter]
# Spaces per indentation level
indent_width = 2

# Ensure generated files end with a newline
insert_final_newline = true
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Property-name resolver override.
    pub name_resolver: Option<String>,

    /// Timestamp flag override.
    pub add_timestamp: Option<bool>,
}
