//! Configuration module

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use textrev_core::{check_recursion_limit, DEFAULT_RECURSION_LIMIT, MAX_RECURSION_LIMIT};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Reversal configuration
    #[serde(default)]
    pub reversal: ReversalConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Reversal-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReversalConfig {
    /// Longest input reversed by a single recursion chain
    pub recursion_limit: usize,
}

impl Default for ReversalConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format for the `reverse` command
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            log::debug!("No configuration file given, using defaults");
            return Ok(Self::default());
        };

        log::info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that the TOML schema cannot express
    pub fn validate(&self) -> CliResult<()> {
        check_recursion_limit(self.reversal.recursion_limit)
            .map_err(|e| CliError::ConfigError(format!("reversal.recursion_limit: {e}")))?;
        Ok(())
    }

    /// Build the core reverser configuration
    pub fn core_config(&self) -> CliResult<textrev_core::Config> {
        textrev_core::Config::builder()
            .recursion_limit(self.reversal.recursion_limit)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Commented template with every key at its default
    pub fn template() -> String {
        format!(
            r#"# textrev configuration

[reversal]
# Longest input reversed by a single recursion chain, 1 to {MAX_RECURSION_LIMIT}.
# Longer input is halved recursively until each piece fits.
recursion_limit = {DEFAULT_RECURSION_LIMIT}

[output]
# Default format for `textrev reverse`: "text" or "json"
default_format = "text"

# Pretty print JSON output
pretty_json = true
"#
        )
    }
}
