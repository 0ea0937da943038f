//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use textrev_core::Reversal;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single reversal
    fn format_reversal(&mut self, reversal: &Reversal) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `label: output` line per method
    Text,
    /// JSON array of reversals
    Json,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
