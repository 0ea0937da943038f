//! Reverse command implementation

use crate::config::CliConfig;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use textrev_core::{Method, Reverser};

/// Arguments for the reverse command
#[derive(Debug, Args)]
pub struct ReverseArgs {
    /// Text to reverse
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Reversal method (repeatable; default: all)
    #[arg(short, long, value_name = "METHOD")]
    pub method: Vec<Method>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ReverseArgs {
    /// Execute the reverse command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(config, stdout.lock())
    }

    /// Reverse and write the formatted result to `writer`
    pub fn write_to<'w, W: Write + 'w>(&self, config: &CliConfig, writer: W) -> Result<()> {
        let reverser = Reverser::with_config(config.core_config()?);
        let methods = self.methods();
        log::info!(
            "Reversing {} chars with {} method(s)",
            self.text.chars().count(),
            methods.len()
        );

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter: Box<dyn OutputFormatter + 'w> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        for reversal in reverser.reverse_each(&methods, &self.text) {
            formatter.format_reversal(&reversal)?;
        }
        formatter.finish().context("Failed to write output")
    }

    fn methods(&self) -> Vec<Method> {
        if self.method.is_empty() {
            Method::ALL.to_vec()
        } else {
            self.method.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: ReverseArgs, config: &CliConfig) -> String {
        let mut buffer = Vec::new();
        args.write_to(config, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_all_methods_by_default() {
        let args = ReverseArgs {
            text: "abc".to_string(),
            method: Vec::new(),
            format: None,
        };
        let output = run(args, &CliConfig::default());
        assert_eq!(output.lines().count(), 6);
        assert!(output.starts_with("Using StringBuilder: cba\n"));
    }

    #[test]
    fn test_selected_methods_keep_order() {
        let args = ReverseArgs {
            text: "ab cd".to_string(),
            method: vec![Method::Words, Method::Stack],
            format: Some(OutputFormat::Text),
        };
        let output = run(args, &CliConfig::default());
        assert_eq!(output, "Reverse Words Only: ba dc\nUsing Stack: dc ba\n");
    }

    #[test]
    fn test_format_from_config() {
        let config =
            CliConfig::from_toml("[output]\ndefault_format = \"json\"\npretty_json = false\n")
                .unwrap();
        let args = ReverseArgs {
            text: "ab".to_string(),
            method: vec![Method::Recursion],
            format: None,
        };
        assert_eq!(
            run(args, &config),
            "[{\"method\":\"recursion\",\"input\":\"ab\",\"output\":\"ba\"}]\n"
        );
    }
}
