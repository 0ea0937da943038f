//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod generate_config;
pub mod interactive;
pub mod list;
pub mod reverse;

/// String reversal techniques, interactively or one-shot
#[derive(Debug, Parser)]
#[command(name = "textrev", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "TEXTREV_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive session (default)
    Interactive,

    /// Reverse a single string and exit
    Reverse(reverse::ReverseArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available reversal methods
    Methods,
}

impl Cli {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        match &self.command {
            None | Some(Commands::Interactive) => interactive::execute(&self.load_config()?),
            Some(Commands::Reverse(args)) => args.execute(&self.load_config()?),
            Some(Commands::List {
                subcommand: ListCommands::Methods,
            }) => list::execute_methods(),
            Some(Commands::GenerateConfig(args)) => args.execute(),
        }
    }

    fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["textrev"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["textrev", "list", "methods", "-vv", "-q"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                subcommand: ListCommands::Methods
            })
        ));
    }

    #[test]
    fn test_reverse_args() {
        let cli =
            Cli::try_parse_from(["textrev", "reverse", "-m", "stack", "-m", "loop", "hi"]).unwrap();
        match cli.command {
            Some(Commands::Reverse(args)) => {
                assert_eq!(args.text, "hi");
                assert_eq!(args.method.len(), 2);
            }
            other => panic!("Should be Reverse, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!(Cli::try_parse_from(["textrev", "reverse", "-m", "bogo", "hi"]).is_err());
    }
}
