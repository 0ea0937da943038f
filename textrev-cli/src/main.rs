//! textrev - string reversal techniques

use anyhow::Result;
use clap::Parser;
use textrev_cli::commands::Cli;

fn main() -> Result<()> {
    Cli::parse().execute()
}
