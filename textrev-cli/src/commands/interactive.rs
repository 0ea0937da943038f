//! Interactive command implementation

use crate::config::CliConfig;
use crate::session::InteractiveSession;
use anyhow::Result;
use std::io;
use textrev_core::Reverser;

/// Run the interactive session on stdin/stdout
pub fn execute(config: &CliConfig) -> Result<()> {
    let reverser = Reverser::with_config(config.core_config()?);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = InteractiveSession::new(reverser, stdin.lock(), stdout.lock());
    session.run()
}
