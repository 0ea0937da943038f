//! textrev CLI library
//!
//! This library provides the command-line interface and the interactive
//! session for the textrev string reversal demo.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod session;

pub use error::{CliError, CliResult};
pub use session::{InteractiveSession, SessionState};
