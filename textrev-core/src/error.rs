//! Core error types

use thiserror::Error;

/// Errors raised by the fallible reversal entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input is longer than the configured recursion limit
    #[error("input of {length} chars exceeds recursion limit of {limit}")]
    RecursionLimitExceeded {
        /// Length of the rejected input in chars
        length: usize,
        /// The limit that was in force
        limit: usize,
    },

    /// Method name did not match any known reversal method
    #[error("unknown reversal method '{0}'")]
    UnknownMethod(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
