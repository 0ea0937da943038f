//! Configured entry point

use crate::algorithms;
use crate::config::Config;
use crate::method::Method;

/// Result of one reversal, suitable for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reversal {
    /// Method that produced the output
    pub method: Method,
    /// Text as given
    pub input: String,
    /// Reversed text
    pub output: String,
}

/// Applies reversal methods under a [`Config`]
#[derive(Debug, Clone, Default)]
pub struct Reverser {
    config: Config,
}

impl Reverser {
    /// Create a reverser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reverser with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reverse `text` with one method
    pub fn apply(&self, method: Method, text: &str) -> String {
        match method {
            Method::Recursion => {
                algorithms::reverse_with_recursion_limit(text, self.config.recursion_limit)
            }
            other => other.apply(text),
        }
    }

    /// Reverse `text` with one method and keep the input alongside
    pub fn reverse(&self, method: Method, text: &str) -> Reversal {
        Reversal {
            method,
            input: text.to_string(),
            output: self.apply(method, text),
        }
    }

    /// Reverse `text` with every method in display order
    pub fn reverse_all(&self, text: &str) -> Vec<Reversal> {
        self.reverse_each(&Method::ALL, text)
    }

    /// Reverse `text` with each of `methods`, in the given order
    pub fn reverse_each(&self, methods: &[Method], text: &str) -> Vec<Reversal> {
        methods.iter().map(|&m| self.reverse(m, text)).collect()
    }
}
