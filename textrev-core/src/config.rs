//! Reverser configuration

use crate::algorithms::{check_recursion_limit, DEFAULT_RECURSION_LIMIT};
use crate::error::Result;

/// Configuration for a [`Reverser`](crate::Reverser)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Longest input reversed by a single recursion chain
    pub recursion_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the recursion limit
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        check_recursion_limit(self.config.recursion_limit)?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::MAX_RECURSION_LIMIT;
    use crate::error::CoreError;
    use crate::{Method, Reverser};

    #[test]
    fn test_default_limit() {
        assert_eq!(Config::default().recursion_limit, DEFAULT_RECURSION_LIMIT);
        assert_eq!(Config::builder().build().unwrap(), Config::default());
    }

    #[test]
    fn test_custom_limit() {
        let config = Config::builder().recursion_limit(128).build().unwrap();
        assert_eq!(config.recursion_limit, 128);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = Config::builder().recursion_limit(0).build();
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_oversized_limit_rejected() {
        let result = Config::builder().recursion_limit(usize::MAX).build();
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));

        let config = Config::builder()
            .recursion_limit(MAX_RECURSION_LIMIT)
            .build()
            .unwrap();
        assert_eq!(config.recursion_limit, MAX_RECURSION_LIMIT);
    }

    #[test]
    fn test_unchecked_oversized_limit_stays_bounded() {
        let reverser = Reverser::with_config(Config {
            recursion_limit: usize::MAX,
        });
        let text = "a".repeat(1_000_000);
        assert_eq!(reverser.apply(Method::Recursion, &text), text);
    }
}
