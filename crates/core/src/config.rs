//! Generator configuration
//!
//! The only tunable is the maximum rank. It can be set explicitly or read from
//! the `POLYOMINO_MAX_RANK` environment variable.

use thiserror::Error;

use crate::types::{Rank, DEFAULT_MAX_RANK, MAX_SUPPORTED_RANK};

/// Environment variable holding the maximum rank
pub const MAX_RANK_VAR: &str = "POLYOMINO_MAX_RANK";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maximum rank must be at least 1")]
    ZeroRank,
    #[error("maximum rank {requested} exceeds the supported limit of {limit}")]
    RankTooLarge { requested: Rank, limit: Rank },
    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}

/// Validated generator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    max_rank: Rank,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_rank: DEFAULT_MAX_RANK,
        }
    }
}

impl GeneratorConfig {
    pub fn new(max_rank: Rank) -> Result<Self, ConfigError> {
        if max_rank == 0 {
            return Err(ConfigError::ZeroRank);
        }
        if max_rank > MAX_SUPPORTED_RANK {
            return Err(ConfigError::RankTooLarge {
                requested: max_rank,
                limit: MAX_SUPPORTED_RANK,
            });
        }
        Ok(Self { max_rank })
    }

    /// Load from environment variables.
    ///
    /// An unset or blank variable falls back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(MAX_RANK_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        match raw {
            None => Ok(Self::default()),
            Some(value) => {
                let max_rank = value.parse().map_err(|_| ConfigError::InvalidValue {
                    var: MAX_RANK_VAR,
                    value: value.clone(),
                })?;
                Self::new(max_rank)
            }
        }
    }

    pub fn max_rank(&self) -> Rank {
        self.max_rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pentominoes() {
        assert_eq!(GeneratorConfig::default().max_rank(), 5);
    }

    #[test]
    fn test_rejects_zero_and_oversized_ranks() {
        assert_eq!(GeneratorConfig::new(0), Err(ConfigError::ZeroRank));
        assert_eq!(
            GeneratorConfig::new(MAX_SUPPORTED_RANK + 1),
            Err(ConfigError::RankTooLarge {
                requested: MAX_SUPPORTED_RANK + 1,
                limit: MAX_SUPPORTED_RANK,
            })
        );
        assert!(GeneratorConfig::new(1).is_ok());
        assert!(GeneratorConfig::new(MAX_SUPPORTED_RANK).is_ok());
    }

    #[test]
    fn test_lookup_parses_value() {
        let config = GeneratorConfig::from_lookup(|_| Some(" 7 ".to_string())).unwrap();
        assert_eq!(config.max_rank(), 7);
    }

    #[test]
    fn test_lookup_unset_or_blank_uses_default() {
        assert_eq!(
            GeneratorConfig::from_lookup(|_| None).unwrap(),
            GeneratorConfig::default()
        );
        assert_eq!(
            GeneratorConfig::from_lookup(|_| Some("  ".to_string())).unwrap(),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = GeneratorConfig::from_lookup(|_| Some("five".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: MAX_RANK_VAR,
                value: "five".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid value \"five\" for POLYOMINO_MAX_RANK"
        );
    }
}
