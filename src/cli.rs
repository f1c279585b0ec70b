//! Command-line front end: environment configuration, logging and the summary report.
//!
//! # Environment Variables
//!
//! - `POLYOMINO_MAX_RANK`: Largest rank to generate (default: 5)
//! - `POLYOMINO_SHOW`: Set to "1" or "true" to print every shape
//! - `POLYOMINO_RANK`: Only print shapes of this rank
//! - `RUST_LOG`: Tracing filter, e.g. `polyomino_core=debug`

use std::sync::Once;

use crate::core::{ConfigError, GeneratorConfig, RankStats, ShapeCatalog};
use crate::types::{Rank, FIXED_POLYOMINO_COUNTS, FREE_POLYOMINO_COUNTS};

pub const SHOW_VAR: &str = "POLYOMINO_SHOW";
pub const RANK_VAR: &str = "POLYOMINO_RANK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub generator: GeneratorConfig,
    /// Print the shape sheet after the summary
    pub show: bool,
    /// Restrict the sheet to one rank
    pub rank: Option<Rank>,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let generator = GeneratorConfig::from_lookup(&lookup)?;

        let show = lookup(SHOW_VAR)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let rank = match lookup(RANK_VAR).map(|s| s.trim().to_string()) {
            None => None,
            Some(s) if s.is_empty() => None,
            Some(s) => Some(s.parse().map_err(|_| ConfigError::InvalidValue {
                var: RANK_VAR,
                value: s.clone(),
            })?),
        };

        Ok(Self {
            generator,
            show,
            rank,
        })
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// One line per rank: `rank N: E orientations, D free shapes`
pub fn summary_lines(catalog: &ShapeCatalog) -> Vec<String> {
    catalog
        .rank_stats()
        .iter()
        .map(|s| {
            format!(
                "rank {}: {} orientations, {} free shapes",
                s.rank, s.entries, s.distinct_ids
            )
        })
        .collect()
}

/// Ranks whose counts differ from the known polyomino enumeration
pub fn count_mismatches(catalog: &ShapeCatalog) -> Vec<RankStats> {
    catalog
        .rank_stats()
        .into_iter()
        .filter(|s| {
            let i = (s.rank - 1) as usize;
            match (FIXED_POLYOMINO_COUNTS.get(i), FREE_POLYOMINO_COUNTS.get(i)) {
                (Some(&fixed), Some(&free)) => s.entries != fixed || s.distinct_ids != free,
                _ => false,
            }
        })
        .collect()
}
