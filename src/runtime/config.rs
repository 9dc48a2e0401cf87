//! Environment configuration for the demo binaries.
//!
//! The recipes take no command-line arguments. The only knob is the random seed used by
//! the command recipe, so a run that produced an interesting sequence of moves can be
//! replayed exactly.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::num::ParseIntError;
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the seed for random command destinations.
pub const SEED_VAR: &str = "PATTERN_RECIPES_SEED";

/// Errors raised while reading the demo configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The seed variable was set but is not an unsigned 64-bit integer.
    #[error("PATTERN_RECIPES_SEED must be an unsigned integer, got {value:?}")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Resolved configuration shared by the demo binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Seed for the random number generator. Printed by the demos so a run can be replayed.
    pub seed: u64,
}

impl DemoConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(SEED_VAR).ok();
        Self::from_seed_value(raw.as_deref())
    }

    /// Builds the configuration from the raw seed value, if any.
    ///
    /// A missing (or blank) value draws a fresh seed from the thread RNG.
    pub fn from_seed_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        let seed = match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidSeed {
                value: value.to_string(),
                source,
            })?,
            None => rand::random(),
        };
        debug!(seed, "Demo configuration resolved");
        Ok(Self { seed })
    }

    /// A deterministic RNG for this configuration.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}
