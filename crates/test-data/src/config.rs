//! Configuration types for synthetic sensor feeds.

use std::{env, str::FromStr};

use serde::{Deserialize, Serialize};
use workouts::{ConfigError, WorkoutType};

pub const PACKAGES_VAR: &str = "SIM_PACKAGES";
pub const SEED_VAR: &str = "SIM_SEED";

/// Relative share of each workout type in a feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkoutMix {
    pub swimming: f64,
    pub running: f64,
    pub walking: f64,
}

impl Default for WorkoutMix {
    fn default() -> Self {
        Self {
            swimming: 0.2,
            running: 0.5,
            walking: 0.3,
        }
    }
}

impl WorkoutMix {
    /// Every package is the same workout type.
    pub fn only_running() -> Self {
        Self {
            swimming: 0.0,
            running: 1.0,
            walking: 0.0,
        }
    }

    /// Share assigned to `workout`.
    pub fn weight_for(&self, workout: WorkoutType) -> f64 {
        match workout {
            WorkoutType::Swimming => self.swimming,
            WorkoutType::Running => self.running,
            WorkoutType::SportsWalking => self.walking,
        }
    }

    /// Equal share for all workout types.
    pub fn uniform() -> Self {
        Self {
            swimming: 1.0,
            running: 1.0,
            walking: 1.0,
        }
    }
}

/// Configuration for feed generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Number of packages to generate.
    pub package_count: usize,

    /// Share of each workout type.
    pub mix: WorkoutMix,

    /// Mean athlete weight in kilograms.
    pub weight_mean_kg: f64,

    /// Standard deviation of athlete weight.
    pub weight_std_kg: f64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            package_count: 10,
            mix: WorkoutMix::default(),
            weight_mean_kg: 75.0,
            weight_std_kg: 12.0,
        }
    }
}

/// Settings for the `simulate` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    pub package_count: usize,
    /// Seed for a reproducible feed.
    pub seed: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            package_count: 10,
            seed: 12345,
        }
    }
}

impl SimulationSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Unset variables keep their defaults; unparseable ones are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            package_count: parse_or(&lookup, PACKAGES_VAR, defaults.package_count)?,
            seed: parse_or(&lookup, SEED_VAR, defaults.seed)?,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnsupportedValue { var, value }),
    }
}
