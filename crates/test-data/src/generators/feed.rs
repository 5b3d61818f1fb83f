//! Sensor package generation from athlete profiles.

use rand::Rng;
use rand::distributions::{WeightedError, WeightedIndex};
use rand_distr::{Distribution, Normal, NormalError};
use thiserror::Error;
use tracing::debug;

use workouts::Package;

use crate::config::FeedConfig;
use crate::profiles::{
    AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, action_count, sample_variance,
};

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid workout mix: {0}")]
    Mix(#[from] WeightedError),

    #[error("Invalid distribution parameters: {0}")]
    Distribution(#[from] NormalError),
}

/// Generates a feed of sensor packages with realistic readings.
pub struct FeedGenerator {
    config: FeedConfig,
    profiles: Vec<Box<dyn AthleteProfile>>,
}

impl Default for FeedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedGenerator {
    /// Creates a generator with default configuration and profiles.
    pub fn new() -> Self {
        Self::with_config(FeedConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: FeedConfig) -> Self {
        Self {
            config,
            profiles: vec![
                Box::new(SwimmerProfile::default()),
                Box::new(RunnerProfile::default()),
                Box::new(WalkerProfile::default()),
            ],
        }
    }

    /// Replaces the profile used for the profile's workout type.
    pub fn with_profile(mut self, profile: impl AthleteProfile + 'static) -> Self {
        let workout = profile.workout_type();
        self.profiles.retain(|p| p.workout_type() != workout);
        self.profiles.push(Box::new(profile));
        self
    }

    /// Generates `package_count` packages, picking workout types by the configured mix.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<Vec<Package>, FeedError> {
        let weights = self
            .profiles
            .iter()
            .map(|p| self.config.mix.weight_for(p.workout_type()));
        let picker = WeightedIndex::new(weights)?;

        (0..self.config.package_count)
            .map(|_| {
                let profile = &self.profiles[picker.sample(rng)];
                self.package_for(profile.as_ref(), rng)
            })
            .collect()
    }

    /// Generates a single package for one session of `profile`.
    pub fn package_for(
        &self,
        profile: &dyn AthleteProfile,
        rng: &mut impl Rng,
    ) -> Result<Package, FeedError> {
        let (min_h, max_h) = profile.session_hours();
        // Sensor reports whole minutes
        let minutes = rng.gen_range(min_h * 60.0..=max_h * 60.0).round().max(1.0);
        let duration = minutes / 60.0;

        let variance_factor = sample_variance(profile, rng)?;
        let action = action_count(profile, duration, variance_factor);

        let weight_dist = Normal::new(self.config.weight_mean_kg, self.config.weight_std_kg)?;
        let weight = (weight_dist.sample(rng).clamp(40.0, 150.0) * 10.0).round() / 10.0;

        let mut data = vec![action, duration, weight];
        data.extend(profile.extra_readings(duration, variance_factor, rng)?);

        let workout = profile.workout_type();
        debug!(code = workout.code(), ?data, "Generated package");
        Ok(Package::new(workout.code(), data))
    }
}
