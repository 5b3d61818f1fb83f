//! Athletic performance profiles.
//!
//! Profiles describe how often an athlete's sensor counts an action and how
//! long a typical session lasts. The feed generator samples them to produce
//! plausible sensor packages.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal, NormalError};

use workouts::WorkoutType;

/// Trait for athletic performance profiles.
///
/// Implementations should provide:
/// - The workout the profile produces packages for
/// - Actions (steps or strokes) per minute on an average day
/// - Typical session length
/// - Day-to-day variance
/// - Any sport-specific readings that follow action, duration and weight
pub trait AthleteProfile: Send + Sync {
    fn workout_type(&self) -> WorkoutType;

    /// Steps or strokes per minute.
    fn cadence_per_min(&self) -> f64;

    /// Session length bounds in hours, `(min, max)`.
    fn session_hours(&self) -> (f64, f64);

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;

    /// Readings after `action, duration, weight`, in package order.
    fn extra_readings(
        &self,
        duration_h: f64,
        variance_factor: f64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, NormalError>;
}

/// Samples a variance factor from a normal distribution around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl Rng) -> Result<f64, NormalError> {
    let std_dev = profile.variance();
    if std_dev > 0.0 {
        let normal = Normal::new(1.0, std_dev)?;
        let sample: f64 = normal.sample(rng);
        Ok(sample.clamp(0.7, 1.4))
    } else {
        Ok(1.0)
    }
}

/// Action count for a session, rounded to whole steps or strokes.
pub fn action_count(profile: &dyn AthleteProfile, duration_h: f64, variance_factor: f64) -> f64 {
    (profile.cadence_per_min() * duration_h * 60.0 * variance_factor).round()
}
