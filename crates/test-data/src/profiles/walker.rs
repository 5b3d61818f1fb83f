//! Sports walker athletic profile.

use rand::RngCore;
use rand_distr::{Distribution, Normal, NormalError};

use super::AthleteProfile;
use workouts::WorkoutType;

/// Athletic profile for sports walking.
///
/// Based on typical brisk walking:
/// - Base cadence: ~115 steps/min
/// - Sessions of 30 minutes to 2 hours
/// - Walker height drawn around 172 cm
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Steps per minute.
    cadence: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    /// Mean walker height in centimeters.
    height_mean_cm: f64,
    /// Standard deviation of walker height.
    height_std_cm: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            cadence: 115.0,
            variance: 0.1,
            height_mean_cm: 172.0,
            height_std_cm: 9.0,
        }
    }
}

impl WalkerProfile {
    /// Creates a walker profile with the given cadence in steps per minute.
    pub fn with_cadence(cadence: f64) -> Self {
        Self {
            cadence,
            ..Default::default()
        }
    }

    /// Creates a leisurely walker profile (~95 steps/min).
    pub fn leisurely() -> Self {
        Self::with_cadence(95.0)
    }

    /// Creates a race walker profile (~140 steps/min).
    pub fn race() -> Self {
        Self::with_cadence(140.0)
    }
}

impl AthleteProfile for WalkerProfile {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn cadence_per_min(&self) -> f64 {
        self.cadence
    }

    fn session_hours(&self) -> (f64, f64) {
        (0.5, 2.0)
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_readings(
        &self,
        _duration_h: f64,
        _variance_factor: f64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, NormalError> {
        let normal = Normal::new(self.height_mean_cm, self.height_std_cm)?;
        let height: f64 = normal.sample(rng);
        Ok(vec![height.clamp(140.0, 210.0).round()])
    }
}
