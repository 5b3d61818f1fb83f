//! Swimmer athletic profile.

use rand::RngCore;
use rand_distr::NormalError;

use super::AthleteProfile;
use workouts::WorkoutType;

/// Athletic profile for pool swimming.
///
/// Based on typical lap swimmers:
/// - Base stroke rate: ~30 strokes/min
/// - Base speed: ~2.0 km/h, which sets the number of completed lengths
/// - 25 m pool unless configured otherwise
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Strokes per minute.
    stroke_rate: f64,
    /// Base swimming speed in km/h.
    speed_kmh: f64,
    /// Pool length in meters.
    pool_length_m: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            stroke_rate: 30.0,
            speed_kmh: 2.0,
            pool_length_m: 25.0,
            variance: 0.1,
        }
    }
}

impl SwimmerProfile {
    /// Creates a swimmer profile training in a pool of the given length.
    pub fn with_pool(pool_length_m: f64) -> Self {
        Self {
            pool_length_m,
            ..Default::default()
        }
    }

    /// Creates a profile for a 50 m pool.
    pub fn olympic() -> Self {
        Self::with_pool(50.0)
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }
}

impl AthleteProfile for SwimmerProfile {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn cadence_per_min(&self) -> f64 {
        self.stroke_rate
    }

    fn session_hours(&self) -> (f64, f64) {
        (0.5, 1.5)
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_readings(
        &self,
        duration_h: f64,
        variance_factor: f64,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, NormalError> {
        let swum_m = self.speed_kmh * variance_factor * duration_h * 1000.0;
        let lengths = (swum_m / self.pool_length_m).round().max(1.0);
        Ok(vec![self.pool_length_m, lengths])
    }
}
