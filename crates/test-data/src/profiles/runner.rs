//! Runner athletic profile.

use rand::RngCore;
use rand_distr::NormalError;

use super::AthleteProfile;
use workouts::WorkoutType;

/// Athletic profile for running activities.
///
/// Based on typical recreational to competitive runner cadence:
/// - Base cadence: ~160 steps/min
/// - Sessions of 20 minutes to 1.5 hours
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Steps per minute.
    cadence: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            cadence: 160.0,
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a runner profile with the given cadence in steps per minute.
    pub fn with_cadence(cadence: f64) -> Self {
        Self {
            cadence,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~180 steps/min).
    pub fn elite() -> Self {
        Self::with_cadence(180.0)
    }

    /// Creates a recreational runner profile (~150 steps/min).
    pub fn recreational() -> Self {
        Self::with_cadence(150.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn cadence_per_min(&self) -> f64 {
        self.cadence
    }

    fn session_hours(&self) -> (f64, f64) {
        (0.33, 1.5)
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn extra_readings(
        &self,
        _duration_h: f64,
        _variance_factor: f64,
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, NormalError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = RunnerProfile::default();
        assert!((profile.cadence_per_min() - 160.0).abs() < 0.01);
        assert_eq!(profile.workout_type(), WorkoutType::Running);
    }

    #[test]
    fn test_elite_is_faster() {
        assert!(RunnerProfile::elite().cadence_per_min() > RunnerProfile::recreational().cadence_per_min());
    }
}
