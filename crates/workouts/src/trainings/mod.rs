//! Workout calculators.
//!
//! Every workout shares the same raw readings (action count, duration, weight)
//! and the same default distance and speed formulas. Each sport supplies its own
//! calorie formula and may override the step length or the speed formula.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use std::fmt;

use crate::dispatch::WorkoutType;
use crate::errors::TrainingError;
use crate::report::Report;
use crate::units::{LEN_STEP_M, M_IN_KM};

/// Readings common to every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingData {
    /// Steps or strokes counted by the sensor.
    action: u64,
    /// Duration in hours.
    duration: f64,
    /// Athlete weight in kilograms.
    weight: f64,
}

impl TrainingData {
    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }

    pub fn action(&self) -> u64 {
        self.action
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A workout that can report distance, mean speed and calories.
///
/// `spent_calories` has no default: a type only becomes a `Training` once it
/// supplies its own formula.
pub trait Training: fmt::Debug {
    fn workout_type(&self) -> WorkoutType;

    fn data(&self) -> &TrainingData;

    /// Distance covered by one action, in meters.
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometers.
    fn distance_km(&self) -> f64 {
        self.data().action() as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed over the whole workout in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.data().duration()
    }

    /// Calories burned in kcal.
    fn spent_calories(&self) -> f64;

    /// Builds a fresh summary of the workout.
    fn report(&self) -> Report {
        Report {
            training_type: self.workout_type().label(),
            duration: self.data().duration(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

/// Accepts finite, strictly positive values.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, TrainingError> {
    if !value.is_finite() {
        return Err(TrainingError::invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(TrainingError::invalid(field, value, "must be positive"));
    }
    Ok(value)
}

/// Accepts finite, non-negative whole numbers.
pub(crate) fn count(field: &'static str, value: f64) -> Result<u64, TrainingError> {
    if !value.is_finite() {
        return Err(TrainingError::invalid(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(TrainingError::invalid(field, value, "must not be negative"));
    }
    if value.fract() != 0.0 {
        return Err(TrainingError::invalid(field, value, "must be a whole number"));
    }
    // u64::MAX as f64 rounds up to 2^64, which is already out of range
    if value >= u64::MAX as f64 {
        return Err(TrainingError::invalid(field, value, "is out of range"));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_data_rejects_zero_duration() {
        let err = TrainingData::new(100, 0.0, 70.0).unwrap_err();
        assert!(matches!(
            err,
            TrainingError::InvalidMeasurement {
                field: "duration",
                ..
            }
        ));
    }

    #[test]
    fn test_training_data_rejects_non_finite_weight() {
        assert!(TrainingData::new(100, 1.0, f64::NAN).is_err());
        assert!(TrainingData::new(100, 1.0, f64::INFINITY).is_err());
        assert!(TrainingData::new(100, 1.0, -3.0).is_err());
    }

    #[test]
    fn test_count() {
        assert_eq!(count("action", 720.0).unwrap(), 720);
        assert_eq!(count("action", 0.0).unwrap(), 0);
        assert!(count("action", -1.0).is_err());
        assert!(count("action", 1.5).is_err());
        assert!(count("action", f64::NAN).is_err());
        assert!(count("action", 2f64.powi(64)).is_err());
        assert_eq!(count("action", 2f64.powi(63)).unwrap(), 1 << 63);
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive("height", 180.0).unwrap(), 180.0);
        assert!(positive("height", 0.0).is_err());
        assert!(positive("height", -0.0).is_err());
    }
}
