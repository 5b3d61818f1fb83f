//! Sports walking calculator.

use super::{Training, TrainingData, positive};
use crate::dispatch::WorkoutType;
use crate::errors::TrainingError;
use crate::units::{CM_IN_M, KMH_IN_MSEC, hours_to_minutes};

/// Sports walking workout, measured in steps.
///
/// Calorie expenditure also depends on the walker's height: the same speed
/// costs a shorter walker more energy.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    data: TrainingData,
    /// Height in centimeters.
    height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        height: f64,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
            height: positive("height", height)?,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.data.weight();
        let speed_msec = self.mean_speed_kmh() * KMH_IN_MSEC;
        let height_m = self.height / CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_msec.powi(2) / height_m) * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * hours_to_minutes(self.data.duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_step_length() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        assert!((walk.distance_km() - 5.85).abs() < 1e-9);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < 1e-9);
    }

    #[test]
    fn test_calories() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        assert!((walk.spent_calories() - 349.252).abs() < 1e-3);
    }

    #[test]
    fn test_shorter_walker_burns_more() {
        let short = SportsWalking::new(9000, 1.0, 75.0, 160.0).unwrap();
        let tall = SportsWalking::new(9000, 1.0, 75.0, 190.0).unwrap();
        assert!(short.spent_calories() > tall.spent_calories());
    }

    #[test]
    fn test_rejects_zero_height() {
        let err = SportsWalking::new(9000, 1.0, 75.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            TrainingError::InvalidMeasurement { field: "height", .. }
        ));
    }
}
