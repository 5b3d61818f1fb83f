//! Running calculator.

use super::{Training, TrainingData};
use crate::dispatch::WorkoutType;
use crate::errors::TrainingError;
use crate::units::{M_IN_KM, hours_to_minutes};

/// Running workout, measured in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u64, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.data.weight()
            / M_IN_KM
            * hours_to_minutes(self.data.duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_and_speed() {
        let run = Running::new(15000, 1.0, 75.0).unwrap();
        assert!((run.distance_km() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed_kmh() - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_half_hour_doubles_speed() {
        let run = Running::new(15000, 0.5, 75.0).unwrap();
        assert!((run.mean_speed_kmh() - 19.5).abs() < 1e-9);
    }

    #[test]
    fn test_calories() {
        let run = Running::new(15000, 1.0, 75.0).unwrap();
        assert!((run.spent_calories() - 797.805).abs() < 1e-6);
    }

    #[test]
    fn test_calories_scale_with_weight() {
        let light = Running::new(15000, 1.0, 50.0).unwrap();
        let heavy = Running::new(15000, 1.0, 100.0).unwrap();
        assert!((heavy.spent_calories() - 2.0 * light.spent_calories()).abs() < 1e-9);
    }
}
