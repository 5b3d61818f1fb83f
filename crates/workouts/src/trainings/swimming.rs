//! Swimming calculator.

use super::{Training, TrainingData, positive};
use crate::dispatch::WorkoutType;
use crate::errors::TrainingError;
use crate::units::{LEN_STROKE_M, M_IN_KM};

/// Swimming workout, measured in strokes.
///
/// Distance is still derived from the stroke count, but mean speed comes from
/// the pool: length times completed lengths over the duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    data: TrainingData,
    /// Pool length in meters.
    length_pool: f64,
    /// Number of pool lengths completed.
    count_pool: u32,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self, TrainingError> {
        if count_pool == 0 {
            return Err(TrainingError::invalid(
                "count_pool",
                0.0,
                "must be positive",
            ));
        }
        Ok(Self {
            data: TrainingData::new(action, duration, weight)?,
            length_pool: positive("length_pool", length_pool)?,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn step_length_m(&self) -> f64 {
        LEN_STROKE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.data.duration()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.data.weight()
            * self.data.duration()
    }
}
