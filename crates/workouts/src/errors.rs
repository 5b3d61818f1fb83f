use thiserror::Error;

use crate::dispatch::WorkoutType;

/// Reasons a sensor package cannot be turned into a training.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("Unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    #[error("{workout} expects {expected} arguments, got {actual}")]
    ArgumentCountMismatch {
        workout: WorkoutType,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid measurement: {field} = {value} ({reason})")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl TrainingError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidMeasurement {
            field,
            value,
            reason,
        }
    }
}

/// Errors raised while reading tracker settings from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported value for {var}: {value:?}")]
    UnsupportedValue { var: &'static str, value: String },

    #[error("Failed to parse {var}: {source}")]
    Json {
        var: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
