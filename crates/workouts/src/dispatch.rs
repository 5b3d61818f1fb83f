//! Turns raw sensor packages into workout calculators.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::TrainingError;
use crate::report::Report;
use crate::trainings::{Running, SportsWalking, Swimming, Training, count};

/// The closed set of workouts the tracker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Short code sent by the sensor block.
    pub fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Name shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional readings the package must carry.
    pub fn arity(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::SportsWalking => 4,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutType {
    type Err = TrainingError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.code() == code)
            .ok_or_else(|| TrainingError::UnknownWorkoutType(code.to_string()))
    }
}

/// One reading from the sensor block: a workout code and its positional data.
///
/// Serialized as a two-element array, e.g. `["RUN", [15000, 1, 75]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<f64>)", into = "(String, Vec<f64>)")]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

impl From<(String, Vec<f64>)> for Package {
    fn from((workout_type, data): (String, Vec<f64>)) -> Self {
        Self { workout_type, data }
    }
}

impl From<Package> for (String, Vec<f64>) {
    fn from(package: Package) -> Self {
        (package.workout_type, package.data)
    }
}

/// Packages the sensor block sends when nothing else is configured.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Builds the calculator for `code`, applying `data` positionally.
///
/// Readings are `action, duration, weight` followed by `height` for walking or
/// `length_pool, count_pool` for swimming.
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>, TrainingError> {
    let workout: WorkoutType = code.parse()?;
    if data.len() != workout.arity() {
        return Err(TrainingError::ArgumentCountMismatch {
            workout,
            expected: workout.arity(),
            actual: data.len(),
        });
    }

    let action = count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let training: Box<dyn Training> = match workout {
        WorkoutType::Running => Box::new(Running::new(action, duration, weight)?),
        WorkoutType::SportsWalking => {
            Box::new(SportsWalking::new(action, duration, weight, data[3])?)
        }
        WorkoutType::Swimming => {
            let count_pool = u32::try_from(count("count_pool", data[4])?)
                .map_err(|_| TrainingError::invalid("count_pool", data[4], "is out of range"))?;
            Box::new(Swimming::new(action, duration, weight, data[3], count_pool)?)
        }
    };

    ensure_finite(training.as_ref(), data)?;

    debug!(workout = %workout, action, duration, weight, "Resolved package");
    Ok(training)
}

/// Rejects readings that are individually valid but overflow the derived figures,
/// such as a subnormal duration or an enormous pool.
fn ensure_finite(training: &dyn Training, data: &[f64]) -> Result<(), TrainingError> {
    let speed = training.mean_speed_kmh();
    if !speed.is_finite() {
        let swum_m = data.get(3).zip(data.get(4)).map(|(length, laps)| length * laps);
        return Err(match swum_m {
            Some(swum) if training.workout_type() == WorkoutType::Swimming && !swum.is_finite() => {
                TrainingError::invalid("length_pool", data[3], "produces a non-finite result")
            }
            _ => TrainingError::invalid("duration", data[1], "produces a non-finite result"),
        });
    }

    let calories = training.spent_calories();
    if !calories.is_finite() {
        // Walking divides by height, so only a vanishing height overflows there
        let (field, value) = match training.workout_type() {
            WorkoutType::SportsWalking if data[3] < 1.0 => ("height", data[3]),
            _ if data[1] > data[2] => ("duration", data[1]),
            _ => ("weight", data[2]),
        };
        return Err(TrainingError::invalid(field, value, "produces a non-finite result"));
    }
    Ok(())
}

/// Computes a report for every package, keeping failures in place.
///
/// The result is index-aligned with `packages`; the caller decides whether a
/// rejected package is skipped or aborts the run.
pub fn process_packages(packages: &[Package]) -> Vec<Result<Report, TrainingError>> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            read_package(&package.workout_type, &package.data)
                .map(|training| training.report())
                .inspect_err(|e| {
                    warn!(index, code = %package.workout_type, "Rejected package: {e}");
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for ty in WorkoutType::ALL {
            assert_eq!(ty.code().parse::<WorkoutType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = read_package("BIKE", &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, TrainingError::UnknownWorkoutType("BIKE".to_string()));

        // Codes are case sensitive
        assert!(matches!(
            read_package("run", &[15000.0, 1.0, 75.0]),
            Err(TrainingError::UnknownWorkoutType(_))
        ));
    }

    #[test]
    fn test_argument_count_mismatch() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        assert_eq!(
            err,
            TrainingError::ArgumentCountMismatch {
                workout: WorkoutType::SportsWalking,
                expected: 4,
                actual: 3,
            }
        );

        assert!(read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).is_err());
        assert!(read_package("SWM", &[]).is_err());
    }

    #[test]
    fn test_positional_application() {
        let swim = read_package("SWM", &[720.0, 2.0, 80.0, 50.0, 40.0]).unwrap();
        assert_eq!(swim.workout_type(), WorkoutType::Swimming);
        assert_eq!(swim.data().action(), 720);
        assert_eq!(swim.data().duration(), 2.0);
        assert_eq!(swim.data().weight(), 80.0);
        assert!((swim.mean_speed_kmh() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_fractional_counts() {
        assert!(matches!(
            read_package("RUN", &[100.5, 1.0, 75.0]),
            Err(TrainingError::InvalidMeasurement { field: "action", .. })
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]),
            Err(TrainingError::InvalidMeasurement {
                field: "count_pool",
                ..
            })
        ));
    }

    #[test]
    fn test_process_keeps_failures_in_place() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("BIKE", vec![1.0]),
            Package::new("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        ];
        let outcomes = process_packages(&packages);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_ok());
        assert!(matches!(outcomes[1], Err(TrainingError::UnknownWorkoutType(_))));
        assert!(matches!(
            outcomes[2],
            Err(TrainingError::InvalidMeasurement {
                field: "duration",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_overflowing_readings() {
        assert!(matches!(
            read_package("RUN", &[15000.0, 1e-310, 75.0]),
            Err(TrainingError::InvalidMeasurement {
                field: "duration",
                ..
            })
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 1e308, 40.0]),
            Err(TrainingError::InvalidMeasurement {
                field: "length_pool",
                ..
            })
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1e-310, 80.0, 25.0, 40.0]),
            Err(TrainingError::InvalidMeasurement {
                field: "duration",
                ..
            })
        ));
        assert!(matches!(
            read_package("RUN", &[15000.0, 1.0, 1e308]),
            Err(TrainingError::InvalidMeasurement { field: "weight", .. })
        ));
    }

    #[test]
    fn test_names_the_overflowing_reading() {
        assert!(matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 1e-310]),
            Err(TrainingError::InvalidMeasurement { field: "height", .. })
        ));
        assert!(matches!(
            read_package("RUN", &[15000.0, 1e307, 75.0]),
            Err(TrainingError::InvalidMeasurement {
                field: "duration",
                ..
            })
        ));
    }

    #[test]
    fn test_process_reports_are_finite() {
        let outcomes = process_packages(&[Package::new("WLK", vec![9000.0, 1e-310, 75.0, 180.0])]);
        assert!(outcomes[0].is_err());
    }

    #[test]
    fn test_package_json_shape() {
        let package: Package = serde_json::from_str(r#"["RUN", [15000, 1, 75]]"#).unwrap();
        assert_eq!(package, Package::new("RUN", vec![15000.0, 1.0, 75.0]));
        assert_eq!(
            serde_json::to_string(&package).unwrap(),
            r#"["RUN",[15000.0,1.0,75.0]]"#
        );
    }
}
