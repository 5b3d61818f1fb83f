//! Conversion constants between raw sensor units and reported units.

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Centimeters in a meter.
pub const CM_IN_M: f64 = 100.0;

/// Multiplier from km/h to m/s (rounded as the calorie tables expect).
pub const KMH_IN_MSEC: f64 = 0.278;

/// Length of one step in meters, shared by running and walking.
pub const LEN_STEP_M: f64 = 0.65;

/// Distance covered by one swimming stroke in meters.
pub const LEN_STROKE_M: f64 = 1.38;

/// Converts a duration in hours to minutes.
pub fn hours_to_minutes(hours: f64) -> f64 {
    hours * MIN_IN_H
}
