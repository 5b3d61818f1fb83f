//! Fitness statistics for running, sports walking and swimming workouts.
//!
//! Raw sensor packages (a workout code plus positional readings) are resolved
//! into a [`Training`] calculator, which reports distance, mean speed and
//! calories burned.
//!
//! ```rust
//! use workouts::{Training, read_package};
//!
//! let training = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! assert_eq!(
//!     training.report().to_string(),
//!     "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
//!      Mean speed: 9.750 km/h; Calories spent: 797.805."
//! );
//! ```

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod report;
pub mod trainings;
pub mod units;

use std::io::Write;

use anyhow::Context as _;

pub use crate::config::{OutputFormat, TrackerConfig};
pub use crate::dispatch::{
    Package, WorkoutType, default_packages, process_packages, read_package,
};
pub use crate::errors::{ConfigError, TrainingError};
pub use crate::report::{Locale, Report};
pub use crate::trainings::{Running, SportsWalking, Swimming, Training, TrainingData};

/// Processes the configured packages and writes one entry per accepted package.
///
/// Returns the number of entries written. Rejected packages are skipped unless
/// `fail_fast` is set, in which case the first rejection ends the run.
pub fn run(config: &TrackerConfig, out: &mut impl Write) -> anyhow::Result<usize> {
    let mut written = 0;

    for (index, outcome) in process_packages(&config.packages).into_iter().enumerate() {
        let report = match outcome {
            Ok(report) => report,
            Err(e) if config.fail_fast => {
                return Err(e).with_context(|| format!("package #{index} rejected"));
            }
            Err(_) => continue,
        };

        match config.output {
            OutputFormat::Text => writeln!(out, "{}", report.message(config.locale))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        written += 1;
    }

    tracing::info!(
        written,
        total = config.packages.len(),
        "Processed sensor packages"
    );
    Ok(written)
}
