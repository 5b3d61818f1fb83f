//! Simulates a sensor feed and prints a report for every package
//!
//! Run with:
//! ```
//! SIM_PACKAGES=20 SIM_SEED=7 cargo run -p test-data --bin simulate
//! ```

use rand::{SeedableRng, rngs::StdRng};
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;
use workouts::{TrackerConfig, run};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let SimulationSettings {
        package_count,
        seed,
    } = SimulationSettings::from_env()?;

    let mut rng = StdRng::seed_from_u64(seed);
    let packages = FeedGenerator::with_config(FeedConfig {
        package_count,
        ..Default::default()
    })
    .generate(&mut rng)?;

    tracing::info!("Generated {} packages (seed {seed})", packages.len());

    // Locale and output format still come from the tracker settings
    let config = TrackerConfig {
        packages,
        ..TrackerConfig::from_env()?
    };
    let written = run(&config, &mut std::io::stdout().lock())?;

    tracing::info!("Simulation completed: {written} reports");
    Ok(())
}
