use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{TrackerConfig, run};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = TrackerConfig::from_env()?;
    tracing::debug!(
        packages = config.packages.len(),
        locale = ?config.locale,
        output = ?config.output,
        "Loaded tracker config"
    );

    let stdout = io::stdout();
    run(&config, &mut stdout.lock())?;

    Ok(())
}
