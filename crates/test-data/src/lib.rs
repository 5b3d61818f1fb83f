//! Synthetic sensor feeds for the workout tracker.
//!
//! This crate generates realistic running, walking and swimming packages to
//! exercise the tracker without a real sensor block.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use test_data::prelude::*;
//!
//! let generator = FeedGenerator::with_config(FeedConfig {
//!     package_count: 5,
//!     mix: WorkoutMix::uniform(),
//!     ..Default::default()
//! });
//! let packages = generator.generate(&mut StdRng::seed_from_u64(12345)).unwrap();
//! assert!(process_packages(&packages).iter().all(Result::is_ok));
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

// Re-export core types from workouts crate
pub use workouts::{Package, WorkoutType, process_packages};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{FeedConfig, SimulationSettings, WorkoutMix};
    pub use crate::generators::{FeedError, FeedGenerator};
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, action_count,
        sample_variance,
    };
    pub use crate::{Package, WorkoutType, process_packages};
}
