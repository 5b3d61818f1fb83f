//! Sensor feed generators.
//!
//! - [`FeedGenerator`]: Generate a mixed feed of workout packages from athlete profiles

pub mod feed;

pub use feed::{FeedError, FeedGenerator};
