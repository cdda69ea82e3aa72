//! Scoring and advice.
//!
//! Small, pure functions so the pipeline and front-ends can stay thin.

pub mod advisor;
pub mod scorer;

pub use advisor::*;
pub use scorer::*;
