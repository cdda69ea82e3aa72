//! Input/output helpers.
//!
//! - report JSON read/write (`export`)

pub mod export;

pub use export::*;
