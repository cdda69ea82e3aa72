//! Reporting utilities: plain-text rendering of a compatibility result.

pub mod format;

pub use format::*;
