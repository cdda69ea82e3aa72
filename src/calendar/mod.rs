//! Calendar-year derivations: zodiac sign, stem-branch pillar and Nayin.
//!
//! All functions here are total and pure.

pub mod nayin;
pub mod year;

pub use nayin::*;
pub use year::*;
