//! Relation classifiers.
//!
//! - `zodiac`: LiuHe / SanHe / LiuChong / LiuHai / same-sign tags for a sign pair
//! - `element`: generation / restraint relation for an element pair

pub mod element;
pub mod zodiac;

pub use element::*;
pub use zodiac::*;
