//! Domain types used throughout the evaluation pipeline.
//!
//! This module defines:
//!
//! - calendar labels (`ZodiacSign`, `Stem`, `Branch`, `Pillar`)
//! - five-element types (`Element`, `Nayin`, `ElementRelation`)
//! - evaluation outputs (`RelationTag`, `PartnerProfile`, `CompatibilityResult`)

pub mod types;

pub use types::*;
