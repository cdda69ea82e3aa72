//! Five-element relation between two Nayin elements.
//!
//! "Overcomes" is read off the restraint table, which is the literal inverse
//! of the generation table (`Y` is restrained by `X` iff `X` generates `Y`).
//! It is not the traditional two-step overcoming cycle (Wood overcomes Earth).
//! Since Generates is checked first in both directions, the restraint branch
//! never fires for the five elements. Scoring and advice still handle it.

use crate::domain::{Element, ElementRelation, ElementRelationKind};
use crate::tables::{generates, restrained_by};

/// Classify the relation between two elements. Order of checks:
/// `e1→e2` generates, `e2→e1` generates, `e1` restrained-by `e2`,
/// `e2` restrained-by `e1`, else Neutral.
pub fn element_relation(e1: Element, e2: Element) -> ElementRelation {
    if generates(e1) == Some(e2) {
        return ElementRelation::directed(ElementRelationKind::Generates, e1, e2);
    }
    if generates(e2) == Some(e1) {
        return ElementRelation::directed(ElementRelationKind::Generates, e2, e1);
    }
    if restrained_by(e1) == Some(e2) {
        return ElementRelation::directed(ElementRelationKind::Overcomes, e1, e2);
    }
    if restrained_by(e2) == Some(e1) {
        return ElementRelation::directed(ElementRelationKind::Overcomes, e2, e1);
    }
    ElementRelation::neutral()
}
