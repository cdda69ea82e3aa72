//! Compatibility score.

use crate::domain::{ElementRelation, ElementRelationKind, RelationTag};

pub const BASE_SCORE: i32 = 60;
pub const MAX_SCORE: i32 = 100;

fn tag_adjustment(tag: RelationTag) -> i32 {
    match tag {
        RelationTag::HarmoniousPair => 15,
        RelationTag::CompatibleTrio => 10,
        RelationTag::Clash => -10,
        RelationTag::Conflict => -15,
        RelationTag::SameSign | RelationTag::Ordinary => 0,
    }
}

fn element_adjustment(kind: ElementRelationKind) -> i32 {
    match kind {
        ElementRelationKind::Generates => 20,
        ElementRelationKind::Overcomes => -15,
        ElementRelationKind::Neutral => 0,
    }
}

/// Combine relation tags, element relation and the same-Nayin-element flag
/// into a score in `[0, 100]`.
///
/// Every present tag contributes (the adjustments are summed, not chosen).
pub fn score(tags: &[RelationTag], relation: &ElementRelation, same_nayin_element: bool) -> u8 {
    let mut total = BASE_SCORE;
    total += tags.iter().copied().map(tag_adjustment).sum::<i32>();
    total += element_adjustment(relation.kind);
    if same_nayin_element {
        total += 10;
    }
    total.clamp(0, MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use RelationTag::*;

    fn rel(kind: ElementRelationKind) -> ElementRelation {
        ElementRelation {
            kind,
            description: String::new(),
        }
    }

    #[test]
    fn harmonious_generates_same_nayin_is_exactly_hundred() {
        assert_eq!(score(&[HarmoniousPair], &rel(ElementRelationKind::Generates), true), 100);
    }

    #[test]
    fn conflict_clash_overcomes_is_twenty() {
        assert_eq!(score(&[Conflict, Clash], &rel(ElementRelationKind::Overcomes), false), 20);
    }

    #[test]
    fn ordinary_neutral_is_base() {
        assert_eq!(score(&[Ordinary], &ElementRelation::neutral(), false), 60);
    }

    #[test]
    fn upper_clamp() {
        let s = score(
            &[HarmoniousPair, CompatibleTrio, SameSign],
            &rel(ElementRelationKind::Generates),
            true,
        );
        assert_eq!(s, 100);
    }

    #[test]
    fn lower_clamp() {
        // Repeated tags all count, driving the raw total below zero.
        let s = score(
            &[Clash, Conflict, Clash, Conflict, Clash, Conflict],
            &rel(ElementRelationKind::Overcomes),
            false,
        );
        assert_eq!(s, 0);
    }

    #[test]
    fn all_four_tags_with_overcomes() {
        let s = score(
            &[HarmoniousPair, CompatibleTrio, Clash, Conflict],
            &rel(ElementRelationKind::Overcomes),
            false,
        );
        assert_eq!(s, 45);
    }

    #[test]
    fn always_bounded() {
        let all = [HarmoniousPair, CompatibleTrio, Clash, Conflict, SameSign, Ordinary];
        let kinds = [
            ElementRelationKind::Generates,
            ElementRelationKind::Overcomes,
            ElementRelationKind::Neutral,
        ];
        for mask in 0u32..(1 << all.len()) {
            let tags: Vec<RelationTag> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, t)| *t)
                .collect();
            for kind in kinds {
                for same in [false, true] {
                    let s = score(&tags, &rel(kind), same);
                    assert!(s <= 100, "{tags:?} {kind:?} {same}");
                }
            }
        }
    }
}
