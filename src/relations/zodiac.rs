//! Zodiac pair classification.

use crate::domain::{RelationTag, ZodiacSign};
use crate::tables::{CLASH_PAIRS, CONFLICT_PAIRS, HARMONIOUS_PAIRS, pair_listed, same_trio};

/// All relation tags that hold between two signs.
///
/// Each table is tested on its own and every match is kept, in the order
/// HarmoniousPair, CompatibleTrio, Clash, Conflict, SameSign. When nothing
/// matches the result is exactly `[Ordinary]`.
pub fn zodiac_relations(a: ZodiacSign, b: ZodiacSign) -> Vec<RelationTag> {
    let checks = [
        (RelationTag::HarmoniousPair, pair_listed(&HARMONIOUS_PAIRS, a, b)),
        (RelationTag::CompatibleTrio, same_trio(a, b)),
        (RelationTag::Clash, pair_listed(&CLASH_PAIRS, a, b)),
        (RelationTag::Conflict, pair_listed(&CONFLICT_PAIRS, a, b)),
        (RelationTag::SameSign, a == b),
    ];

    let tags: Vec<RelationTag> = checks
        .into_iter()
        .filter_map(|(tag, holds)| holds.then_some(tag))
        .collect();

    if tags.is_empty() {
        vec![RelationTag::Ordinary]
    } else {
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ZodiacSign::*;

    #[test]
    fn horse_and_monkey_are_ordinary() {
        assert_eq!(zodiac_relations(Horse, Monkey), vec![RelationTag::Ordinary]);
    }

    #[test]
    fn same_sign_always_tagged() {
        for sign in ZodiacSign::ALL {
            let tags = zodiac_relations(sign, sign);
            assert!(tags.contains(&RelationTag::SameSign), "{sign}");
            assert!(!tags.contains(&RelationTag::Ordinary), "{sign}");
        }
        // A sign shares its own SanHe trio.
        assert_eq!(
            zodiac_relations(Rat, Rat),
            vec![RelationTag::CompatibleTrio, RelationTag::SameSign]
        );
    }

    #[test]
    fn relations_are_symmetric() {
        for a in ZodiacSign::ALL {
            for b in ZodiacSign::ALL {
                assert_eq!(zodiac_relations(a, b), zodiac_relations(b, a), "{a}/{b}");
            }
        }
    }

    #[test]
    fn ordinary_never_coexists() {
        for a in ZodiacSign::ALL {
            for b in ZodiacSign::ALL {
                let tags = zodiac_relations(a, b);
                if tags.contains(&RelationTag::Ordinary) {
                    assert_eq!(tags.len(), 1, "{a}/{b}");
                }
            }
        }
    }

    #[test]
    fn individual_tables() {
        assert_eq!(zodiac_relations(Rat, Ox), vec![RelationTag::HarmoniousPair]);
        assert_eq!(zodiac_relations(Dragon, Monkey), vec![RelationTag::CompatibleTrio]);
        assert_eq!(zodiac_relations(Rat, Horse), vec![RelationTag::Clash]);
        assert_eq!(zodiac_relations(Rat, Goat), vec![RelationTag::Conflict]);
    }

    #[test]
    fn distinct_signs_get_at_most_one_tag() {
        // The four tables are disjoint, so only same-sign pairs stack tags.
        for a in ZodiacSign::ALL {
            for b in ZodiacSign::ALL {
                if a != b {
                    assert_eq!(zodiac_relations(a, b).len(), 1, "{a}/{b}");
                }
            }
        }
    }
}
