//! Year → zodiac sign and year → stem-branch pillar.
//!
//! Only the Gregorian year number is used; the lunar new year boundary is
//! ignored. Both mappings are anchored at year 4 (JiaZi, Rat) and use floored
//! modulo so years before 4 (and negative years) wrap correctly.

use crate::domain::{Branch, Pillar, Stem, ZodiacSign};

/// Anchor year of the cycle: 4 CE is a JiaZi (Rat) year.
pub const CYCLE_ANCHOR_YEAR: i32 = 4;

fn cycle_offset(year: i32, period: i32) -> usize {
    // rem_euclid keeps the result in [0, period) for any year.
    (i64::from(year) - i64::from(CYCLE_ANCHOR_YEAR)).rem_euclid(i64::from(period)) as usize
}

/// Zodiac sign of a calendar year.
pub fn zodiac_of(year: i32) -> ZodiacSign {
    ZodiacSign::from_index(cycle_offset(year, 12))
}

/// Stem-branch pillar of a calendar year.
pub fn pillar_of(year: i32) -> Pillar {
    Pillar::new(
        Stem::from_index(cycle_offset(year, 10)),
        Branch::from_index(cycle_offset(year, 12)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_years() {
        assert_eq!(zodiac_of(1990), ZodiacSign::Horse);
        assert_eq!(zodiac_of(1992), ZodiacSign::Monkey);
        assert_eq!(zodiac_of(2024), ZodiacSign::Dragon);
        assert_eq!(zodiac_of(4), ZodiacSign::Rat);

        assert_eq!(pillar_of(1984).label(), "JiaZi");
        assert_eq!(pillar_of(1990).label(), "GengWu");
        assert_eq!(pillar_of(1992).label(), "RenShen");
        assert_eq!(pillar_of(2024).label(), "JiaChen");
    }

    #[test]
    fn years_before_anchor_wrap() {
        assert_eq!(zodiac_of(3), ZodiacSign::Pig);
        assert_eq!(zodiac_of(0), ZodiacSign::Monkey);
        assert_eq!(zodiac_of(-8), ZodiacSign::Rat);
        assert_eq!(pillar_of(3).label(), "GuiHai");
        assert_eq!(pillar_of(-56).label(), "JiaZi");
    }

    #[test]
    fn zodiac_has_period_twelve() {
        for y in -3000..3000 {
            assert_eq!(zodiac_of(y), zodiac_of(y + 12), "year {y}");
            assert_eq!(zodiac_of(y), zodiac_of(y - 12), "year {y}");
        }
    }

    #[test]
    fn pillar_has_period_sixty() {
        for y in -3000..3000 {
            assert_eq!(pillar_of(y), pillar_of(y + 60), "year {y}");
        }
    }

    #[test]
    fn pillars_are_always_sexagenary_and_match_sign() {
        for y in -600..600 {
            let pillar = pillar_of(y);
            assert!(pillar.is_sexagenary(), "year {y}");
            assert_eq!(pillar.branch.index(), zodiac_of(y).index(), "year {y}");
        }
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        let _ = zodiac_of(i32::MIN);
        let _ = pillar_of(i32::MAX);
    }
}
