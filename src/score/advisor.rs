//! Wedding-year and children advice.

use crate::calendar::zodiac_of;
use crate::domain::{ElementRelation, ElementRelationKind, ZodiacSign};

/// Years scanned, starting at the current year.
pub const RECOMMEND_WINDOW_YEARS: i32 = 6;
/// Maximum number of recommended years.
pub const RECOMMEND_MAX: usize = 3;

/// Up to three years in `[current_year, current_year + 6)` whose sign is one
/// of the partners' signs, ascending.
///
/// If the window holds no such year, the next three years are returned
/// instead. A partial match is returned as is.
pub fn recommend_years(a: ZodiacSign, b: ZodiacSign, current_year: i32) -> Vec<i32> {
    let years: Vec<i32> = (0..RECOMMEND_WINDOW_YEARS)
        .filter_map(|offset| current_year.checked_add(offset))
        .filter(|&year| {
            let sign = zodiac_of(year);
            sign == a || sign == b
        })
        .take(RECOMMEND_MAX)
        .collect();

    if years.is_empty() {
        (0..RECOMMEND_MAX as i32)
            .filter_map(|offset| current_year.checked_add(offset))
            .collect()
    } else {
        years
    }
}

/// Fixed outlook sentence for the element relation.
pub fn predict_children(relation: &ElementRelation) -> &'static str {
    match relation.kind {
        ElementRelationKind::Generates => "Good fertility prospects; likely healthy offspring.",
        ElementRelationKind::Overcomes => "May need health care precautions during pregnancy.",
        ElementRelationKind::Neutral => "Average fertility; nurture and care are key.",
    }
}
