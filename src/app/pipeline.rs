//! Shared evaluation pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! dates -> years -> signs/pillars -> Nayin -> relations -> score -> advice
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calendar::{nayin_of, pillar_of, zodiac_of};
use crate::domain::{Commentary, CompatibilityResult, PartnerProfile};
use crate::relations::{element_relation, zodiac_relations};
use crate::score::{predict_children, recommend_years, score};

/// Derive sign, pillar and Nayin for one birth date.
pub fn profile_of(birth_date: NaiveDate) -> PartnerProfile {
    let year = birth_date.year();
    let pillar = pillar_of(year);
    let nayin = nayin_of(pillar);
    PartnerProfile {
        birth_date,
        sign: zodiac_of(year),
        pillar,
        nayin_name: nayin.name.to_string(),
        element: nayin.element,
    }
}

/// Evaluate two birth dates. `current_year` anchors the wedding-year window.
pub fn evaluate(date_a: NaiveDate, date_b: NaiveDate, current_year: i32) -> CompatibilityResult {
    let partner_a = profile_of(date_a);
    let partner_b = profile_of(date_b);
    debug!(?partner_a, ?partner_b, "derived partner profiles");

    let relations = zodiac_relations(partner_a.sign, partner_b.sign);
    let element_relation = element_relation(partner_a.element, partner_b.element);
    let same_nayin_element = partner_a.element == partner_b.element;

    let score = score(&relations, &element_relation, same_nayin_element);
    debug!(
        ?relations,
        relation = element_relation.kind.display_name(),
        same_nayin_element,
        score,
        "scored pair"
    );

    let recommended_years = recommend_years(partner_a.sign, partner_b.sign, current_year);
    let children_outlook = predict_children(&element_relation).to_string();

    CompatibilityResult {
        partner_a,
        partner_b,
        relations,
        element_relation,
        same_nayin_element,
        score,
        commentary: Commentary::from_score(score),
        recommended_years,
        children_outlook,
    }
}
