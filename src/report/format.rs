//! Formatted terminal output for a compatibility result.
//!
//! We keep formatting code in one place so:
//! - the derivation/scoring code stays clean and testable
//! - output changes are localized (golden tests below)

use crate::domain::{CompatibilityResult, PartnerProfile};

/// Width of the score bar in the text report.
pub const SCORE_BAR_WIDTH: usize = 20;

/// Render the full report, section by section, in the order the form shows it.
pub fn format_report(result: &CompatibilityResult) -> String {
    let mut out = String::new();

    out.push_str("=== Love Match Compatibility Report ===\n");

    out.push_str("\n### Basic Info\n");
    out.push_str(&format!("- Partner A: {}\n", format_partner(&result.partner_a)));
    out.push_str(&format!("- Partner B: {}\n", format_partner(&result.partner_b)));

    out.push_str("\n### Zodiac Relations\n");
    out.push_str(&format_relations(result));
    out.push('\n');

    out.push_str("\n### Nayin & Five Elements\n");
    out.push_str(&format!(
        "- Elements: {} vs {}\n",
        result.partner_a.element, result.partner_b.element
    ));
    out.push_str(&format!(
        "- Relation: {} ({})\n",
        result.element_relation.kind.display_name(),
        result.element_relation.description
    ));
    out.push_str(&format!(
        "- Same Nayin Element: {}\n",
        if result.same_nayin_element { "Yes" } else { "No" }
    ));

    out.push_str("\n### Compatibility Score\n");
    out.push_str(&format_score_bar(result.score, SCORE_BAR_WIDTH));
    out.push('\n');
    out.push_str(&format!("Score: {}/100\n", result.score));

    out.push_str("\n### Commentary\n");
    out.push_str(result.commentary.sentence());
    out.push('\n');

    out.push_str("\n### Recommended Wedding Years\n");
    out.push_str(&format_years(&result.recommended_years));
    out.push('\n');

    out.push_str("\n### Children Forecast\n");
    out.push_str(&result.children_outlook);
    out.push('\n');

    out
}

/// `1990-01-01 → Horse, Pillar: GengWu, Nayin: Earth by Roadside (Earth)`
pub fn format_partner(p: &PartnerProfile) -> String {
    format!(
        "{} → {}, Pillar: {}, Nayin: {} ({})",
        p.birth_date, p.sign, p.pillar, p.nayin_name, p.element
    )
}

pub fn format_relations(result: &CompatibilityResult) -> String {
    let parts: Vec<&str> = result.relations.iter().map(|t| t.display_name()).collect();
    parts.join(", ")
}

pub fn format_years(years: &[i32]) -> String {
    let parts: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    parts.join(", ")
}

/// Fixed-width bar for a 0–100 score: `[########............]`.
///
/// Scores above 100 render as a full bar.
pub fn format_score_bar(score: u8, width: usize) -> String {
    let width = width.max(1);
    let filled = (usize::from(score.min(100)) * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
