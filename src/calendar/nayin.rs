//! Nayin lookup.

use crate::domain::{Nayin, Pillar};
use crate::tables::NAYIN_TABLE;

/// Nayin of a pillar, or `Nayin::UNKNOWN` if the table has no entry for it.
pub fn nayin_of(pillar: Pillar) -> Nayin {
    NAYIN_TABLE
        .iter()
        .find(|entry| entry.contains(pillar))
        .map(|entry| entry.nayin)
        .unwrap_or(Nayin::UNKNOWN)
}

/// Nayin of a free-form pillar label (`"GengWu"`). Unparseable labels fall
/// back to `Nayin::UNKNOWN` as well.
pub fn nayin_of_label(label: &str) -> Nayin {
    label
        .parse::<Pillar>()
        .map(nayin_of)
        .unwrap_or(Nayin::UNKNOWN)
}
