//! Shared domain types.
//!
//! These types are intentionally kept small, `Copy` where possible and
//! serializable so they can be:
//!
//! - derived from a calendar year by the `calendar` module
//! - classified and scored by `relations` / `score`
//! - exported to JSON and reloaded for `lovematch show`

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the twelve zodiac animals, in cycle order (index 0 = Rat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Rat,
        ZodiacSign::Ox,
        ZodiacSign::Tiger,
        ZodiacSign::Rabbit,
        ZodiacSign::Dragon,
        ZodiacSign::Snake,
        ZodiacSign::Horse,
        ZodiacSign::Goat,
        ZodiacSign::Monkey,
        ZodiacSign::Rooster,
        ZodiacSign::Dog,
        ZodiacSign::Pig,
    ];

    /// Sign at a cycle position; wraps modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ZodiacSign::Rat => "Rat",
            ZodiacSign::Ox => "Ox",
            ZodiacSign::Tiger => "Tiger",
            ZodiacSign::Rabbit => "Rabbit",
            ZodiacSign::Dragon => "Dragon",
            ZodiacSign::Snake => "Snake",
            ZodiacSign::Horse => "Horse",
            ZodiacSign::Goat => "Goat",
            ZodiacSign::Monkey => "Monkey",
            ZodiacSign::Rooster => "Rooster",
            ZodiacSign::Dog => "Dog",
            ZodiacSign::Pig => "Pig",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Heavenly stem (tiangan), index 0 = Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Stem::Jia => "Jia",
            Stem::Yi => "Yi",
            Stem::Bing => "Bing",
            Stem::Ding => "Ding",
            Stem::Wu => "Wu",
            Stem::Ji => "Ji",
            Stem::Geng => "Geng",
            Stem::Xin => "Xin",
            Stem::Ren => "Ren",
            Stem::Gui => "Gui",
        }
    }
}

/// Earthly branch (dizhi), index 0 = Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Branch::Zi => "Zi",
            Branch::Chou => "Chou",
            Branch::Yin => "Yin",
            Branch::Mao => "Mao",
            Branch::Chen => "Chen",
            Branch::Si => "Si",
            Branch::Wu => "Wu",
            Branch::Wei => "Wei",
            Branch::Shen => "Shen",
            Branch::You => "You",
            Branch::Xu => "Xu",
            Branch::Hai => "Hai",
        }
    }
}

/// Stem-branch year pillar, rendered as the concatenated label (`GengWu`).
///
/// Only the 60 pairs whose stem and branch share parity occur in the
/// sexagenary cycle. The other 60 are still representable; they simply have
/// no Nayin entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Whether this pair occurs in the 60-pillar cycle.
    pub fn is_sexagenary(self) -> bool {
        self.stem.index() % 2 == self.branch.index() % 2
    }

    pub fn label(self) -> String {
        format!("{}{}", self.stem.display_name(), self.branch.display_name())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.display_name(), self.branch.display_name())
    }
}

impl FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        for stem in Stem::ALL {
            let Some(rest) = s.strip_prefix(stem.display_name()) else {
                continue;
            };
            if let Some(branch) = Branch::ALL.into_iter().find(|b| b.display_name() == rest) {
                return Ok(Pillar::new(stem, branch));
            }
        }
        Err(format!("Unrecognized stem-branch label: '{s}'"))
    }
}

impl From<Pillar> for String {
    fn from(value: Pillar) -> Self {
        value.label()
    }
}

impl TryFrom<String> for Pillar {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Five-element classification of a Nayin.
///
/// `Unknown` is the sentinel produced when a pillar has no Nayin entry; it has
/// no edges in the generation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
    Unknown,
}

impl Element {
    /// The five real elements, in generation order.
    pub const FIVE: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
            Element::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A Nayin classification: traditional name plus element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nayin {
    pub name: &'static str,
    pub element: Element,
}

impl Nayin {
    /// Returned for pillars missing from the Nayin table.
    pub const UNKNOWN: Nayin = Nayin {
        name: "Unknown",
        element: Element::Unknown,
    };

    pub const fn new(name: &'static str, element: Element) -> Self {
        Self { name, element }
    }

    pub fn is_unknown(&self) -> bool {
        self.element == Element::Unknown
    }
}

/// Relation between two zodiac signs. Several tags may hold at once, except
/// `Ordinary`, which only appears alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationTag {
    /// LiuHe (six harmonies).
    HarmoniousPair,
    /// SanHe (three harmonies).
    CompatibleTrio,
    /// LiuChong (six clashes).
    Clash,
    /// LiuHai (six harms).
    Conflict,
    SameSign,
    Ordinary,
}

impl RelationTag {
    pub fn display_name(self) -> &'static str {
        match self {
            RelationTag::HarmoniousPair => "Harmonious Pair (LiuHe)",
            RelationTag::CompatibleTrio => "Compatible Trio (SanHe)",
            RelationTag::Clash => "Clash (LiuChong)",
            RelationTag::Conflict => "Conflict (LiuHai)",
            RelationTag::SameSign => "Same Sign",
            RelationTag::Ordinary => "Ordinary",
        }
    }
}

impl fmt::Display for RelationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementRelationKind {
    Generates,
    Overcomes,
    Neutral,
}

impl ElementRelationKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ElementRelationKind::Generates => "Generates",
            ElementRelationKind::Overcomes => "Overcomes",
            ElementRelationKind::Neutral => "Neutral",
        }
    }
}

/// Element relation plus the direction that holds (`"Wood→Fire"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRelation {
    pub kind: ElementRelationKind,
    pub description: String,
}

impl ElementRelation {
    pub fn directed(kind: ElementRelationKind, from: Element, to: Element) -> Self {
        Self {
            kind,
            description: format!("{from}→{to}"),
        }
    }

    pub fn neutral() -> Self {
        Self {
            kind: ElementRelationKind::Neutral,
            description: String::new(),
        }
    }
}

/// Score band with its fixed commentary sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commentary {
    Excellent,
    Good,
    Average,
    Challenging,
}

impl Commentary {
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => Commentary::Excellent,
            70..=84 => Commentary::Good,
            50..=69 => Commentary::Average,
            _ => Commentary::Challenging,
        }
    }

    pub fn sentence(self) -> &'static str {
        match self {
            Commentary::Excellent => "Excellent match! Strong harmony and mutual support.",
            Commentary::Good => "Good match. Minor differences, but overall compatible.",
            Commentary::Average => "Average match. Requires understanding and compromise.",
            Commentary::Challenging => {
                "Challenging match. Consider deeper insight and harmony work."
            }
        }
    }
}

/// Everything derived for one partner from their birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerProfile {
    pub birth_date: NaiveDate,
    pub sign: ZodiacSign,
    pub pillar: Pillar,
    pub nayin_name: String,
    pub element: Element,
}

/// Full outcome of one evaluation. Recomputed on every run, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub partner_a: PartnerProfile,
    pub partner_b: PartnerProfile,
    pub relations: Vec<RelationTag>,
    pub element_relation: ElementRelation,
    pub same_nayin_element: bool,
    pub score: u8,
    pub commentary: Commentary,
    pub recommended_years: Vec<i32>,
    pub children_outlook: String,
}
