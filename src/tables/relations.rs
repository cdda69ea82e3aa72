//! Zodiac relation tables and the five-element generation cycle.

use crate::domain::Element;
use crate::domain::ZodiacSign::{self, *};

/// LiuHe (six harmonies).
pub const HARMONIOUS_PAIRS: [(ZodiacSign, ZodiacSign); 6] = [
    (Rat, Ox),
    (Tiger, Pig),
    (Rabbit, Dog),
    (Dragon, Rooster),
    (Snake, Monkey),
    (Horse, Goat),
];

/// SanHe (three harmonies). Membership is "both signs in the same trio".
pub const COMPATIBLE_TRIOS: [[ZodiacSign; 3]; 4] = [
    [Monkey, Rat, Dragon],
    [Tiger, Horse, Dog],
    [Snake, Rooster, Ox],
    [Pig, Rabbit, Goat],
];

/// LiuChong (six clashes).
pub const CLASH_PAIRS: [(ZodiacSign, ZodiacSign); 6] = [
    (Rat, Horse),
    (Ox, Goat),
    (Tiger, Monkey),
    (Rabbit, Rooster),
    (Dragon, Dog),
    (Snake, Pig),
];

/// LiuHai (six harms).
pub const CONFLICT_PAIRS: [(ZodiacSign, ZodiacSign); 6] = [
    (Rat, Goat),
    (Ox, Horse),
    (Tiger, Snake),
    (Rabbit, Dragon),
    (Dog, Rooster),
    (Monkey, Pig),
];

/// Generation edges `from → to`: Wood→Fire→Earth→Metal→Water→Wood.
pub const GENERATION_CYCLE: [(Element, Element); 5] = [
    (Element::Wood, Element::Fire),
    (Element::Fire, Element::Earth),
    (Element::Earth, Element::Metal),
    (Element::Metal, Element::Water),
    (Element::Water, Element::Wood),
];

/// Whether the unordered pair `{a, b}` appears in `pairs`.
pub fn pair_listed(pairs: &[(ZodiacSign, ZodiacSign)], a: ZodiacSign, b: ZodiacSign) -> bool {
    pairs
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Whether `a` and `b` share a SanHe trio.
pub fn same_trio(a: ZodiacSign, b: ZodiacSign) -> bool {
    COMPATIBLE_TRIOS
        .iter()
        .any(|trio| trio.contains(&a) && trio.contains(&b))
}

/// The element generated by `from`. `None` for `Unknown`.
pub fn generates(from: Element) -> Option<Element> {
    GENERATION_CYCLE
        .iter()
        .find(|(f, _)| *f == from)
        .map(|&(_, to)| to)
}

/// The restraint table, read as the literal inverse of generation: the element
/// that generates `of`. `None` for `Unknown`.
pub fn restrained_by(of: Element) -> Option<Element> {
    GENERATION_CYCLE
        .iter()
        .find(|(_, t)| *t == of)
        .map(|&(from, _)| from)
}
