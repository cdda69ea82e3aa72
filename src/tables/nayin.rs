//! The sexagenary Nayin table.
//!
//! Each of the 30 Nayin covers two consecutive pillars of the 60-year cycle,
//! starting from JiaZi/YiChou ("Gold in Sea").

use crate::domain::Element::*;
use crate::domain::{Branch as B, Element, Nayin, Pillar, Stem as S};

/// One table row: the pillar pair sharing a Nayin.
#[derive(Debug, Clone, Copy)]
pub struct NayinEntry {
    pub pillars: [Pillar; 2],
    pub nayin: Nayin,
}

impl NayinEntry {
    const fn new(first: Pillar, second: Pillar, name: &'static str, element: Element) -> Self {
        Self {
            pillars: [first, second],
            nayin: Nayin::new(name, element),
        }
    }

    pub fn contains(&self, pillar: Pillar) -> bool {
        self.pillars.contains(&pillar)
    }
}

const fn p(stem: S, branch: B) -> Pillar {
    Pillar::new(stem, branch)
}

pub static NAYIN_TABLE: [NayinEntry; 30] = [
    NayinEntry::new(p(S::Jia, B::Zi), p(S::Yi, B::Chou), "Gold in Sea", Metal),
    NayinEntry::new(p(S::Bing, B::Yin), p(S::Ding, B::Mao), "Fire in Furnace", Fire),
    NayinEntry::new(p(S::Wu, B::Chen), p(S::Ji, B::Si), "Wood of Great Forest", Wood),
    NayinEntry::new(p(S::Geng, B::Wu), p(S::Xin, B::Wei), "Earth by Roadside", Earth),
    NayinEntry::new(p(S::Ren, B::Shen), p(S::Gui, B::You), "Metal of Sword Edge", Metal),
    NayinEntry::new(p(S::Jia, B::Xu), p(S::Yi, B::Hai), "Fire on Mountain Top", Fire),
    NayinEntry::new(p(S::Bing, B::Zi), p(S::Ding, B::Chou), "Water in Ravine", Water),
    NayinEntry::new(p(S::Wu, B::Yin), p(S::Ji, B::Mao), "Earth on City Wall", Earth),
    NayinEntry::new(p(S::Geng, B::Chen), p(S::Xin, B::Si), "White Wax Metal", Metal),
    NayinEntry::new(p(S::Ren, B::Wu), p(S::Gui, B::Wei), "Willow Wood", Wood),
    NayinEntry::new(p(S::Jia, B::Shen), p(S::Yi, B::You), "Water in Spring", Water),
    NayinEntry::new(p(S::Bing, B::Xu), p(S::Ding, B::Hai), "Earth on Rooftop", Earth),
    NayinEntry::new(p(S::Wu, B::Zi), p(S::Ji, B::Chou), "Thunderbolt Fire", Fire),
    NayinEntry::new(p(S::Geng, B::Yin), p(S::Xin, B::Mao), "Pine and Cypress Wood", Wood),
    NayinEntry::new(p(S::Ren, B::Chen), p(S::Gui, B::Si), "Long-flowing Water", Water),
    NayinEntry::new(p(S::Jia, B::Wu), p(S::Yi, B::Wei), "Gold in Sand", Metal),
    NayinEntry::new(p(S::Bing, B::Shen), p(S::Ding, B::You), "Fire at Mountain Foot", Fire),
    NayinEntry::new(p(S::Wu, B::Xu), p(S::Ji, B::Hai), "Wood of Open Plain", Wood),
    NayinEntry::new(p(S::Geng, B::Zi), p(S::Xin, B::Chou), "Earth on Wall", Earth),
    NayinEntry::new(p(S::Ren, B::Yin), p(S::Gui, B::Mao), "Gold Foil Metal", Metal),
    NayinEntry::new(p(S::Jia, B::Chen), p(S::Yi, B::Si), "Lamp Fire", Fire),
    NayinEntry::new(p(S::Bing, B::Wu), p(S::Ding, B::Wei), "Water of Heavenly River", Water),
    NayinEntry::new(p(S::Wu, B::Shen), p(S::Ji, B::You), "Earth of Great Post Road", Earth),
    NayinEntry::new(p(S::Geng, B::Xu), p(S::Xin, B::Hai), "Hairpin Gold", Metal),
    NayinEntry::new(p(S::Ren, B::Zi), p(S::Gui, B::Chou), "Mulberry Wood", Wood),
    NayinEntry::new(p(S::Jia, B::Yin), p(S::Yi, B::Mao), "Water of Great Stream", Water),
    NayinEntry::new(p(S::Bing, B::Chen), p(S::Ding, B::Si), "Earth in Sand", Earth),
    NayinEntry::new(p(S::Wu, B::Wu), p(S::Ji, B::Wei), "Fire in Sky", Fire),
    NayinEntry::new(p(S::Geng, B::Shen), p(S::Xin, B::You), "Pomegranate Wood", Wood),
    NayinEntry::new(p(S::Ren, B::Xu), p(S::Gui, B::Hai), "Water of Great Sea", Water),
];
