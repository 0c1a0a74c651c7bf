//! Ten God (십신) classification.
//!
//! Every stem stands in exactly one of ten relationships to the day
//! master, determined by the five-element cycle and polarity. The element
//! cycle is closed, so classification is a total function.

use saju_pillars::{Branch, Element, Stem};

use crate::chart::{ALL_POSITIONS, ChartPillars, PillarPosition};

/// Relationship of one element to another within the closed cycle.
///
/// Exactly one variant holds for any ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRelation {
    Same,
    /// `from` generates `to`.
    Generates,
    /// `from` controls `to`.
    Controls,
    /// `to` controls `from`.
    ControlledBy,
    /// `to` generates `from`.
    GeneratedBy,
}

impl ElementRelation {
    /// Classify the ordered pair (`from`, `to`).
    pub fn between(from: Element, to: Element) -> ElementRelation {
        if from == to {
            Self::Same
        } else if from.generates() == to {
            Self::Generates
        } else if from.controls() == to {
            Self::Controls
        } else if to.controls() == from {
            Self::ControlledBy
        } else {
            // the five-element cycle is closed: the only remaining case
            debug_assert_eq!(to.generates(), from);
            Self::GeneratedBy
        }
    }
}

/// The ten gods (십신).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TenGod {
    Bigyeon,
    Geopjae,
    Siksin,
    Sanggwan,
    Pyeonjae,
    Jeongjae,
    Pyeongwan,
    Jeonggwan,
    Pyeonin,
    Jeongin,
}

/// All ten gods in traditional order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Bigyeon,
    TenGod::Geopjae,
    TenGod::Siksin,
    TenGod::Sanggwan,
    TenGod::Pyeonjae,
    TenGod::Jeongjae,
    TenGod::Pyeongwan,
    TenGod::Jeonggwan,
    TenGod::Pyeonin,
    TenGod::Jeongin,
];

const ALL_TEN_GOD_NAMES: [&str; 10] = [
    "Bigyeon", "Geopjae", "Siksin", "Sanggwan", "Pyeonjae", "Jeongjae", "Pyeongwan",
    "Jeonggwan", "Pyeonin", "Jeongin",
];

const ALL_TEN_GOD_HANGUL: [&str; 10] = [
    "비견", "겁재", "식신", "상관", "편재", "정재", "편관", "정관", "편인", "정인",
];

impl TenGod {
    /// 0-based index in traditional order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Bigyeon => 0,
            Self::Geopjae => 1,
            Self::Siksin => 2,
            Self::Sanggwan => 3,
            Self::Pyeonjae => 4,
            Self::Jeongjae => 5,
            Self::Pyeongwan => 6,
            Self::Jeonggwan => 7,
            Self::Pyeonin => 8,
            Self::Jeongin => 9,
        }
    }

    /// Korean romanized name.
    pub fn name(self) -> &'static str {
        ALL_TEN_GOD_NAMES[self.index() as usize]
    }

    /// Hangul rendering.
    pub fn hangul(self) -> &'static str {
        ALL_TEN_GOD_HANGUL[self.index() as usize]
    }

    /// Whether this god supports the day master (비견/겁재/정인/편인).
    pub const fn is_helpful(self) -> bool {
        matches!(
            self,
            Self::Bigyeon | Self::Geopjae | Self::Jeongin | Self::Pyeonin
        )
    }
}

/// Ten god of `other` relative to the day master.
pub fn ten_god_for(day_master: Stem, other: Stem) -> TenGod {
    let same_polarity = day_master.polarity() == other.polarity();
    match ElementRelation::between(day_master.element(), other.element()) {
        ElementRelation::Same => {
            if same_polarity {
                TenGod::Bigyeon
            } else {
                TenGod::Geopjae
            }
        }
        ElementRelation::Generates => {
            if same_polarity {
                TenGod::Siksin
            } else {
                TenGod::Sanggwan
            }
        }
        ElementRelation::Controls => {
            if same_polarity {
                TenGod::Pyeonjae
            } else {
                TenGod::Jeongjae
            }
        }
        ElementRelation::ControlledBy => {
            if same_polarity {
                TenGod::Pyeongwan
            } else {
                TenGod::Jeonggwan
            }
        }
        ElementRelation::GeneratedBy => {
            if same_polarity {
                TenGod::Pyeonin
            } else {
                TenGod::Jeongin
            }
        }
    }
}

/// Ten god of a branch: classified through its primary (본기) hidden stem.
pub fn ten_god_for_branch(day_master: Stem, branch: Branch) -> TenGod {
    ten_god_for(day_master, branch.primary_hidden_stem())
}

/// Ten god classification of one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenGodEntry {
    pub position: PillarPosition,
    /// God of the pillar's visible stem (the day position classifies the
    /// day master against itself, which is 비견 by the cycle).
    pub stem_god: TenGod,
    /// God of the pillar's branch via its primary hidden stem.
    pub branch_god: TenGod,
}

/// Full ten-god classification of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenGodsResult {
    pub day_master: Stem,
    pub entries: [TenGodEntry; 4],
}

/// Classify every pillar of the chart against the day master.
pub fn analyze_ten_gods(chart: &ChartPillars) -> TenGodsResult {
    let dm = chart.day_master();
    let entries = ALL_POSITIONS.map(|position| {
        let pillar = chart.pillar(position);
        TenGodEntry {
            position,
            stem_god: ten_god_for(dm, pillar.stem),
            branch_god: ten_god_for_branch(dm, pillar.branch),
        }
    });
    TenGodsResult {
        day_master: dm,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_pillars::{ALL_ELEMENTS, ALL_STEMS};

    #[test]
    fn relation_total_over_all_pairs() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                // must not panic, and the five cases partition the pairs
                let r = ElementRelation::between(a, b);
                if a == b {
                    assert_eq!(r, ElementRelation::Same);
                }
            }
        }
    }

    #[test]
    fn every_stem_pair_classifies() {
        for dm in ALL_STEMS {
            for other in ALL_STEMS {
                let god = ten_god_for(dm, other);
                assert!(god.index() < 10);
            }
        }
    }

    #[test]
    fn self_is_bigyeon() {
        for dm in ALL_STEMS {
            assert_eq!(ten_god_for(dm, dm), TenGod::Bigyeon);
        }
    }

    #[test]
    fn classic_pairs() {
        // 甲 day master: 丙 = 식신 (wood generates fire, both yang)
        assert_eq!(ten_god_for(Stem::Gap, Stem::Byeong), TenGod::Siksin);
        // 甲 vs 丁: 상관 (generates, opposite polarity)
        assert_eq!(ten_god_for(Stem::Gap, Stem::Jeong), TenGod::Sanggwan);
        // 甲 vs 戊: 편재 (wood controls earth, both yang)
        assert_eq!(ten_god_for(Stem::Gap, Stem::Mu), TenGod::Pyeonjae);
        // 甲 vs 辛: 정관 (metal controls wood, opposite polarity)
        assert_eq!(ten_god_for(Stem::Gap, Stem::Sin), TenGod::Jeonggwan);
        // 甲 vs 癸: 정인 (water generates wood, opposite polarity)
        assert_eq!(ten_god_for(Stem::Gap, Stem::Gye), TenGod::Jeongin);
        // 戊 vs 辛: 상관 (earth generates metal, opposite polarity)
        assert_eq!(ten_god_for(Stem::Mu, Stem::Sin), TenGod::Sanggwan);
    }

    #[test]
    fn branch_uses_primary_hidden_stem() {
        // 寅 carries 甲 as its primary stem: 비견 for a 甲 day master
        assert_eq!(ten_god_for_branch(Stem::Gap, Branch::In), TenGod::Bigyeon);
        // 子 carries 癸: 정인 for 甲
        assert_eq!(ten_god_for_branch(Stem::Gap, Branch::Ja), TenGod::Jeongin);
    }

    #[test]
    fn millennium_chart() {
        let chart = ChartPillars::from_labels("己卯", "丙子", "戊午", "辛酉").unwrap();
        let result = analyze_ten_gods(&chart);
        assert_eq!(result.day_master, Stem::Mu);
        // 己 = 겁재, 丙 = 편인, 辛 = 상관 relative to 戊
        assert_eq!(result.entries[0].stem_god, TenGod::Geopjae);
        assert_eq!(result.entries[1].stem_god, TenGod::Pyeonin);
        assert_eq!(result.entries[2].stem_god, TenGod::Bigyeon);
        assert_eq!(result.entries[3].stem_god, TenGod::Sanggwan);
        // 午 hides 丁: 정인 for 戊
        assert_eq!(result.entries[2].branch_god, TenGod::Jeongin);
    }

    #[test]
    fn helpful_set() {
        let helpful: Vec<_> = ALL_TEN_GODS.iter().filter(|g| g.is_helpful()).collect();
        assert_eq!(helpful.len(), 4);
    }
}
