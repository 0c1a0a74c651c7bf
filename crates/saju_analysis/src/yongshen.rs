//! Yongshen (용신) selection: the element judged most beneficial.
//!
//! The default 억부 method balances the day master's strength; a 종격
//! special-formation override applies to extremely weak charts dominated
//! by a single element; a 조후 climate reading is surfaced as a
//! non-binding hint.

use saju_pillars::{Branch, Element};

use crate::chart::ChartPillars;
use crate::strength::{StrengthLevel, StrengthResult, analyze_strength};

/// Selection method actually applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YongshenMethod {
    /// Balance (억부): support a weak day master, restrain a strong one.
    Eokbu,
    /// Follow-formation (종격): yield to a dominating element.
    Jonggyeok,
}

/// A primary/secondary element pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementPair {
    pub primary: Element,
    pub secondary: Element,
}

/// Yongshen selection result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YongshenResult {
    pub method: YongshenMethod,
    pub primary: Element,
    pub secondary: Element,
    /// The ordinary balance answer, kept when the 종격 override applied.
    pub alternative_balance: Option<ElementPair>,
    /// Climate (조후) hint when it disagrees with the balance primary.
    pub johu_adjustment: Option<ElementPair>,
    /// Dominating element a 종격 chart follows.
    pub followed_element: Option<Element>,
    /// Strength evaluation the selection was derived from.
    pub strength: StrengthResult,
}

/// The element that controls `e` (inverse of the control cycle).
const fn controller_of(e: Element) -> Element {
    match e {
        Element::Wood => Element::Metal,
        Element::Fire => Element::Water,
        Element::Earth => Element::Wood,
        Element::Metal => Element::Fire,
        Element::Water => Element::Earth,
    }
}

/// The element that generates `e` (inverse of the generation cycle).
const fn generator_of(e: Element) -> Element {
    match e {
        Element::Wood => Element::Water,
        Element::Fire => Element::Wood,
        Element::Earth => Element::Fire,
        Element::Metal => Element::Earth,
        Element::Water => Element::Metal,
    }
}

/// The four seasons, by month branch group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Season of a month branch (寅卯辰 spring, onward in threes).
    pub const fn of(month_branch: Branch) -> Season {
        match month_branch {
            Branch::In | Branch::Myo | Branch::Jin => Self::Spring,
            Branch::Sa | Branch::O | Branch::Mi => Self::Summer,
            Branch::Sin | Branch::Yu | Branch::Sul => Self::Autumn,
            Branch::Hae | Branch::Ja | Branch::Chuk => Self::Winter,
        }
    }

    const fn row(self) -> usize {
        match self {
            Self::Spring => 0,
            Self::Summer => 1,
            Self::Autumn => 2,
            Self::Winter => 3,
        }
    }
}

/// 조후 table: season (row) × day-master element (column, generation
/// order) → (primary, secondary). Summer charts want water, winter charts
/// want fire, shoulder seasons temper toward warmth.
const JOHU_TABLE: [[(Element, Element); 5]; 4] = [
    // wood                          fire                            earth
    // metal                         water
    [
        (Element::Fire, Element::Metal),
        (Element::Water, Element::Wood),
        (Element::Fire, Element::Metal),
        (Element::Fire, Element::Earth),
        (Element::Wood, Element::Fire),
    ],
    [
        (Element::Water, Element::Metal),
        (Element::Water, Element::Metal),
        (Element::Water, Element::Metal),
        (Element::Water, Element::Earth),
        (Element::Metal, Element::Water),
    ],
    [
        (Element::Water, Element::Fire),
        (Element::Wood, Element::Fire),
        (Element::Fire, Element::Water),
        (Element::Fire, Element::Water),
        (Element::Fire, Element::Wood),
    ],
    [
        (Element::Fire, Element::Earth),
        (Element::Wood, Element::Fire),
        (Element::Fire, Element::Wood),
        (Element::Fire, Element::Water),
        (Element::Fire, Element::Wood),
    ],
];

const fn element_column(e: Element) -> usize {
    match e {
        Element::Wood => 0,
        Element::Fire => 1,
        Element::Earth => 2,
        Element::Metal => 3,
        Element::Water => 4,
    }
}

/// Climate (조후) reading for a season and day-master element.
pub fn johu_for(season: Season, day_master_element: Element) -> ElementPair {
    let (primary, secondary) = JOHU_TABLE[season.row()][element_column(day_master_element)];
    ElementPair { primary, secondary }
}

fn balance_pair(day_master_element: Element, level: StrengthLevel) -> ElementPair {
    if level.is_strong() {
        ElementPair {
            primary: controller_of(day_master_element),
            secondary: day_master_element.generates(),
        }
    } else {
        ElementPair {
            primary: generator_of(day_master_element),
            secondary: day_master_element,
        }
    }
}

/// Dominating non-day-master element among the four branch elements, if
/// any appears at least three times.
fn dominant_branch_element(chart: &ChartPillars) -> Option<Element> {
    let dm_element = chart.day_master().element();
    let branches = chart.branches();
    for candidate in branches.iter().map(|b| b.element()) {
        if candidate == dm_element {
            continue;
        }
        let count = branches.iter().filter(|b| b.element() == candidate).count();
        if count >= 3 {
            return Some(candidate);
        }
    }
    None
}

/// Select the useful element(s) for a chart.
pub fn analyze_yongshen(chart: &ChartPillars) -> YongshenResult {
    let strength = analyze_strength(chart);
    let dm_element = chart.day_master().element();

    let balance = balance_pair(dm_element, strength.level);

    let formation = if strength.level == StrengthLevel::Geukyak {
        dominant_branch_element(chart)
    } else {
        None
    };

    let (method, pair, alternative_balance) = match formation {
        Some(element) => (
            YongshenMethod::Jonggyeok,
            ElementPair {
                primary: element,
                secondary: element.generates(),
            },
            Some(balance),
        ),
        None => (YongshenMethod::Eokbu, balance, None),
    };

    let johu = johu_for(Season::of(chart.month().branch), dm_element);
    let johu_adjustment = (johu.primary != balance.primary).then_some(johu);

    YongshenResult {
        method,
        primary: pair.primary,
        secondary: pair.secondary,
        alternative_balance,
        johu_adjustment,
        followed_element: formation,
        strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_cycles() {
        for e in saju_pillars::ALL_ELEMENTS {
            assert_eq!(controller_of(e).controls(), e);
            assert_eq!(generator_of(e).generates(), e);
        }
    }

    #[test]
    fn weak_chart_wants_support() {
        // 신약 earth day master: fire generates it
        let chart = ChartPillars::from_labels("己卯", "丙子", "戊午", "辛酉").unwrap();
        let r = analyze_yongshen(&chart);
        assert_eq!(r.method, YongshenMethod::Eokbu);
        assert!(!r.strength.level.is_strong());
        assert_eq!(r.primary, Element::Fire);
        assert_eq!(r.secondary, Element::Earth);
        assert!(r.alternative_balance.is_none());
    }

    #[test]
    fn strong_chart_wants_restraint() {
        let chart = ChartPillars::from_labels("甲寅", "丙寅", "甲寅", "乙亥").unwrap();
        let r = analyze_yongshen(&chart);
        assert_eq!(r.method, YongshenMethod::Eokbu);
        assert!(r.strength.level.is_strong());
        // metal controls wood; fire vents it
        assert_eq!(r.primary, Element::Metal);
        assert_eq!(r.secondary, Element::Fire);
    }

    #[test]
    fn johu_hint_surfaces_on_disagreement() {
        // Winter-born weak earth: balance wants fire, 조후 also wants fire
        let chart = ChartPillars::from_labels("己卯", "丙子", "戊午", "辛酉").unwrap();
        let r = analyze_yongshen(&chart);
        assert!(r.johu_adjustment.is_none());
        // Strong wood in spring: balance wants metal, 조후 says fire
        let strong = ChartPillars::from_labels("甲寅", "丙寅", "甲寅", "乙亥").unwrap();
        let r2 = analyze_yongshen(&strong);
        let hint = r2.johu_adjustment.expect("spring wood hint");
        assert_eq!(hint.primary, Element::Fire);
    }

    #[test]
    fn formation_override_follows_dominant_element() {
        // 庚 day master drowning in wood: three 寅卯 branches, no support.
        let chart = ChartPillars::from_labels("甲寅", "丁卯", "庚寅", "丁亥").unwrap();
        let r = analyze_yongshen(&chart);
        assert_eq!(r.strength.level, StrengthLevel::Geukyak);
        assert_eq!(r.method, YongshenMethod::Jonggyeok);
        assert_eq!(r.followed_element, Some(Element::Wood));
        assert_eq!(r.primary, Element::Wood);
        assert_eq!(r.secondary, Element::Fire);
        let alt = r.alternative_balance.expect("balance kept");
        assert_eq!(alt.primary, Element::Earth);
    }
}
