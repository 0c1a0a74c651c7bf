//! Day-master strength: weighted-root scoring and the nine-band scale.

use saju_pillars::{Branch, Element, Stem};

use crate::chart::ChartPillars;
use crate::ten_gods::{ten_god_for, ten_god_for_branch};

/// The nine strength bands, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum StrengthLevel {
    Geukyak,
    Taeyak,
    Sinyak,
    JunghwaSinyak,
    Junghwa,
    JunghwaSingang,
    Singang,
    Taegang,
    Geukwang,
}

/// All nine bands in ascending order.
pub const ALL_LEVELS: [StrengthLevel; 9] = [
    StrengthLevel::Geukyak,
    StrengthLevel::Taeyak,
    StrengthLevel::Sinyak,
    StrengthLevel::JunghwaSinyak,
    StrengthLevel::Junghwa,
    StrengthLevel::JunghwaSingang,
    StrengthLevel::Singang,
    StrengthLevel::Taegang,
    StrengthLevel::Geukwang,
];

const ALL_LEVEL_HANGUL: [&str; 9] = [
    "극약", "태약", "신약", "중화신약", "중화", "중화신강", "신강", "태강", "극왕",
];

/// Inclusive upper score bound of each band except the last.
const LEVEL_UPPER_BOUNDS: [f64; 8] = [10.0, 20.0, 30.0, 38.0, 45.0, 55.0, 70.0, 85.0];

impl StrengthLevel {
    /// 0-based band index, weakest = 0.
    pub const fn index(self) -> u8 {
        match self {
            Self::Geukyak => 0,
            Self::Taeyak => 1,
            Self::Sinyak => 2,
            Self::JunghwaSinyak => 3,
            Self::Junghwa => 4,
            Self::JunghwaSingang => 5,
            Self::Singang => 6,
            Self::Taegang => 7,
            Self::Geukwang => 8,
        }
    }

    /// Hangul rendering.
    pub fn hangul(self) -> &'static str {
        ALL_LEVEL_HANGUL[self.index() as usize]
    }

    /// Band for a score.
    pub fn from_score(score: f64) -> StrengthLevel {
        for (i, bound) in LEVEL_UPPER_BOUNDS.iter().enumerate() {
            if score <= *bound {
                return ALL_LEVELS[i];
            }
        }
        StrengthLevel::Geukwang
    }

    /// The four strong bands (중화신강 and above).
    pub const fn is_strong(self) -> bool {
        self.index() >= 5
    }
}

/// Seasonal category of a month branch: the five elements with earth
/// split into wet (丑辰) and dry (未戌) variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonCategory {
    Wood,
    Fire,
    WetEarth,
    DryEarth,
    Metal,
    Water,
}

impl SeasonCategory {
    /// Category of a month branch.
    pub const fn of(month_branch: Branch) -> SeasonCategory {
        match month_branch {
            Branch::In | Branch::Myo => Self::Wood,
            Branch::Sa | Branch::O => Self::Fire,
            Branch::Chuk | Branch::Jin => Self::WetEarth,
            Branch::Mi | Branch::Sul => Self::DryEarth,
            Branch::Sin | Branch::Yu => Self::Metal,
            Branch::Hae | Branch::Ja => Self::Water,
        }
    }

    const fn column(self) -> usize {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::WetEarth => 2,
            Self::DryEarth => 3,
            Self::Metal => 4,
            Self::Water => 5,
        }
    }
}

/// 득령 multiplier: day-master element (row) × seasonal category (column).
///
/// 1.0 in the day master's own season, high when the season generates it,
/// low when the season controls it; wet earth favors metal/water day
/// masters, dry earth favors fire/earth.
const SEASONAL_MULTIPLIER: [[f64; 6]; 5] = [
    // wood   fire   wet-e  dry-e  metal  water
    [1.0, 0.5, 0.45, 0.3, 0.1, 0.8],  // wood
    [0.8, 1.0, 0.4, 0.6, 0.2, 0.1],   // fire
    [0.2, 0.8, 0.9, 1.0, 0.4, 0.3],   // earth
    [0.1, 0.3, 0.9, 0.5, 1.0, 0.4],   // metal
    [0.5, 0.1, 0.3, 0.2, 0.8, 1.0],   // water
];

const fn element_row(e: Element) -> usize {
    match e {
        Element::Wood => 0,
        Element::Fire => 1,
        Element::Earth => 2,
        Element::Metal => 3,
        Element::Water => 4,
    }
}

/// Seasonal (득령) multiplier for a day-master element and month branch.
pub fn seasonal_multiplier(day_master_element: Element, month_branch: Branch) -> f64 {
    SEASONAL_MULTIPLIER[element_row(day_master_element)][SeasonCategory::of(month_branch).column()]
}

/// Rooting contribution of one branch's hidden stems toward a day master.
fn branch_rooting(day_master: Stem, branch: Branch) -> f64 {
    let dm_element = day_master.element();
    let mut total = 0.0;
    for hidden in branch.hidden_stems() {
        if hidden.stem.element() == dm_element {
            let factor = if hidden.stem.polarity() == day_master.polarity() {
                1.0
            } else {
                0.7
            };
            total += hidden.weight * factor;
        } else if hidden.stem.element().generates() == dm_element {
            total += hidden.weight * 0.5;
        }
    }
    total
}

/// Sub-scores feeding (and accompanying) the strength score.
///
/// `deukji` and `deukse` are reported but do not enter the score formula;
/// downstream consumers read them as qualitative factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthFactors {
    /// Seasonal (득령) multiplier, [0, 1].
    pub deukryeong: f64,
    /// Rooting (통근) weight over all four branches.
    pub tonggeun: f64,
    /// Transparency bonus from month hidden stems visible in the chart.
    pub transparency: f64,
    /// Helpful ten gods among the three visible non-day stems.
    pub helper_stem_count: u32,
    /// Helpful ten gods among visible stems and branch primaries.
    pub help_count: u32,
    /// Weakening ten gods among visible stems and branch primaries.
    pub weaken_count: u32,
    /// Day-branch rooting (득지), reported only.
    pub deukji: f64,
    /// Whether helpers dominate (득세), reported only.
    pub deukse: bool,
}

/// Strength evaluation result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthResult {
    pub day_master: Stem,
    /// Composite score, rounded to one decimal.
    pub score: f64,
    pub level: StrengthLevel,
    pub factors: StrengthFactors,
}

/// Evaluate day-master strength.
///
/// Score = 35·득령 + 20·통근 + 15·transparency + 8·helper stems
/// + 5·help − 6·weaken, rounded to one decimal.
pub fn analyze_strength(chart: &ChartPillars) -> StrengthResult {
    let dm = chart.day_master();
    let month_branch = chart.month().branch;

    let deukryeong = seasonal_multiplier(dm.element(), month_branch);

    let tonggeun: f64 = chart
        .branches()
        .iter()
        .map(|b| branch_rooting(dm, *b))
        .sum();
    let deukji = branch_rooting(dm, chart.day().branch);

    let visible = chart.non_day_stems();
    let mut transparency = 0.0;
    for hidden in month_branch.hidden_stems() {
        let surfaces = visible.iter().any(|(_, s)| *s == hidden.stem);
        if surfaces && ten_god_for(dm, hidden.stem).is_helpful() {
            transparency += 0.3 * hidden.weight;
        }
    }

    let mut help_count = 0u32;
    let mut weaken_count = 0u32;
    for (_, stem) in visible {
        if ten_god_for(dm, stem).is_helpful() {
            help_count += 1;
        } else {
            weaken_count += 1;
        }
    }
    let helper_stem_count = help_count;
    for branch in chart.branches() {
        if ten_god_for_branch(dm, branch).is_helpful() {
            help_count += 1;
        } else {
            weaken_count += 1;
        }
    }
    let deukse = help_count >= 3;

    let raw = 35.0 * deukryeong
        + 20.0 * tonggeun
        + 15.0 * transparency
        + 8.0 * helper_stem_count as f64
        + 5.0 * help_count as f64
        - 6.0 * weaken_count as f64;
    let score = (raw * 10.0).round() / 10.0;

    StrengthResult {
        day_master: dm,
        score,
        level: StrengthLevel::from_score(score),
        factors: StrengthFactors {
            deukryeong,
            tonggeun,
            transparency,
            helper_stem_count,
            help_count,
            weaken_count,
            deukji,
            deukse,
        },
    }
}
