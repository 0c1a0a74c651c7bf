//! Sinsal (신살) markers: symbolic stars triggered by stem/branch positions.
//!
//! Sixteen markers, resolved by two patterns:
//! - branch-based: a base branch (year or day; month for the two Virtue
//!   markers) maps through a 12-entry table to one target branch
//! - stem-based: a base stem (day or year) maps to one or more target
//!   branches
//!
//! Matches are deduplicated by (sinsal, position).

use saju_pillars::{Branch, Stem};

use crate::chart::{ALL_POSITIONS, ChartPillars, PillarPosition};

/// The sixteen markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Sinsal {
    Geopsal,
    Jaesal,
    Cheonsal,
    Jisal,
    Dohwa,
    Wolsal,
    Mangsin,
    Jangseong,
    Banan,
    Yeokma,
    Yukhae,
    Hwagae,
    CheoneulGwiin,
    MunchangGwiin,
    CheondeokGwiin,
    WoldeokGwiin,
}

/// All sixteen markers: the twelve-station cycle first, then the nobles.
pub const ALL_SINSALS: [Sinsal; 16] = [
    Sinsal::Geopsal,
    Sinsal::Jaesal,
    Sinsal::Cheonsal,
    Sinsal::Jisal,
    Sinsal::Dohwa,
    Sinsal::Wolsal,
    Sinsal::Mangsin,
    Sinsal::Jangseong,
    Sinsal::Banan,
    Sinsal::Yeokma,
    Sinsal::Yukhae,
    Sinsal::Hwagae,
    Sinsal::CheoneulGwiin,
    Sinsal::MunchangGwiin,
    Sinsal::CheondeokGwiin,
    Sinsal::WoldeokGwiin,
];

const ALL_SINSAL_NAMES: [&str; 16] = [
    "Geopsal",
    "Jaesal",
    "Cheonsal",
    "Jisal",
    "Dohwa",
    "Wolsal",
    "Mangsin",
    "Jangseong",
    "Banan",
    "Yeokma",
    "Yukhae",
    "Hwagae",
    "CheoneulGwiin",
    "MunchangGwiin",
    "CheondeokGwiin",
    "WoldeokGwiin",
];

const ALL_SINSAL_HANGUL: [&str; 16] = [
    "겁살",
    "재살",
    "천살",
    "지살",
    "도화",
    "월살",
    "망신살",
    "장성살",
    "반안살",
    "역마살",
    "육해살",
    "화개살",
    "천을귀인",
    "문창귀인",
    "천덕귀인",
    "월덕귀인",
];

impl Sinsal {
    /// 0-based index in [`ALL_SINSALS`] order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Geopsal => 0,
            Self::Jaesal => 1,
            Self::Cheonsal => 2,
            Self::Jisal => 3,
            Self::Dohwa => 4,
            Self::Wolsal => 5,
            Self::Mangsin => 6,
            Self::Jangseong => 7,
            Self::Banan => 8,
            Self::Yeokma => 9,
            Self::Yukhae => 10,
            Self::Hwagae => 11,
            Self::CheoneulGwiin => 12,
            Self::MunchangGwiin => 13,
            Self::CheondeokGwiin => 14,
            Self::WoldeokGwiin => 15,
        }
    }

    /// Korean romanized name.
    pub fn name(self) -> &'static str {
        ALL_SINSAL_NAMES[self.index() as usize]
    }

    /// Hangul rendering.
    pub fn hangul(self) -> &'static str {
        ALL_SINSAL_HANGUL[self.index() as usize]
    }
}

/// Station branch opening each triad's twelve-sinsal cycle (겁살), indexed
/// by base branch: 申子辰→巳, 寅午戌→亥, 巳酉丑→寅, 亥卯未→申.
const CYCLE_START: [u8; 12] = [5, 2, 11, 8, 5, 2, 11, 8, 5, 2, 11, 8];

/// Offset of each twelve-station sinsal from its cycle start.
const CYCLE_SINSALS: [Sinsal; 12] = [
    Sinsal::Geopsal,
    Sinsal::Jaesal,
    Sinsal::Cheonsal,
    Sinsal::Jisal,
    Sinsal::Dohwa,
    Sinsal::Wolsal,
    Sinsal::Mangsin,
    Sinsal::Jangseong,
    Sinsal::Banan,
    Sinsal::Yeokma,
    Sinsal::Yukhae,
    Sinsal::Hwagae,
];

/// Target branch of a twelve-station sinsal for a base branch.
///
/// # Panics
///
/// If `sinsal` is not one of the twelve station markers.
pub fn cycle_target(sinsal: Sinsal, base: Branch) -> Branch {
    let offset = CYCLE_SINSALS
        .iter()
        .position(|s| *s == sinsal)
        .expect("twelve-station sinsal") as u8;
    Branch::from_index((CYCLE_START[base.index() as usize] + offset) % 12)
}

/// 천덕귀인 targets by month branch: the regular `+5` rotation consistent
/// with the classical cardinal-month entries (卯→申, 午→亥, 酉→寅, 子→巳).
const CHEONDEOK_TARGETS: [u8; 12] = [5, 6, 7, 8, 9, 10, 11, 0, 1, 2, 3, 4];

/// 월덕귀인 targets by month branch: the 건록 branch of each triad's
/// virtue stem (寅午戌→巳, 申子辰→亥, 亥卯未→寅, 巳酉丑→申).
const WOLDEOK_TARGETS: [u8; 12] = [11, 8, 5, 2, 11, 8, 5, 2, 11, 8, 5, 2];

/// 천을귀인 target branches by base stem.
const CHEONEUL_TARGETS: [&[Branch]; 10] = [
    &[Branch::Chuk, Branch::Mi], // 甲
    &[Branch::Ja, Branch::Sin],  // 乙
    &[Branch::Hae, Branch::Yu],  // 丙
    &[Branch::Hae, Branch::Yu],  // 丁
    &[Branch::Chuk, Branch::Mi], // 戊
    &[Branch::Ja, Branch::Sin],  // 己
    &[Branch::Chuk, Branch::Mi], // 庚
    &[Branch::O, Branch::In],    // 辛
    &[Branch::Sa, Branch::Myo],  // 壬
    &[Branch::Sa, Branch::Myo],  // 癸
];

/// 문창귀인 target branch by base stem.
const MUNCHANG_TARGETS: [Branch; 10] = [
    Branch::Sa,  // 甲
    Branch::O,   // 乙
    Branch::Sin, // 丙
    Branch::Yu,  // 丁
    Branch::Sin, // 戊
    Branch::Yu,  // 己
    Branch::Hae, // 庚
    Branch::Ja,  // 辛
    Branch::In,  // 壬
    Branch::Myo, // 癸
];

/// One sinsal hit at a chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinsalMatch {
    pub sinsal: Sinsal,
    pub position: PillarPosition,
    /// The chart branch that triggered the hit.
    pub branch: Branch,
}

fn push_unique(matches: &mut Vec<SinsalMatch>, m: SinsalMatch) {
    let duplicate = matches
        .iter()
        .any(|x| x.sinsal == m.sinsal && x.position == m.position);
    if !duplicate {
        matches.push(m);
    }
}

fn match_target(
    matches: &mut Vec<SinsalMatch>,
    chart: &ChartPillars,
    sinsal: Sinsal,
    target: Branch,
) {
    for position in ALL_POSITIONS {
        let branch = chart.pillar(position).branch;
        if branch == target {
            push_unique(
                matches,
                SinsalMatch {
                    sinsal,
                    position,
                    branch,
                },
            );
        }
    }
}

/// Match all sixteen sinsals against a chart.
///
/// The twelve-station markers are checked from both the year and day
/// branches; the Virtue nobles from the month branch; 천을/문창 from both
/// the day and year stems. The output never contains two entries with the
/// same (sinsal, position).
pub fn analyze_sinsal(chart: &ChartPillars) -> Vec<SinsalMatch> {
    let mut matches = Vec::new();

    let bases = [chart.year().branch, chart.day().branch];
    for sinsal in CYCLE_SINSALS {
        for base in bases {
            match_target(&mut matches, chart, sinsal, cycle_target(sinsal, base));
        }
    }

    let month = chart.month().branch;
    match_target(
        &mut matches,
        chart,
        Sinsal::CheondeokGwiin,
        Branch::from_index(CHEONDEOK_TARGETS[month.index() as usize]),
    );
    match_target(
        &mut matches,
        chart,
        Sinsal::WoldeokGwiin,
        Branch::from_index(WOLDEOK_TARGETS[month.index() as usize]),
    );

    let stem_bases = [chart.day_master(), chart.year().stem];
    for base in stem_bases {
        for &target in CHEONEUL_TARGETS[base.index() as usize] {
            match_target(&mut matches, chart, Sinsal::CheoneulGwiin, target);
        }
        match_target(
            &mut matches,
            chart,
            Sinsal::MunchangGwiin,
            MUNCHANG_TARGETS[base.index() as usize],
        );
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_targets_classic_values() {
        // 申子辰 bases: 도화 at 酉, 역마 at 寅, 화개 at 辰
        assert_eq!(cycle_target(Sinsal::Dohwa, Branch::Ja), Branch::Yu);
        assert_eq!(cycle_target(Sinsal::Yeokma, Branch::Sin), Branch::In);
        assert_eq!(cycle_target(Sinsal::Hwagae, Branch::Jin), Branch::Jin);
        // 寅午戌 bases: 도화 at 卯, 역마 at 申
        assert_eq!(cycle_target(Sinsal::Dohwa, Branch::O), Branch::Myo);
        assert_eq!(cycle_target(Sinsal::Yeokma, Branch::In), Branch::Sin);
        // 巳酉丑: 장성 at 酉; 亥卯未: 겁살 at 申
        assert_eq!(cycle_target(Sinsal::Jangseong, Branch::Yu), Branch::Yu);
        assert_eq!(cycle_target(Sinsal::Geopsal, Branch::Myo), Branch::Sin);
    }

    #[test]
    fn no_duplicate_sinsal_position_pairs() {
        // Year and day branches share a triad (子 and 辰): every marker
        // resolves to the same target twice
        let chart = ChartPillars::from_labels("甲子", "丙寅", "壬辰", "辛亥").unwrap();
        let matches = analyze_sinsal(&chart);
        for (i, a) in matches.iter().enumerate() {
            for b in &matches[i + 1..] {
                assert!(
                    !(a.sinsal == b.sinsal && a.position == b.position),
                    "duplicate {:?} at {:?}",
                    a.sinsal,
                    a.position
                );
            }
        }
    }

    #[test]
    fn dohwa_found() {
        // Day branch 子 (water triad): 도화 target 酉 sits in the hour
        let chart = ChartPillars::from_labels("丁卯", "壬寅", "庚子", "乙酉").unwrap();
        let matches = analyze_sinsal(&chart);
        assert!(
            matches
                .iter()
                .any(|m| m.sinsal == Sinsal::Dohwa && m.position == PillarPosition::Hour)
        );
    }

    #[test]
    fn cheoneul_nobleman_found() {
        // 甲 day stem: nobleman at 丑 or 未
        let chart = ChartPillars::from_labels("庚申", "戊子", "甲午", "辛未").unwrap();
        let matches = analyze_sinsal(&chart);
        assert!(
            matches
                .iter()
                .any(|m| m.sinsal == Sinsal::CheoneulGwiin
                    && m.position == PillarPosition::Hour
                    && m.branch == Branch::Mi)
        );
    }

    #[test]
    fn virtue_nobles_use_month_branch() {
        // Month 午: 천덕 target 亥, 월덕 target 巳
        let chart = ChartPillars::from_labels("丁亥", "丙午", "庚寅", "辛巳").unwrap();
        let matches = analyze_sinsal(&chart);
        assert!(
            matches
                .iter()
                .any(|m| m.sinsal == Sinsal::CheondeokGwiin
                    && m.position == PillarPosition::Year)
        );
        assert!(
            matches
                .iter()
                .any(|m| m.sinsal == Sinsal::WoldeokGwiin
                    && m.position == PillarPosition::Hour)
        );
    }

    #[test]
    fn every_sinsal_has_names() {
        for s in ALL_SINSALS {
            assert!(!s.name().is_empty());
            assert!(!s.hangul().is_empty());
        }
    }
}
