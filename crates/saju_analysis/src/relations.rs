//! Stem/branch relations: combinations, clashes, harms, punishments,
//! destructions.
//!
//! Pure table lookups over the four pillars. Pair tables are
//! order-independent; triple tables match on ≥2 of 3 members and record
//! completeness; combinations additionally carry a transformation status.

use saju_pillars::{Branch, Element, Stem};

use crate::chart::{ALL_POSITIONS, ChartPillars, PillarPosition};

/// Transformation status of a combination.
///
/// `Combined` is part of the closed status domain but the evaluation rule
/// below never produces it: a complete combination always resolves to
/// `Transformed` or `NotTransformed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStatus {
    Combined,
    HalfCombined,
    Transformed,
    NotTransformed,
}

/// Shape of a punishment (형) match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunishmentKind {
    /// One of the two three-branch sets.
    Triple,
    /// The 子卯 pair.
    Pair,
    /// The same branch appearing at least twice.
    SelfPunish,
}

/// One detected relation.
#[derive(Debug, Clone, PartialEq)]
pub enum Relation {
    StemCombination {
        a: (PillarPosition, Stem),
        b: (PillarPosition, Stem),
        result: Element,
        status: TransformStatus,
        reason: String,
    },
    SixCombination {
        a: (PillarPosition, Branch),
        b: (PillarPosition, Branch),
        result: Element,
        status: TransformStatus,
        reason: String,
    },
    TripleCombination {
        members: Vec<(PillarPosition, Branch)>,
        set: [Branch; 3],
        result: Element,
        is_complete: bool,
        status: TransformStatus,
        reason: String,
    },
    DirectionalCombination {
        members: Vec<(PillarPosition, Branch)>,
        set: [Branch; 3],
        result: Element,
        is_complete: bool,
        status: TransformStatus,
        reason: String,
    },
    Clash {
        a: (PillarPosition, Branch),
        b: (PillarPosition, Branch),
    },
    Harm {
        a: (PillarPosition, Branch),
        b: (PillarPosition, Branch),
    },
    Punishment {
        kind: PunishmentKind,
        members: Vec<(PillarPosition, Branch)>,
    },
    Destruction {
        a: (PillarPosition, Branch),
        b: (PillarPosition, Branch),
    },
}

/// 천간합: the five stem combinations and their result elements.
const STEM_COMBINATIONS: [(Stem, Stem, Element); 5] = [
    (Stem::Gap, Stem::Gi, Element::Earth),
    (Stem::Eul, Stem::Gyeong, Element::Metal),
    (Stem::Byeong, Stem::Sin, Element::Water),
    (Stem::Jeong, Stem::Im, Element::Wood),
    (Stem::Mu, Stem::Gye, Element::Fire),
];

/// 육합: the six branch combinations and their result elements.
const SIX_COMBINATIONS: [(Branch, Branch, Element); 6] = [
    (Branch::Ja, Branch::Chuk, Element::Earth),
    (Branch::In, Branch::Hae, Element::Wood),
    (Branch::Myo, Branch::Sul, Element::Fire),
    (Branch::Jin, Branch::Yu, Element::Metal),
    (Branch::Sa, Branch::Sin, Element::Water),
    (Branch::O, Branch::Mi, Element::Fire),
];

/// 삼합: the four triple combinations.
const TRIPLE_COMBINATIONS: [([Branch; 3], Element); 4] = [
    ([Branch::Sin, Branch::Ja, Branch::Jin], Element::Water),
    ([Branch::In, Branch::O, Branch::Sul], Element::Fire),
    ([Branch::Sa, Branch::Yu, Branch::Chuk], Element::Metal),
    ([Branch::Hae, Branch::Myo, Branch::Mi], Element::Wood),
];

/// 방합: the four directional combinations.
const DIRECTIONAL_COMBINATIONS: [([Branch; 3], Element); 4] = [
    ([Branch::In, Branch::Myo, Branch::Jin], Element::Wood),
    ([Branch::Sa, Branch::O, Branch::Mi], Element::Fire),
    ([Branch::Sin, Branch::Yu, Branch::Sul], Element::Metal),
    ([Branch::Hae, Branch::Ja, Branch::Chuk], Element::Water),
];

/// 충: the six clashes.
const CLASHES: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::O),
    (Branch::Chuk, Branch::Mi),
    (Branch::In, Branch::Sin),
    (Branch::Myo, Branch::Yu),
    (Branch::Jin, Branch::Sul),
    (Branch::Sa, Branch::Hae),
];

/// 해: the six harms.
const HARMS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Mi),
    (Branch::Chuk, Branch::O),
    (Branch::In, Branch::Sa),
    (Branch::Myo, Branch::Jin),
    (Branch::Sin, Branch::Hae),
    (Branch::Yu, Branch::Sul),
];

/// 파: the six destructions.
const DESTRUCTIONS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Yu),
    (Branch::Chuk, Branch::Jin),
    (Branch::In, Branch::Hae),
    (Branch::Myo, Branch::O),
    (Branch::Sa, Branch::Sin),
    (Branch::Mi, Branch::Sul),
];

/// 형 triple sets.
const PUNISHMENT_TRIPLES: [[Branch; 3]; 2] = [
    [Branch::In, Branch::Sa, Branch::Sin],
    [Branch::Chuk, Branch::Sul, Branch::Mi],
];

/// 형 pair sets.
const PUNISHMENT_PAIRS: [(Branch, Branch); 1] = [(Branch::Ja, Branch::Myo)];

/// 자형: branches punishing their own duplicates.
const SELF_PUNISHMENTS: [Branch; 4] = [Branch::Jin, Branch::O, Branch::Yu, Branch::Hae];

/// Elements a month branch lends seasonal support to.
fn seasonal_support(month_branch: Branch) -> &'static [Element] {
    match month_branch {
        Branch::Ja | Branch::Hae => &[Element::Water],
        Branch::In | Branch::Myo => &[Element::Wood],
        Branch::Sa | Branch::O => &[Element::Fire],
        Branch::Sin | Branch::Yu => &[Element::Metal],
        Branch::Chuk => &[Element::Earth, Element::Water],
        Branch::Jin => &[Element::Earth, Element::Wood],
        Branch::Mi => &[Element::Earth, Element::Fire],
        Branch::Sul => &[Element::Earth, Element::Metal],
    }
}

/// Transformation rule shared by every combination shape.
fn combination_status(
    is_complete: bool,
    result: Element,
    month_branch: Branch,
    result_count: usize,
) -> (TransformStatus, String) {
    if !is_complete {
        return (
            TransformStatus::HalfCombined,
            "incomplete set, half-combined".to_string(),
        );
    }
    if seasonal_support(month_branch).contains(&result) {
        return (
            TransformStatus::Transformed,
            format!(
                "month branch {} supports {}",
                month_branch.hanja(),
                result.hanja()
            ),
        );
    }
    if result_count >= 2 {
        return (
            TransformStatus::Transformed,
            format!("{} appears {result_count} times in the chart", result.hanja()),
        );
    }
    (
        TransformStatus::NotTransformed,
        "no seasonal or elemental support".to_string(),
    )
}

fn positioned_stems(chart: &ChartPillars) -> [(PillarPosition, Stem); 4] {
    ALL_POSITIONS.map(|p| (p, chart.pillar(p).stem))
}

fn positioned_branches(chart: &ChartPillars) -> [(PillarPosition, Branch); 4] {
    ALL_POSITIONS.map(|p| (p, chart.pillar(p).branch))
}

fn pair_in_table<T: Copy + PartialEq>(table: &[(T, T)], a: T, b: T) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Detect every relation among the four pillars.
pub fn analyze_relations(chart: &ChartPillars) -> Vec<Relation> {
    let mut relations = Vec::new();
    let month_branch = chart.month().branch;
    let stems = positioned_stems(chart);
    let branches = positioned_branches(chart);

    let stem_element_count =
        |e: Element| stems.iter().filter(|(_, s)| s.element() == e).count();
    let branch_element_count =
        |e: Element| branches.iter().filter(|(_, b)| b.element() == e).count();

    // Stem combinations over unordered stem pairs
    for i in 0..4 {
        for j in (i + 1)..4 {
            let (pa, sa) = stems[i];
            let (pb, sb) = stems[j];
            for &(x, y, result) in &STEM_COMBINATIONS {
                if (x == sa && y == sb) || (x == sb && y == sa) {
                    let (status, reason) = combination_status(
                        true,
                        result,
                        month_branch,
                        stem_element_count(result),
                    );
                    relations.push(Relation::StemCombination {
                        a: (pa, sa),
                        b: (pb, sb),
                        result,
                        status,
                        reason,
                    });
                }
            }
        }
    }

    // Pairwise branch tables
    for i in 0..4 {
        for j in (i + 1)..4 {
            let (pa, ba) = branches[i];
            let (pb, bb) = branches[j];

            for &(x, y, result) in &SIX_COMBINATIONS {
                if (x == ba && y == bb) || (x == bb && y == ba) {
                    let (status, reason) = combination_status(
                        true,
                        result,
                        month_branch,
                        branch_element_count(result),
                    );
                    relations.push(Relation::SixCombination {
                        a: (pa, ba),
                        b: (pb, bb),
                        result,
                        status,
                        reason,
                    });
                }
            }
            if pair_in_table(&CLASHES, ba, bb) {
                relations.push(Relation::Clash {
                    a: (pa, ba),
                    b: (pb, bb),
                });
            }
            if pair_in_table(&HARMS, ba, bb) {
                relations.push(Relation::Harm {
                    a: (pa, ba),
                    b: (pb, bb),
                });
            }
            if pair_in_table(&DESTRUCTIONS, ba, bb) {
                relations.push(Relation::Destruction {
                    a: (pa, ba),
                    b: (pb, bb),
                });
            }
        }
    }

    // Triple and directional combinations: ≥2 distinct members present
    for &(set, result) in &TRIPLE_COMBINATIONS {
        push_triple(&mut relations, &branches, set, result, month_branch, true, branch_element_count(result));
    }
    for &(set, result) in &DIRECTIONAL_COMBINATIONS {
        push_triple(&mut relations, &branches, set, result, month_branch, false, branch_element_count(result));
    }

    // Punishments: triple sets, the pair set, and self-punishments
    for &set in &PUNISHMENT_TRIPLES {
        let members: Vec<_> = branches
            .iter()
            .copied()
            .filter(|(_, b)| set.contains(b))
            .collect();
        let distinct = distinct_members(&members, &set);
        if distinct >= 2 {
            relations.push(Relation::Punishment {
                kind: PunishmentKind::Triple,
                members,
            });
        }
    }
    for &(x, y) in &PUNISHMENT_PAIRS {
        let members: Vec<_> = branches
            .iter()
            .copied()
            .filter(|(_, b)| *b == x || *b == y)
            .collect();
        let has_both = members.iter().any(|(_, b)| *b == x)
            && members.iter().any(|(_, b)| *b == y);
        if has_both {
            relations.push(Relation::Punishment {
                kind: PunishmentKind::Pair,
                members,
            });
        }
    }
    for &branch in &SELF_PUNISHMENTS {
        let members: Vec<_> = branches
            .iter()
            .copied()
            .filter(|(_, b)| *b == branch)
            .collect();
        if members.len() >= 2 {
            relations.push(Relation::Punishment {
                kind: PunishmentKind::SelfPunish,
                members,
            });
        }
    }

    relations
}

fn distinct_members(members: &[(PillarPosition, Branch)], set: &[Branch; 3]) -> usize {
    set.iter()
        .filter(|s| members.iter().any(|(_, b)| b == *s))
        .count()
}

fn push_triple(
    relations: &mut Vec<Relation>,
    branches: &[(PillarPosition, Branch); 4],
    set: [Branch; 3],
    result: Element,
    month_branch: Branch,
    is_triple: bool,
    result_count: usize,
) {
    let members: Vec<_> = branches
        .iter()
        .copied()
        .filter(|(_, b)| set.contains(b))
        .collect();
    let distinct = distinct_members(&members, &set);
    if distinct < 2 {
        return;
    }
    let is_complete = distinct == 3;
    let (status, reason) = combination_status(is_complete, result, month_branch, result_count);
    let relation = if is_triple {
        Relation::TripleCombination {
            members,
            set,
            result,
            is_complete,
            status,
            reason,
        }
    } else {
        Relation::DirectionalCombination {
            members,
            set,
            result,
            is_complete,
            status,
            reason,
        }
    };
    relations.push(relation);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(relations: &[Relation]) -> Vec<&'static str> {
        relations
            .iter()
            .map(|r| match r {
                Relation::StemCombination { .. } => "stem",
                Relation::SixCombination { .. } => "six",
                Relation::TripleCombination { .. } => "triple",
                Relation::DirectionalCombination { .. } => "directional",
                Relation::Clash { .. } => "clash",
                Relation::Harm { .. } => "harm",
                Relation::Punishment { .. } => "punishment",
                Relation::Destruction { .. } => "destruction",
            })
            .collect()
    }

    #[test]
    fn millennium_chart_relations() {
        // 己卯 丙子 戊午 辛酉: a dense chart
        let chart = ChartPillars::from_labels("己卯", "丙子", "戊午", "辛酉").unwrap();
        let relations = analyze_relations(&chart);
        let ks = kinds(&relations);
        // 丙辛 stem combination, transformed (month 子 supports water)
        assert!(ks.contains(&"stem"));
        let stem = relations
            .iter()
            .find_map(|r| match r {
                Relation::StemCombination { result, status, .. } => Some((*result, *status)),
                _ => None,
            })
            .unwrap();
        assert_eq!(stem.0, Element::Water);
        assert_eq!(stem.1, TransformStatus::Transformed);
        // 子午 and 卯酉 clashes
        assert_eq!(ks.iter().filter(|k| **k == "clash").count(), 2);
        // 子卯 punishment pair
        assert!(relations.iter().any(|r| matches!(
            r,
            Relation::Punishment {
                kind: PunishmentKind::Pair,
                ..
            }
        )));
        // 卯午 and 子酉 destructions
        assert_eq!(ks.iter().filter(|k| **k == "destruction").count(), 2);
    }

    #[test]
    fn pair_detection_is_symmetric() {
        let a = ChartPillars::from_labels("甲子", "丙寅", "庚午", "戊申").unwrap();
        let b = ChartPillars::from_labels("甲午", "丙寅", "庚子", "戊申").unwrap();
        let find = |rs: &[Relation]| -> Vec<(Branch, Branch)> {
            rs.iter()
                .filter_map(|r| match r {
                    Relation::Clash { a, b } => {
                        let mut pair = [a.1, b.1];
                        pair.sort_by_key(|x| x.index());
                        Some((pair[0], pair[1]))
                    }
                    _ => None,
                })
                .collect()
        };
        assert_eq!(find(&analyze_relations(&a)), find(&analyze_relations(&b)));
        assert!(find(&analyze_relations(&a)).contains(&(Branch::Ja, Branch::O)));
    }

    #[test]
    fn six_combination_found() {
        let chart = ChartPillars::from_labels("甲寅", "乙亥", "庚辰", "戊子").unwrap();
        let relations = analyze_relations(&chart);
        let six = relations
            .iter()
            .find_map(|r| match r {
                Relation::SixCombination { result, status, .. } => Some((*result, *status)),
                _ => None,
            })
            .expect("寅亥 six combination");
        assert_eq!(six.0, Element::Wood);
        // month 亥 supports water, but wood count (寅亥 both wood? 寅 only)
        // 寅 is the lone wood branch, so no transformation
        assert_eq!(six.1, TransformStatus::NotTransformed);
    }

    #[test]
    fn incomplete_triple_is_half_combined() {
        // 申 + 子 without 辰
        let chart = ChartPillars::from_labels("甲申", "丙子", "庚寅", "丁丑").unwrap();
        let relations = analyze_relations(&chart);
        let triple = relations
            .iter()
            .find_map(|r| match r {
                Relation::TripleCombination {
                    is_complete,
                    status,
                    result,
                    ..
                } => Some((*is_complete, *status, *result)),
                _ => None,
            })
            .expect("申子 half water triple");
        assert!(!triple.0);
        assert_eq!(triple.1, TransformStatus::HalfCombined);
        assert_eq!(triple.2, Element::Water);
    }

    #[test]
    fn complete_triple_transformed_by_month() {
        // 申子辰 complete with 子 month
        let chart = ChartPillars::from_labels("甲申", "丙子", "庚辰", "丁卯").unwrap();
        let relations = analyze_relations(&chart);
        let triple = relations
            .iter()
            .find_map(|r| match r {
                Relation::TripleCombination {
                    is_complete, status, ..
                } => Some((*is_complete, *status)),
                _ => None,
            })
            .expect("申子辰 water triple");
        assert!(triple.0);
        assert_eq!(triple.1, TransformStatus::Transformed);
    }

    #[test]
    fn directional_combination_found() {
        let chart = ChartPillars::from_labels("甲寅", "丁卯", "庚辰", "丙子").unwrap();
        let relations = analyze_relations(&chart);
        assert!(relations.iter().any(|r| matches!(
            r,
            Relation::DirectionalCombination {
                is_complete: true,
                result: Element::Wood,
                ..
            }
        )));
    }

    #[test]
    fn self_punishment_needs_duplicates() {
        let with = ChartPillars::from_labels("壬午", "丙午", "庚子", "戊寅").unwrap();
        assert!(analyze_relations(&with).iter().any(|r| matches!(
            r,
            Relation::Punishment {
                kind: PunishmentKind::SelfPunish,
                ..
            }
        )));
        let without = ChartPillars::from_labels("壬午", "丁未", "庚子", "戊寅").unwrap();
        assert!(!analyze_relations(&without).iter().any(|r| matches!(
            r,
            Relation::Punishment {
                kind: PunishmentKind::SelfPunish,
                ..
            }
        )));
    }

    #[test]
    fn punishment_triple_on_two_members() {
        let chart = ChartPillars::from_labels("甲寅", "丁巳", "庚子", "戊辰").unwrap();
        assert!(analyze_relations(&chart).iter().any(|r| matches!(
            r,
            Relation::Punishment {
                kind: PunishmentKind::Triple,
                ..
            }
        )));
    }
}
