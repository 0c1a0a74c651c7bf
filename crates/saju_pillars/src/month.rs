//! Month pillar: solar-longitude month branch plus the Five Tigers stem rule.

use saju_ephem::sun_longitude_at_millis;
use saju_time::CalendarAdapter;

use crate::ganji::{Branch, Pillar, Stem};

/// Five Tigers Escape (오호둔): stem index of the 寅 month for each year stem.
pub const FIVE_TIGERS: [u8; 10] = [2, 4, 6, 8, 0, 2, 4, 6, 8, 0];

/// Index of 寅, the first sexagenary month branch.
const FIRST_MONTH_BRANCH: u8 = 2;

/// Month pillar with the solar longitude that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthPillar {
    pub pillar: Pillar,
    pub sun_longitude_deg: f64,
}

/// Month branch for a solar longitude: 30°-wide segments offset so that
/// 寅 begins at Lichun (315°).
pub fn month_branch_for_longitude(sun_longitude_deg: f64) -> Branch {
    let seg = ((sun_longitude_deg + 45.0).rem_euclid(360.0) / 30.0).floor() as u8;
    Branch::from_index((seg + FIRST_MONTH_BRANCH) % 12)
}

/// Month stem for a year stem and month branch, via Five Tigers Escape.
pub fn month_stem_for(year_stem: Stem, month_branch: Branch) -> Stem {
    let offset = (month_branch.index() + 12 - FIRST_MONTH_BRANCH) % 12;
    Stem::from_index((FIVE_TIGERS[year_stem.index() as usize] + offset) % 10)
}

/// Month pillar for a local instant.
pub fn month_pillar<A: CalendarAdapter>(
    adapter: &A,
    instant: &A::Instant,
    year_stem: Stem,
) -> MonthPillar {
    let lon = sun_longitude_at_millis(adapter.to_millis(instant));
    let branch = month_branch_for_longitude(lon);
    MonthPillar {
        pillar: Pillar {
            stem: month_stem_for(year_stem, branch),
            branch,
        },
        sun_longitude_deg: lon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganji::ALL_STEMS;
    use saju_chrono::ChronoAdapter;
    use saju_time::ZoneOffset;

    #[test]
    fn branch_at_lichun_is_in() {
        assert_eq!(month_branch_for_longitude(315.0), Branch::In);
        assert_eq!(month_branch_for_longitude(344.9), Branch::In);
        assert_eq!(month_branch_for_longitude(345.0), Branch::Myo);
    }

    #[test]
    fn branch_mid_may() {
        assert_eq!(month_branch_for_longitude(54.2), Branch::Sa);
    }

    #[test]
    fn branch_early_january() {
        // λ≈280° in early January: 子 month
        assert_eq!(month_branch_for_longitude(280.0), Branch::Ja);
    }

    #[test]
    fn five_tigers_table() {
        // 甲/己 years open with 丙寅
        assert_eq!(month_stem_for(Stem::Gap, Branch::In), Stem::Byeong);
        assert_eq!(month_stem_for(Stem::Gi, Branch::In), Stem::Byeong);
        // 乙 year, 巳 month: 辛巳
        assert_eq!(month_stem_for(Stem::Eul, Branch::Sa), Stem::Sin);
        // 己 year, 子 month: 丙子
        assert_eq!(month_stem_for(Stem::Gi, Branch::Ja), Stem::Byeong);
    }

    #[test]
    fn stems_advance_with_branch_offset() {
        for &ys in &ALL_STEMS {
            let first = month_stem_for(ys, Branch::In).index();
            let second = month_stem_for(ys, Branch::Myo).index();
            assert_eq!((first + 1) % 10, second);
        }
    }

    #[test]
    fn golden_may_1985() {
        let adapter = ChronoAdapter::new();
        let t = adapter.local(1985, 5, 15, 12, 0, 0, ZoneOffset::from_hours(9.0).unwrap());
        // 1985 is an 乙丑 year
        let m = month_pillar(&adapter, &t, Stem::Eul);
        assert_eq!(m.pillar.label(), "辛巳");
    }
}
