//! Hour pillar: 2-hour branches anchored at 23:00, Five Rats stem rule.

use saju_time::CalendarAdapter;

use crate::boundary::{effective_day, shift_to_mean_solar};
use crate::config::ChartPreset;
use crate::day::day_pillar_from_date;
use crate::error::PillarError;
use crate::ganji::{Branch, Pillar, Stem};

/// Five Rats Escape (오서둔): stem index of the 子 hour for each day stem.
pub const FIVE_RATS: [u8; 10] = [0, 2, 4, 6, 8, 0, 2, 4, 6, 8];

/// Hour pillar result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourPillar {
    pub pillar: Pillar,
}

/// Hour branch for a wall-clock hour: buckets of two hours starting 23:00.
pub fn hour_branch_for(hour: u32) -> Branch {
    Branch::from_index((((hour + 1) / 2) % 12) as u8)
}

/// Hour stem for a day stem and hour branch, via Five Rats Escape.
pub fn hour_stem_for(day_stem: Stem, hour_branch: Branch) -> Stem {
    Stem::from_index((FIVE_RATS[day_stem.index() as usize] + hour_branch.index()) % 10)
}

/// Hour pillar for a local instant.
///
/// The bucketing hour comes from the mean-solar-time-shifted instant when
/// the preset requests it; the day stem always goes through the effective
/// day boundary first.
pub fn hour_pillar<A: CalendarAdapter>(
    adapter: &A,
    instant: &A::Instant,
    preset: &ChartPreset,
    longitude_deg: Option<f64>,
) -> Result<HourPillar, PillarError> {
    let shifted;
    let bucket_basis = if preset.mean_solar_time_for_hour {
        let lon = longitude_deg.ok_or(PillarError::MissingLongitude)?;
        shifted = shift_to_mean_solar(adapter, instant, lon);
        &shifted
    } else {
        instant
    };
    let branch = hour_branch_for(adapter.hour(bucket_basis));

    let (y, m, d) = effective_day(adapter, instant, preset, longitude_deg)?;
    let day_stem = day_pillar_from_date(y, m, d).pillar.stem;

    Ok(HourPillar {
        pillar: Pillar {
            stem: hour_stem_for(day_stem, branch),
            branch,
        },
    })
}
