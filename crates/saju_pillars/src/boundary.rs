//! Effective-day boundary policy.
//!
//! Two traditions exist for when a sexagenary day begins: civil midnight,
//! or 23:00 (the start of the 子 double-hour). Either may additionally be
//! evaluated in local mean solar time rather than zone time.

use std::str::FromStr;

use saju_time::{CalendarAdapter, calendar_to_jdn, jdn_to_calendar};

use crate::config::ChartPreset;
use crate::error::PillarError;

/// When the sexagenary day rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayBoundary {
    /// Civil midnight.
    Midnight,
    /// 23:00 — hours ≥23 belong to the next day.
    Zi23,
}

impl FromStr for DayBoundary {
    type Err = PillarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "midnight" => Ok(Self::Midnight),
            "zi23" => Ok(Self::Zi23),
            other => Err(PillarError::UnknownPreset(other.to_string())),
        }
    }
}

/// Mean-solar-time shift in milliseconds: 4 minutes per degree of
/// longitude away from the zone's central meridian.
pub fn mean_solar_shift_millis(longitude_deg: f64, tz_offset_hours: f64) -> i64 {
    let minutes = 4.0 * (longitude_deg - 15.0 * tz_offset_hours);
    (minutes * 60_000.0).round() as i64
}

/// The instant shifted into local mean solar time, same zone view.
pub fn shift_to_mean_solar<A: CalendarAdapter>(
    adapter: &A,
    instant: &A::Instant,
    longitude_deg: f64,
) -> A::Instant {
    let zone = adapter.zone(instant);
    let shift = mean_solar_shift_millis(longitude_deg, zone.hours());
    adapter.from_millis(adapter.to_millis(instant) + shift, zone)
}

/// Effective calendar date of an instant under a preset's boundary policy.
///
/// Requesting the mean-solar-time correction without a longitude is a
/// configuration defect and fails with [`PillarError::MissingLongitude`].
pub fn effective_day<A: CalendarAdapter>(
    adapter: &A,
    instant: &A::Instant,
    preset: &ChartPreset,
    longitude_deg: Option<f64>,
) -> Result<(i32, u32, u32), PillarError> {
    let shifted;
    let basis = if preset.mean_solar_time_for_boundary {
        let lon = longitude_deg.ok_or(PillarError::MissingLongitude)?;
        shifted = shift_to_mean_solar(adapter, instant, lon);
        &shifted
    } else {
        instant
    };

    let date = (adapter.year(basis), adapter.month(basis), adapter.day(basis));
    match preset.day_boundary {
        DayBoundary::Midnight => Ok(date),
        DayBoundary::Zi23 => {
            if adapter.hour(basis) >= 23 {
                Ok(jdn_to_calendar(calendar_to_jdn(date.0, date.1, date.2) + 1))
            } else {
                Ok(date)
            }
        }
    }
}
