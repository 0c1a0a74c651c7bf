//! Year pillar: the sexagenary year bounded by Lichun (立春), not January 1.

use saju_ephem::locate_crossing;
use saju_time::{CalendarAdapter, calendar_to_jd, jd_to_millis};

use crate::error::PillarError;
use crate::ganji::Pillar;

/// Epoch year of the 60-cycle: 1984 = 甲子.
pub const SEXAGENARY_EPOCH_YEAR: i32 = 1984;

/// Solar longitude of Lichun, the sexagenary year boundary.
pub const LICHUN_LONGITUDE_DEG: f64 = 315.0;

/// Year pillar with its solar year and the boundary instant used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearPillar {
    pub index60: u8,
    pub pillar: Pillar,
    /// Calendar year the instant belongs to once the Lichun boundary is applied.
    pub solar_year: i32,
    /// UTC milliseconds of that calendar year's Lichun crossing.
    pub lichun_millis: i64,
}

/// UTC millisecond instant of a calendar year's Lichun crossing.
///
/// Lichun always falls in the first week of February; the locator's
/// bracket expansion covers the residual drift.
pub fn lichun_millis(calendar_year: i32) -> Result<i64, PillarError> {
    let start = jd_to_millis(calendar_to_jd(calendar_year, 2, 1.0));
    let end = jd_to_millis(calendar_to_jd(calendar_year, 2, 7.0));
    Ok(locate_crossing(LICHUN_LONGITUDE_DEG, start, end)?)
}

/// Year pillar for a local instant.
///
/// Instants at or after the year's Lichun belong to that calendar year;
/// earlier instants belong to the previous solar year.
pub fn year_pillar<A: CalendarAdapter>(
    adapter: &A,
    instant: &A::Instant,
) -> Result<YearPillar, PillarError> {
    let calendar_year = adapter.year(instant);
    let boundary = lichun_millis(calendar_year)?;
    let solar_year = if adapter.to_millis(instant) >= boundary {
        calendar_year
    } else {
        calendar_year - 1
    };
    let index60 = (solar_year - SEXAGENARY_EPOCH_YEAR).rem_euclid(60) as u8;
    Ok(YearPillar {
        index60,
        pillar: Pillar::from_index60(index60),
        solar_year,
        lichun_millis: boundary,
    })
}
