//! The Date/Time Port: a trait seam over a concrete calendar library.
//!
//! The engine never touches a calendar library directly. Every pillar and
//! solar-term function threads a `&A where A: CalendarAdapter`.
//! `saju_chrono` provides the shipped implementation; alternative backends
//! implement this trait.
//!
//! All operations are total over the supported domain (proleptic Gregorian
//! years 1600..=2200, fixed UTC offsets). Adapters must be side-effect-free
//! and safe to share across threads once constructed.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;

/// Fixed offset from UTC, in minutes east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneOffset {
    minutes: i32,
}

impl ZoneOffset {
    /// The UTC zone (zero offset).
    pub const UTC: ZoneOffset = ZoneOffset { minutes: 0 };

    /// Construct from minutes east of UTC. Range ±18 hours.
    pub fn from_minutes(minutes: i32) -> Result<Self, TimeError> {
        if minutes.abs() > 18 * 60 {
            return Err(TimeError::OffsetOutOfRange(minutes));
        }
        Ok(Self { minutes })
    }

    /// Construct from fractional hours east of UTC (e.g. 9.0, -4.5).
    pub fn from_hours(hours: f64) -> Result<Self, TimeError> {
        let minutes = (hours * 60.0).round() as i32;
        Self::from_minutes(minutes)
    }

    /// Offset in minutes east of UTC.
    pub const fn minutes(self) -> i32 {
        self.minutes
    }

    /// Offset in fractional hours east of UTC.
    pub fn hours(self) -> f64 {
        self.minutes as f64 / 60.0
    }
}

impl Display for ZoneOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.minutes == 0 {
            return write!(f, "UTC");
        }
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        write!(f, "UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

/// Port over an opaque zoned instant type.
///
/// The associated `Instant` pairs a wall-clock reading with a [`ZoneOffset`];
/// field getters read wall-clock values in the instant's own zone, while
/// `to_millis` is zone-independent (Unix epoch milliseconds).
pub trait CalendarAdapter {
    /// Opaque zoned instant.
    type Instant: Clone + std::fmt::Debug;

    /// Calendar year in the instant's zone.
    fn year(&self, t: &Self::Instant) -> i32;
    /// Calendar month (1-12) in the instant's zone.
    fn month(&self, t: &Self::Instant) -> u32;
    /// Day of month (1-31) in the instant's zone.
    fn day(&self, t: &Self::Instant) -> u32;
    /// Hour of day (0-23) in the instant's zone.
    fn hour(&self, t: &Self::Instant) -> u32;
    /// Minute (0-59).
    fn minute(&self, t: &Self::Instant) -> u32;
    /// Second (0-59).
    fn second(&self, t: &Self::Instant) -> u32;

    /// Add whole days (negative to subtract).
    fn plus_days(&self, t: &Self::Instant, days: i64) -> Self::Instant;
    /// Subtract whole days.
    fn minus_days(&self, t: &Self::Instant, days: i64) -> Self::Instant {
        self.plus_days(t, -days)
    }
    /// Add whole minutes (negative to subtract).
    fn plus_minutes(&self, t: &Self::Instant, minutes: i64) -> Self::Instant;

    /// The same instant viewed in UTC.
    fn to_utc(&self, t: &Self::Instant) -> Self::Instant {
        self.set_zone(t, ZoneOffset::UTC)
    }
    /// The same instant viewed in another fixed offset.
    fn set_zone(&self, t: &Self::Instant, zone: ZoneOffset) -> Self::Instant;
    /// The instant's zone.
    fn zone(&self, t: &Self::Instant) -> ZoneOffset;
    /// Human-readable zone name, e.g. `UTC+09:00`.
    fn zone_name(&self, t: &Self::Instant) -> String {
        self.zone(t).to_string()
    }

    /// Unix epoch milliseconds (zone-independent).
    fn to_millis(&self, t: &Self::Instant) -> i64;
    /// Instant from Unix epoch milliseconds, viewed in `zone`.
    fn from_millis(&self, ms: i64, zone: ZoneOffset) -> Self::Instant;
    /// Instant from UTC calendar fields.
    fn create_utc(&self, year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32)
    -> Self::Instant;
    /// ISO-8601 rendering with offset suffix.
    fn to_iso(&self, t: &Self::Instant) -> String;

    /// Ordering on the underlying instants (zone-independent).
    fn is_at_or_after(&self, a: &Self::Instant, b: &Self::Instant) -> bool {
        self.to_millis(a) >= self.to_millis(b)
    }
}
