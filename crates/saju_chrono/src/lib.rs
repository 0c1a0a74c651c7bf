//! `chrono`-backed implementation of the calendar port.
//!
//! The engine's only calendar-library binding. Instants are
//! `chrono::DateTime<FixedOffset>`; zone handling is fixed-offset (named
//! zone resolution, where needed, is a concern of the caller that picks
//! the offset).

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat, TimeDelta, TimeZone, Timelike, Utc};
use saju_time::{CalendarAdapter, ZoneOffset};

/// Stateless adapter over `chrono`.
///
/// Construct once and share freely; every method is a pure function of its
/// arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoAdapter;

impl ChronoAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Parse an RFC 3339 instant, e.g. `2000-01-01T18:00:00+09:00`.
    pub fn parse(&self, s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s)
    }

    /// Build a zoned instant from local wall-clock fields.
    ///
    /// Fixed offsets have no gaps or overlaps, so any in-range field
    /// combination names exactly one instant.
    pub fn local(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        zone: ZoneOffset,
    ) -> DateTime<FixedOffset> {
        fixed(zone)
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .expect("local fields within the supported calendar range")
    }
}

fn fixed(zone: ZoneOffset) -> FixedOffset {
    FixedOffset::east_opt(zone.minutes() * 60).expect("ZoneOffset is within chrono's range")
}

impl CalendarAdapter for ChronoAdapter {
    type Instant = DateTime<FixedOffset>;

    fn year(&self, t: &Self::Instant) -> i32 {
        t.year()
    }

    fn month(&self, t: &Self::Instant) -> u32 {
        t.month()
    }

    fn day(&self, t: &Self::Instant) -> u32 {
        t.day()
    }

    fn hour(&self, t: &Self::Instant) -> u32 {
        t.hour()
    }

    fn minute(&self, t: &Self::Instant) -> u32 {
        t.minute()
    }

    fn second(&self, t: &Self::Instant) -> u32 {
        t.second()
    }

    fn plus_days(&self, t: &Self::Instant, days: i64) -> Self::Instant {
        *t + TimeDelta::days(days)
    }

    fn plus_minutes(&self, t: &Self::Instant, minutes: i64) -> Self::Instant {
        *t + TimeDelta::minutes(minutes)
    }

    fn set_zone(&self, t: &Self::Instant, zone: ZoneOffset) -> Self::Instant {
        t.with_timezone(&fixed(zone))
    }

    fn zone(&self, t: &Self::Instant) -> ZoneOffset {
        ZoneOffset::from_minutes(t.offset().local_minus_utc() / 60)
            .expect("instants only carry offsets built from ZoneOffset")
    }

    fn to_millis(&self, t: &Self::Instant) -> i64 {
        t.timestamp_millis()
    }

    fn from_millis(&self, ms: i64, zone: ZoneOffset) -> Self::Instant {
        DateTime::<Utc>::from_timestamp_millis(ms)
            .expect("timestamp within the supported calendar range")
            .with_timezone(&fixed(zone))
    }

    fn create_utc(
        &self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self::Instant {
        self.local(year, month, day, hour, minute, second, ZoneOffset::UTC)
    }

    fn to_iso(&self, t: &Self::Instant) -> String {
        t.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seoul() -> ZoneOffset {
        ZoneOffset::from_hours(9.0).unwrap()
    }

    #[test]
    fn field_getters() {
        let a = ChronoAdapter::new();
        let t = a.local(1985, 5, 15, 8, 30, 45, seoul());
        assert_eq!(a.year(&t), 1985);
        assert_eq!(a.month(&t), 5);
        assert_eq!(a.day(&t), 15);
        assert_eq!(a.hour(&t), 8);
        assert_eq!(a.minute(&t), 30);
        assert_eq!(a.second(&t), 45);
        assert_eq!(a.zone(&t), seoul());
    }

    #[test]
    fn zone_change_keeps_instant() {
        let a = ChronoAdapter::new();
        let t = a.local(2000, 1, 1, 18, 0, 0, seoul());
        let utc = a.to_utc(&t);
        assert_eq!(a.to_millis(&t), a.to_millis(&utc));
        assert_eq!(a.hour(&utc), 9);
        assert_eq!(a.zone_name(&t), "UTC+09:00");
    }

    #[test]
    fn millis_roundtrip() {
        let a = ChronoAdapter::new();
        let t = a.local(1984, 2, 4, 23, 59, 59, seoul());
        let back = a.from_millis(a.to_millis(&t), seoul());
        assert_eq!(t, back);
    }

    #[test]
    fn arithmetic() {
        let a = ChronoAdapter::new();
        let t = a.local(1999, 12, 31, 23, 0, 0, seoul());
        let next = a.plus_days(&t, 1);
        assert_eq!((a.year(&next), a.month(&next), a.day(&next)), (2000, 1, 1));
        let shifted = a.plus_minutes(&t, 90);
        assert_eq!((a.day(&shifted), a.hour(&shifted), a.minute(&shifted)), (1, 0, 30));
        let back = a.minus_days(&next, 1);
        assert_eq!(a.to_millis(&back), a.to_millis(&t));
    }

    #[test]
    fn utc_construction_and_iso() {
        let a = ChronoAdapter::new();
        let t = a.create_utc(1985, 5, 14, 15, 30, 0);
        assert_eq!(a.to_iso(&t), "1985-05-14T15:30:00Z");
        assert!(a.is_at_or_after(&a.create_utc(1985, 5, 14, 15, 30, 1), &t));
        assert!(a.is_at_or_after(&t, &t));
    }

    #[test]
    fn ordering_across_zones() {
        let a = ChronoAdapter::new();
        let in_seoul = a.local(2000, 1, 1, 18, 0, 0, seoul());
        let same_in_utc = a.local(2000, 1, 1, 9, 0, 0, ZoneOffset::UTC);
        assert!(a.is_at_or_after(&in_seoul, &same_in_utc));
        assert!(a.is_at_or_after(&same_in_utc, &in_seoul));
    }
}
