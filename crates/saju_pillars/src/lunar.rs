//! Lunar calendar port.
//!
//! The Gregorian→lunar conversion is an external collaborator; the
//! composer only needs this one call. `saju_chrono` ships a table-driven
//! implementation; charts outside a converter's coverage get no lunar
//! annotation rather than an error.

/// A lunar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub lunar_year: i32,
    /// Lunar month (1-12); leap months repeat their number.
    pub lunar_month: u32,
    pub lunar_day: u32,
    pub leap_month: bool,
}

/// Port over a Gregorian→lunar converter.
pub trait LunarDateConverter {
    /// Lunar date of a Gregorian calendar day, `None` outside coverage.
    fn lunar_date(&self, year: i32, month: u32, day: u32) -> Option<LunarDate>;
}
