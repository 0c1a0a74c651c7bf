//! Calendar/time foundation for the saju engine.
//!
//! Provides the [`CalendarAdapter`] port that decouples the engine from any
//! concrete calendar library, the [`ZoneOffset`] fixed UTC offset type, and
//! Julian Day arithmetic shared by the ephemeris and the sexagenary cycle.

pub mod adapter;
pub mod error;
pub mod julian;

pub use adapter::{CalendarAdapter, ZoneOffset};
pub use error::TimeError;
pub use julian::{
    JD_UNIX_EPOCH, MILLIS_PER_DAY, calendar_to_jd, calendar_to_jdn, jd_to_millis,
    jdn_to_calendar, millis_to_jd,
};
