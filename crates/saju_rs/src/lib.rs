//! Convenience wrapper for the saju Four Pillars engine.
//!
//! Re-exports the whole public surface so callers only need
//! `use saju_rs::*`, plus label/instant entry points in [`convenience`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_chrono::ChronoAdapter;
//! use saju_rs::*;
//!
//! let adapter = ChronoAdapter::new();
//! let born = adapter.local(2000, 1, 1, 18, 0, 0, ZoneOffset::from_hours(9.0)?);
//! let chart = chart(&adapter, &born, &ChartOptions::standard(126.9))?;
//! println!("{} {} {} {}", chart.year, chart.month, chart.day, chart.hour);
//!
//! let strength = strength(["己卯", "丙子", "戊午", "辛酉"])?;
//! println!("{:?} ({})", strength.level, strength.score);
//! ```

pub mod convenience;

// Primary entry points — users should only need `use saju_rs::*`
pub use convenience::{
    chart, chart_with_lunar, relations, sinsals, solar_terms, strength, ten_gods, yongshen,
};

// Re-export the calendar port and time primitives.
pub use saju_time::{CalendarAdapter, TimeError, ZoneOffset};

// Re-export ephemeris types used by the reporter output.
pub use saju_ephem::{
    ALL_TERMS, EphemError, SolarTerm, SolarTermInfo, TermEvent, apparent_sun_longitude,
};

// Re-export chart construction types.
pub use saju_pillars::{
    ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS, Branch, ChartOptions, ChartPreset, DayBoundary,
    Element, FourPillars, HiddenStem, LunarDate, LunarDateConverter, Pillar, PillarError,
    Polarity, Stem,
};

// Re-export analysis types.
pub use saju_analysis::{
    ALL_POSITIONS, ALL_SINSALS, ALL_TEN_GODS, ChartPillars, ElementPair, PillarPosition,
    PunishmentKind, Relation, Season, Sinsal, SinsalMatch, StrengthFactors, StrengthLevel,
    StrengthResult, TenGod, TenGodEntry, TenGodsResult, TransformStatus, YongshenMethod,
    YongshenResult,
};
