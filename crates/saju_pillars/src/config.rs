//! Chart presets and composer options.

use std::str::FromStr;

use crate::boundary::DayBoundary;
use crate::error::PillarError;

/// Bundled boundary/correction policy for chart construction.
///
/// Two presets ship; callers may build others field-by-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPreset {
    pub day_boundary: DayBoundary,
    pub mean_solar_time_for_hour: bool,
    pub mean_solar_time_for_boundary: bool,
}

impl ChartPreset {
    /// Civil-midnight boundary, no corrections.
    pub const STANDARD: ChartPreset = ChartPreset {
        day_boundary: DayBoundary::Midnight,
        mean_solar_time_for_hour: false,
        mean_solar_time_for_boundary: false,
    };

    /// 23:00 boundary with both mean-solar-time corrections.
    pub const TRADITIONAL: ChartPreset = ChartPreset {
        day_boundary: DayBoundary::Zi23,
        mean_solar_time_for_hour: true,
        mean_solar_time_for_boundary: true,
    };

    /// Name of a shipped preset, `custom` otherwise.
    pub fn name(&self) -> &'static str {
        if *self == Self::STANDARD {
            "standard"
        } else if *self == Self::TRADITIONAL {
            "traditional"
        } else {
            "custom"
        }
    }
}

impl FromStr for ChartPreset {
    type Err = PillarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::STANDARD),
            "traditional" => Ok(Self::TRADITIONAL),
            other => Err(PillarError::UnknownPreset(other.to_string())),
        }
    }
}

/// Options for the Four Pillars composer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    /// Geographic longitude in degrees east (required; the mean-solar-time
    /// corrections and metadata depend on it).
    pub longitude_deg: f64,
    /// Explicit UTC offset in hours; the instant's own zone when `None`.
    pub tz_offset_hours: Option<f64>,
    pub preset: ChartPreset,
}

impl ChartOptions {
    /// Standard-preset options for a longitude.
    pub fn standard(longitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            tz_offset_hours: None,
            preset: ChartPreset::STANDARD,
        }
    }

    /// Traditional-preset options for a longitude.
    pub fn traditional(longitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            tz_offset_hours: None,
            preset: ChartPreset::TRADITIONAL,
        }
    }
}
