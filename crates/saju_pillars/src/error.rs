//! Error types for pillar calculation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_ephem::EphemError;
use saju_time::TimeError;

/// Errors from pillar calculators and the chart composer.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PillarError {
    /// Character outside the closed 10-stem / 12-branch domain.
    InvalidSymbol(char),
    /// Pillar label is not exactly two symbols.
    InvalidLabel(String),
    /// Mean-solar-time correction requested without a longitude.
    MissingLongitude,
    /// Unrecognized preset or day-boundary name.
    UnknownPreset(String),
    /// Error from the solar-term locator.
    Ephem(EphemError),
    /// Error from zone-offset handling.
    Time(TimeError),
}

impl Display for PillarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSymbol(c) => write!(f, "invalid stem/branch symbol: {c}"),
            Self::InvalidLabel(s) => write!(f, "invalid pillar label: {s}"),
            Self::MissingLongitude => {
                write!(f, "mean solar time correction requires a longitude")
            }
            Self::UnknownPreset(s) => write!(f, "unknown preset: {s}"),
            Self::Ephem(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for PillarError {}

impl From<EphemError> for PillarError {
    fn from(e: EphemError) -> Self {
        Self::Ephem(e)
    }
}

impl From<TimeError> for PillarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
