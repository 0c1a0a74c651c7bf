//! Solar ephemeris and 24-solar-term machinery.
//!
//! This crate provides:
//! - Low-precision apparent solar longitude (arc-minute class), sufficient
//!   for day/hour-level solar-term timing
//! - The 24 solar terms with their ecliptic longitudes and Jie/Qi roles
//! - A bounded bisection locator for term-crossing instants
//! - A reporter for current/next term and bounding Jie terms
//!
//! All implementations are clean-room, from standard solar-position
//! formulas (Meeus, Astronomical Algorithms ch. 25).

pub mod error;
pub mod locate;
pub mod reporter;
pub mod solar;
pub mod terms;

pub use error::EphemError;
pub use locate::{locate_crossing, signed_angle_diff};
pub use reporter::{SolarTermInfo, TermEvent, solar_terms_for};
pub use solar::{apparent_sun_longitude, normalize_360, sun_longitude_at_millis};
pub use terms::{ALL_TERMS, SolarTerm, term_just_passed};
