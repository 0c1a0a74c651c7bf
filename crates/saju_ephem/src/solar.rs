//! Low-precision apparent solar longitude.
//!
//! Mean elements and the equation of center from Meeus, Astronomical
//! Algorithms, ch. 25 (degree-based); nutation in longitude approximated
//! by the leading Ω term. Accuracy ≲0.01°, which resolves solar-term
//! crossings to well under an hour.

use saju_time::millis_to_jd;

/// Julian Date of the J2000.0 epoch.
pub const JD_J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Apparent ecliptic longitude of the Sun in degrees [0, 360).
///
/// `jd_ut` is the Julian Date of a UTC instant. The ΔT difference to
/// dynamical time is below the model's own error at this precision.
pub fn apparent_sun_longitude(jd_ut: f64) -> f64 {
    let t = (jd_ut - JD_J2000) / DAYS_PER_CENTURY;

    // Geometric mean longitude and mean anomaly (degrees)
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let m_rad = m.to_radians();

    // Equation of center
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_longitude = l0 + c;

    // Nutation + aberration correction via the lunar ascending node
    let omega = 125.04 - 1934.136 * t;
    let apparent = true_longitude - 0.00569 - 0.00478 * omega.to_radians().sin();

    normalize_360(apparent)
}

/// Apparent solar longitude at a Unix-epoch millisecond timestamp.
pub fn sun_longitude_at_millis(ms: i64) -> f64 {
    apparent_sun_longitude(millis_to_jd(ms))
}
