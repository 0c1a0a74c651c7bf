//! Bounded bisection search for solar-term crossing instants.

use saju_time::MILLIS_PER_DAY;

use crate::error::EphemError;
use crate::solar::sun_longitude_at_millis;

/// Maximum ±1 day bracket expansions before giving up.
pub const MAX_BRACKET_EXPANSIONS: u32 = 10;

/// Maximum bisection iterations.
pub const MAX_BISECTION_STEPS: u32 = 80;

/// Convergence threshold on |longitude − target|, degrees.
pub const CONVERGENCE_DEG: f64 = 1e-6;

/// Signed angular difference `a − b` mapped into (−180, 180].
///
/// Handles the 360°→0° wrap so a crossing of any target longitude is a
/// simple sign change.
pub fn signed_angle_diff(a: f64, b: f64) -> f64 {
    (a - b + 540.0).rem_euclid(360.0) - 180.0
}

/// UTC millisecond instant at which the Sun crosses `target_deg`.
///
/// `[start_ms, end_ms]` is the expected bracket. If the bracket misses the
/// crossing it is widened by one day on each side, up to
/// [`MAX_BRACKET_EXPANSIONS`] times; exhausting the expansions is a caller
/// logic defect and fails with [`EphemError::BracketFailed`]. Bisection then
/// runs on millisecond midpoints until [`CONVERGENCE_DEG`] or
/// [`MAX_BISECTION_STEPS`].
pub fn locate_crossing(target_deg: f64, start_ms: i64, end_ms: i64) -> Result<i64, EphemError> {
    let f = |ms: i64| signed_angle_diff(sun_longitude_at_millis(ms), target_deg);

    let mut lo = start_ms;
    let mut hi = end_ms;
    let mut f_lo = f(lo);
    let mut f_hi = f(hi);

    let mut expansions = 0;
    while f_lo * f_hi > 0.0 {
        if expansions == MAX_BRACKET_EXPANSIONS {
            return Err(EphemError::BracketFailed(
                "no sign change within expanded interval",
            ));
        }
        lo -= MILLIS_PER_DAY;
        hi += MILLIS_PER_DAY;
        f_lo = f(lo);
        f_hi = f(hi);
        expansions += 1;
    }

    let mut mid = lo + (hi - lo) / 2;
    for _ in 0..MAX_BISECTION_STEPS {
        let f_mid = f(mid);
        if f_mid.abs() < CONVERGENCE_DEG || hi - lo <= 1 {
            break;
        }
        if f_lo * f_mid <= 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
        mid = lo + (hi - lo) / 2;
    }
    Ok(mid)
}
