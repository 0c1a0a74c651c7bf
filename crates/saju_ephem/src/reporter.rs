//! Solar term reporting for a query instant.
//!
//! Locates the most recently begun and next upcoming of the 24 terms, plus
//! the bounding Jie terms that delimit sexagenary months. Downstream
//! luck-cycle timing consumes the Jie offsets.

use saju_time::{CalendarAdapter, MILLIS_PER_DAY};

use crate::error::EphemError;
use crate::locate::locate_crossing;
use crate::solar::sun_longitude_at_millis;
use crate::terms::{SolarTerm, term_just_passed};

/// One located term-crossing instant, in UTC and the query's own zone.
#[derive(Debug, Clone)]
pub struct TermEvent<I> {
    pub term: SolarTerm,
    pub utc: I,
    pub local: I,
    pub millis: i64,
}

/// Current/next term and bounding Jie terms around a query instant.
#[derive(Debug, Clone)]
pub struct SolarTermInfo<I> {
    /// Apparent solar longitude at the query instant, degrees.
    pub sun_longitude_deg: f64,
    /// Most recently begun of the 24 terms.
    pub current: TermEvent<I>,
    /// Whole days elapsed since `current` began.
    pub days_since_current: i64,
    /// Next upcoming term.
    pub next: TermEvent<I>,
    /// Whole days until `next` begins.
    pub days_until_next: i64,
    /// Most recent Jie (month-boundary) term.
    pub prev_jie: TermEvent<I>,
    /// Whole days elapsed since `prev_jie` began.
    pub days_since_prev_jie: i64,
    /// Next upcoming Jie term.
    pub next_jie: TermEvent<I>,
    /// Whole days until `next_jie` begins.
    pub days_until_next_jie: i64,
}

fn term_event<A: CalendarAdapter>(
    adapter: &A,
    reference: &A::Instant,
    term: SolarTerm,
    start_ms: i64,
    end_ms: i64,
) -> Result<TermEvent<A::Instant>, EphemError> {
    let millis = locate_crossing(term.longitude_deg(), start_ms, end_ms)?;
    let utc = adapter.from_millis(millis, saju_time::ZoneOffset::UTC);
    let local = adapter.from_millis(millis, adapter.zone(reference));
    Ok(TermEvent {
        term,
        utc,
        local,
        millis,
    })
}

/// Report solar terms around `instant`.
///
/// Term crossings are bracketed by month-scale windows around the query
/// (terms are ~15.2 days apart, Jie terms ~30.4); the locator's bracket
/// expansion absorbs the residual variation.
pub fn solar_terms_for<A: CalendarAdapter>(
    adapter: &A,
    instant: &A::Instant,
) -> Result<SolarTermInfo<A::Instant>, EphemError> {
    let now_ms = adapter.to_millis(instant);
    let lon = sun_longitude_at_millis(now_ms);

    let current_term = term_just_passed(lon);
    let next_term = current_term.next();

    let current = term_event(
        adapter,
        instant,
        current_term,
        now_ms - 16 * MILLIS_PER_DAY,
        now_ms,
    )?;
    let next = term_event(adapter, instant, next_term, now_ms, now_ms + 16 * MILLIS_PER_DAY)?;

    // A non-Jie term is always preceded by a Jie term (index parity).
    let prev_jie_term = if current_term.is_jie() {
        current_term
    } else {
        SolarTerm::from_index(current_term.index() - 1)
    };
    let next_jie_term = if next_term.is_jie() {
        next_term
    } else {
        next_term.next()
    };

    let prev_jie = if prev_jie_term == current_term {
        current.clone()
    } else {
        term_event(
            adapter,
            instant,
            prev_jie_term,
            now_ms - 32 * MILLIS_PER_DAY,
            now_ms,
        )?
    };
    let next_jie = if next_jie_term == next_term {
        next.clone()
    } else {
        term_event(
            adapter,
            instant,
            next_jie_term,
            now_ms,
            now_ms + 32 * MILLIS_PER_DAY,
        )?
    };

    Ok(SolarTermInfo {
        sun_longitude_deg: lon,
        days_since_current: (now_ms - current.millis) / MILLIS_PER_DAY,
        days_until_next: (next.millis - now_ms) / MILLIS_PER_DAY,
        days_since_prev_jie: (now_ms - prev_jie.millis) / MILLIS_PER_DAY,
        days_until_next_jie: (next_jie.millis - now_ms) / MILLIS_PER_DAY,
        current,
        next,
        prev_jie,
        next_jie,
    })
}
