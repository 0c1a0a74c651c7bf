//! High-level entry points over labels and instants.

use saju_ephem::{EphemError, SolarTermInfo, solar_terms_for};
use saju_pillars::{
    ChartOptions, FourPillars, LunarDateConverter, PillarError, four_pillars as compose,
};
use saju_time::CalendarAdapter;

use saju_analysis::{
    ChartPillars, Relation, SinsalMatch, StrengthResult, TenGodsResult, YongshenResult,
    analyze_relations, analyze_sinsal, analyze_strength, analyze_ten_gods, analyze_yongshen,
};

/// Compose a chart for an instant (no lunar annotation).
pub fn chart<A: CalendarAdapter>(
    adapter: &A,
    instant: &A::Instant,
    options: &ChartOptions,
) -> Result<FourPillars, PillarError> {
    compose(adapter, instant, options, None)
}

/// Compose a chart with a lunar converter for the effective day.
pub fn chart_with_lunar<A: CalendarAdapter>(
    adapter: &A,
    instant: &A::Instant,
    options: &ChartOptions,
    converter: &dyn LunarDateConverter,
) -> Result<FourPillars, PillarError> {
    compose(adapter, instant, options, Some(converter))
}

fn parse(labels: [&str; 4]) -> Result<ChartPillars, PillarError> {
    ChartPillars::from_labels(labels[0], labels[1], labels[2], labels[3])
}

/// Ten god classification from four pillar labels.
pub fn ten_gods(labels: [&str; 4]) -> Result<TenGodsResult, PillarError> {
    Ok(analyze_ten_gods(&parse(labels)?))
}

/// Day-master strength from four pillar labels.
pub fn strength(labels: [&str; 4]) -> Result<StrengthResult, PillarError> {
    Ok(analyze_strength(&parse(labels)?))
}

/// Yongshen selection from four pillar labels.
pub fn yongshen(labels: [&str; 4]) -> Result<YongshenResult, PillarError> {
    Ok(analyze_yongshen(&parse(labels)?))
}

/// Relations from four pillar labels.
pub fn relations(labels: [&str; 4]) -> Result<Vec<Relation>, PillarError> {
    Ok(analyze_relations(&parse(labels)?))
}

/// Sinsal markers from four pillar labels.
pub fn sinsals(labels: [&str; 4]) -> Result<Vec<SinsalMatch>, PillarError> {
    Ok(analyze_sinsal(&parse(labels)?))
}

/// Solar term report for an instant.
pub fn solar_terms<A: CalendarAdapter>(
    adapter: &A,
    instant: &A::Instant,
) -> Result<SolarTermInfo<A::Instant>, EphemError> {
    solar_terms_for(adapter, instant)
}
