//! Four Pillars composer: the single entry point for chart construction.

use saju_time::{CalendarAdapter, ZoneOffset};

use crate::boundary::effective_day;
use crate::config::{ChartOptions, ChartPreset};
use crate::day::day_pillar_from_date;
use crate::error::PillarError;
use crate::ganji::Pillar;
use crate::hour::hour_pillar;
use crate::lunar::{LunarDate, LunarDateConverter};
use crate::month::month_pillar;
use crate::year::year_pillar;

/// A complete Four Pillars chart.
#[derive(Debug, Clone, PartialEq)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Calendar year after the Lichun boundary is applied.
    pub solar_year: i32,
    /// Apparent solar longitude at the instant, degrees.
    pub sun_longitude_deg: f64,
    /// Effective calendar date the day pillar was computed from.
    pub effective_day: (i32, u32, u32),
    /// Boundary/correction policy the chart was built under.
    pub preset: ChartPreset,
    /// Lunar date of the effective day, when a converter covers it.
    pub lunar: Option<LunarDate>,
}

impl FourPillars {
    /// The four pillar labels in year/month/day/hour order.
    pub fn labels(&self) -> [String; 4] {
        [
            self.year.label(),
            self.month.label(),
            self.day.label(),
            self.hour.label(),
        ]
    }
}

/// Compose a chart for a local instant.
///
/// When `options.tz_offset_hours` is set, the instant is re-viewed in that
/// zone first; otherwise its own zone is used. The lunar converter runs on
/// the effective day.
pub fn four_pillars<A: CalendarAdapter>(
    adapter: &A,
    instant: &A::Instant,
    options: &ChartOptions,
    lunar: Option<&dyn LunarDateConverter>,
) -> Result<FourPillars, PillarError> {
    let local = match options.tz_offset_hours {
        Some(hours) => adapter.set_zone(instant, ZoneOffset::from_hours(hours)?),
        None => instant.clone(),
    };

    let year = year_pillar(adapter, &local)?;
    let month = month_pillar(adapter, &local, year.pillar.stem);

    let eff = effective_day(adapter, &local, &options.preset, Some(options.longitude_deg))?;
    let day = day_pillar_from_date(eff.0, eff.1, eff.2);
    let hour = hour_pillar(adapter, &local, &options.preset, Some(options.longitude_deg))?;

    let lunar_date = lunar.and_then(|c| c.lunar_date(eff.0, eff.1, eff.2));

    Ok(FourPillars {
        year: year.pillar,
        month: month.pillar,
        day: day.pillar,
        hour: hour.pillar,
        solar_year: year.solar_year,
        sun_longitude_deg: month.sun_longitude_deg,
        effective_day: eff,
        preset: options.preset,
        lunar: lunar_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_chrono::ChronoAdapter;
    use saju_time::ZoneOffset;

    fn seoul() -> ZoneOffset {
        ZoneOffset::from_hours(9.0).unwrap()
    }

    #[test]
    fn millennium_chart_standard() {
        let adapter = ChronoAdapter::new();
        let t = adapter.local(2000, 1, 1, 18, 0, 0, seoul());
        let chart = four_pillars(&adapter, &t, &ChartOptions::standard(126.9), None).unwrap();
        assert_eq!(chart.labels(), ["己卯", "丙子", "戊午", "辛酉"]);
        assert_eq!(chart.solar_year, 1999);
        assert_eq!(chart.effective_day, (2000, 1, 1));
        assert!(chart.lunar.is_none());
    }

    #[test]
    fn explicit_tz_offset_matches_zone() {
        let adapter = ChronoAdapter::new();
        let in_seoul = adapter.local(2000, 1, 1, 18, 0, 0, seoul());
        let utc_view = adapter.local(2000, 1, 1, 9, 0, 0, ZoneOffset::UTC);
        let opts = ChartOptions {
            tz_offset_hours: Some(9.0),
            ..ChartOptions::standard(126.9)
        };
        let a = four_pillars(&adapter, &in_seoul, &ChartOptions::standard(126.9), None).unwrap();
        let b = four_pillars(&adapter, &utc_view, &opts, None).unwrap();
        assert_eq!(a.labels(), b.labels());
    }

    #[test]
    fn traditional_preset_rolls_late_evening() {
        let adapter = ChronoAdapter::new();
        let t = adapter.local(1985, 5, 15, 23, 40, 0, seoul());
        let standard =
            four_pillars(&adapter, &t, &ChartOptions::standard(126.9), None).unwrap();
        let traditional =
            four_pillars(&adapter, &t, &ChartOptions::traditional(126.9), None).unwrap();
        assert_eq!(standard.effective_day, (1985, 5, 15));
        assert_eq!(traditional.effective_day, (1985, 5, 16));
        assert_eq!(
            (standard.day.index60() + 1) % 60,
            traditional.day.index60()
        );
    }
}
