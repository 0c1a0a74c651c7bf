//! Chart input for the analysis engines: four pillars by position.

use saju_pillars::{Branch, Pillar, PillarError, Stem};

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// 0-based chart index (year=0 .. hour=3).
    pub const fn index(self) -> u8 {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    /// English position name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// The four pillars of a chart, the input of every analysis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPillars {
    pillars: [Pillar; 4],
}

impl ChartPillars {
    pub fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            pillars: [year, month, day, hour],
        }
    }

    /// Parse four two-hanja labels in year/month/day/hour order.
    pub fn from_labels(
        year: &str,
        month: &str,
        day: &str,
        hour: &str,
    ) -> Result<Self, PillarError> {
        Ok(Self::new(
            Pillar::from_label(year)?,
            Pillar::from_label(month)?,
            Pillar::from_label(day)?,
            Pillar::from_label(hour)?,
        ))
    }

    pub fn pillar(&self, position: PillarPosition) -> Pillar {
        self.pillars[position.index() as usize]
    }

    pub fn year(&self) -> Pillar {
        self.pillars[0]
    }

    pub fn month(&self) -> Pillar {
        self.pillars[1]
    }

    pub fn day(&self) -> Pillar {
        self.pillars[2]
    }

    pub fn hour(&self) -> Pillar {
        self.pillars[3]
    }

    /// The day master: the day pillar's stem, reference point of every
    /// classification.
    pub fn day_master(&self) -> Stem {
        self.day().stem
    }

    /// All four stems in chart order.
    pub fn stems(&self) -> [Stem; 4] {
        self.pillars.map(|p| p.stem)
    }

    /// All four branches in chart order.
    pub fn branches(&self) -> [Branch; 4] {
        self.pillars.map(|p| p.branch)
    }

    /// The three stems other than the day master, with positions.
    pub fn non_day_stems(&self) -> [(PillarPosition, Stem); 3] {
        [
            (PillarPosition::Year, self.year().stem),
            (PillarPosition::Month, self.month().stem),
            (PillarPosition::Hour, self.hour().stem),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_labels_roundtrip() {
        let c = ChartPillars::from_labels("己卯", "丙子", "戊午", "辛酉").unwrap();
        assert_eq!(c.year().label(), "己卯");
        assert_eq!(c.day_master(), Stem::Mu);
        assert_eq!(c.pillar(PillarPosition::Hour).label(), "辛酉");
    }

    #[test]
    fn bad_labels_rejected() {
        assert!(ChartPillars::from_labels("己卯", "丙子", "戊午", "辛").is_err());
        assert!(ChartPillars::from_labels("qq", "丙子", "戊午", "辛酉").is_err());
    }

    #[test]
    fn positions_sequential() {
        for (i, p) in ALL_POSITIONS.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }
}
