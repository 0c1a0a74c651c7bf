//! The 24 solar terms (절기), ordered from Ipchun (立春).
//!
//! Saju ordering starts the cycle at Ipchun (solar longitude 315°), the
//! boundary of the sexagenary year. Terms advance 15° apiece; even-indexed
//! terms are the 12 "Jie" (節) that bound sexagenary months, interleaved
//! with the 12 "Qi" (氣).

/// The 24 solar terms, Ipchun first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All 24 terms in cycle order (index 0 = Ipchun).
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

const ALL_TERM_NAMES: [&str; 24] = [
    "Ipchun", "Usu", "Gyeongchip", "Chunbun", "Cheongmyeong", "Gogu", "Ipha", "Soman",
    "Mangjong", "Haji", "Soseo", "Daeseo", "Ipchu", "Cheoseo", "Baengno", "Chubun", "Hallo",
    "Sanggang", "Ipdong", "Soseol", "Daeseol", "Dongji", "Sohan", "Daehan",
];

const ALL_TERM_HANJA: [&str; 24] = [
    "立春", "雨水", "驚蟄", "春分", "淸明", "穀雨", "立夏", "小滿", "芒種", "夏至", "小暑",
    "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
    "小寒", "大寒",
];

impl SolarTerm {
    /// 0-based index in cycle order (Ipchun=0 .. Daehan=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Usu => 1,
            Self::Gyeongchip => 2,
            Self::Chunbun => 3,
            Self::Cheongmyeong => 4,
            Self::Gogu => 5,
            Self::Ipha => 6,
            Self::Soman => 7,
            Self::Mangjong => 8,
            Self::Haji => 9,
            Self::Soseo => 10,
            Self::Daeseo => 11,
            Self::Ipchu => 12,
            Self::Cheoseo => 13,
            Self::Baengno => 14,
            Self::Chubun => 15,
            Self::Hallo => 16,
            Self::Sanggang => 17,
            Self::Ipdong => 18,
            Self::Soseol => 19,
            Self::Daeseol => 20,
            Self::Dongji => 21,
            Self::Sohan => 22,
            Self::Daehan => 23,
        }
    }

    /// Term at a cycle index (taken mod 24).
    pub const fn from_index(idx: u8) -> Self {
        ALL_TERMS[(idx % 24) as usize]
    }

    /// Korean romanized name.
    pub fn name(self) -> &'static str {
        ALL_TERM_NAMES[self.index() as usize]
    }

    /// Hanja rendering.
    pub fn hanja(self) -> &'static str {
        ALL_TERM_HANJA[self.index() as usize]
    }

    /// Solar longitude at which this term begins, degrees [0, 360).
    pub const fn longitude_deg(self) -> f64 {
        ((315 + 15 * self.index() as u32) % 360) as f64
    }

    /// Whether this is one of the 12 Jie terms bounding sexagenary months.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// The following term in the cycle.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// The most recently begun term for a solar longitude.
pub fn term_just_passed(sun_longitude_deg: f64) -> SolarTerm {
    let from_ipchun = (sun_longitude_deg - 315.0).rem_euclid(360.0);
    SolarTerm::from_index((from_ipchun / 15.0).floor() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
        }
    }

    #[test]
    fn longitudes_are_fifteen_degree_steps() {
        assert!((SolarTerm::Ipchun.longitude_deg() - 315.0).abs() < 1e-12);
        assert!((SolarTerm::Chunbun.longitude_deg() - 0.0).abs() < 1e-12);
        assert!((SolarTerm::Haji.longitude_deg() - 90.0).abs() < 1e-12);
        assert!((SolarTerm::Dongji.longitude_deg() - 270.0).abs() < 1e-12);
    }

    #[test]
    fn twelve_jie_terms() {
        let jie: Vec<_> = ALL_TERMS.iter().filter(|t| t.is_jie()).collect();
        assert_eq!(jie.len(), 12);
        assert!(SolarTerm::Ipchun.is_jie());
        assert!(!SolarTerm::Chunbun.is_jie());
        assert!(SolarTerm::Daeseol.is_jie());
        assert!(!SolarTerm::Dongji.is_jie());
    }

    #[test]
    fn term_lookup_by_longitude() {
        assert_eq!(term_just_passed(315.0), SolarTerm::Ipchun);
        assert_eq!(term_just_passed(329.9), SolarTerm::Ipchun);
        assert_eq!(term_just_passed(330.0), SolarTerm::Usu);
        assert_eq!(term_just_passed(0.0), SolarTerm::Chunbun);
        assert_eq!(term_just_passed(314.9), SolarTerm::Daehan);
        assert_eq!(term_just_passed(54.2), SolarTerm::Ipha);
    }

    #[test]
    fn next_wraps() {
        assert_eq!(SolarTerm::Daehan.next(), SolarTerm::Ipchun);
        assert_eq!(SolarTerm::Ipchun.next(), SolarTerm::Usu);
    }
}
