//! Sexagenary symbols: the 10 heavenly stems and 12 earthly branches.
//!
//! Each stem carries a fixed element and polarity; each branch additionally
//! carries its hidden stems (장간) with the weights used by the strength
//! engine. The 60-cycle pairing is index arithmetic: stem `i mod 10` with
//! branch `i mod 12`.

use crate::error::PillarError;

/// The five elements (오행).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// The element this one generates (상생 cycle).
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one controls (상극 cycle).
    pub const fn controls(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// Korean romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Mok",
            Self::Fire => "Hwa",
            Self::Earth => "To",
            Self::Metal => "Geum",
            Self::Water => "Su",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Hanja rendering.
    pub const fn hanja(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }
}

/// Yin/yang polarity (음양).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

/// The 10 heavenly stems (천간), 甲 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order.
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const ALL_STEM_HANJA: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const ALL_STEM_NAMES: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at a cycle index (taken mod 10).
    pub const fn from_index(idx: u8) -> Self {
        ALL_STEMS[(idx % 10) as usize]
    }

    /// Stem for a hanja character.
    pub fn from_hanja(c: char) -> Result<Self, PillarError> {
        match ALL_STEM_HANJA.iter().position(|&h| h == c) {
            Some(i) => Ok(ALL_STEMS[i]),
            None => Err(PillarError::InvalidSymbol(c)),
        }
    }

    /// Korean romanized name.
    pub fn name(self) -> &'static str {
        ALL_STEM_NAMES[self.index() as usize]
    }

    /// Hanja rendering.
    pub fn hanja(self) -> char {
        ALL_STEM_HANJA[self.index() as usize]
    }

    /// Fixed element of the stem.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    /// Fixed polarity: even indices yang, odd yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

/// The 12 earthly branches (지지), 子 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order.
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const ALL_BRANCH_HANJA: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const ALL_BRANCH_NAMES: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];

/// One hidden stem (장간) with its contribution weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenStem {
    pub stem: Stem,
    pub weight: f64,
}

const fn hs(stem: Stem, weight: f64) -> HiddenStem {
    HiddenStem { stem, weight }
}

/// Hidden stems per branch, primary (본기) first, weights summing to ≤1.0.
static HIDDEN_STEMS: [&[HiddenStem]; 12] = [
    &[hs(Stem::Gye, 0.7), hs(Stem::Im, 0.3)],                       // 子
    &[hs(Stem::Gi, 0.6), hs(Stem::Gye, 0.2), hs(Stem::Sin, 0.2)],   // 丑
    &[hs(Stem::Gap, 0.6), hs(Stem::Byeong, 0.25), hs(Stem::Mu, 0.15)], // 寅
    &[hs(Stem::Eul, 0.7), hs(Stem::Gap, 0.3)],                      // 卯
    &[hs(Stem::Mu, 0.6), hs(Stem::Eul, 0.25), hs(Stem::Gye, 0.15)], // 辰
    &[hs(Stem::Byeong, 0.6), hs(Stem::Gyeong, 0.25), hs(Stem::Mu, 0.15)], // 巳
    &[hs(Stem::Jeong, 0.7), hs(Stem::Gi, 0.3)],                     // 午
    &[hs(Stem::Gi, 0.6), hs(Stem::Jeong, 0.25), hs(Stem::Eul, 0.15)], // 未
    &[hs(Stem::Gyeong, 0.6), hs(Stem::Im, 0.25), hs(Stem::Mu, 0.15)], // 申
    &[hs(Stem::Sin, 1.0)],                                          // 酉
    &[hs(Stem::Mu, 0.6), hs(Stem::Sin, 0.25), hs(Stem::Jeong, 0.15)], // 戌
    &[hs(Stem::Im, 0.7), hs(Stem::Gap, 0.3)],                       // 亥
];

impl Branch {
    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at a cycle index (taken mod 12).
    pub const fn from_index(idx: u8) -> Self {
        ALL_BRANCHES[(idx % 12) as usize]
    }

    /// Branch for a hanja character.
    pub fn from_hanja(c: char) -> Result<Self, PillarError> {
        match ALL_BRANCH_HANJA.iter().position(|&h| h == c) {
            Some(i) => Ok(ALL_BRANCHES[i]),
            None => Err(PillarError::InvalidSymbol(c)),
        }
    }

    /// Korean romanized name.
    pub fn name(self) -> &'static str {
        ALL_BRANCH_NAMES[self.index() as usize]
    }

    /// Hanja rendering.
    pub fn hanja(self) -> char {
        ALL_BRANCH_HANJA[self.index() as usize]
    }

    /// Fixed element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Fixed polarity: even indices yang, odd yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Hidden stems, primary (본기) first.
    pub fn hidden_stems(self) -> &'static [HiddenStem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// The primary (본기) hidden stem.
    pub fn primary_hidden_stem(self) -> Stem {
        HIDDEN_STEMS[self.index() as usize][0].stem
    }
}

/// One stem+branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pillar at a sexagenary index: stem `idx mod 10`, branch `idx mod 12`.
    pub const fn from_index60(idx: u8) -> Self {
        Self {
            stem: Stem::from_index(idx % 10),
            branch: Branch::from_index(idx % 12),
        }
    }

    /// Sexagenary index of a cycle pillar (0-59).
    ///
    /// Inverts [`Pillar::from_index60`] via the residue pairing
    /// `i ≡ stem (mod 10)`, `i ≡ branch (mod 12)`.
    pub fn index60(self) -> u8 {
        (6 * self.stem.index() as i32 - 5 * self.branch.index() as i32).rem_euclid(60) as u8
    }

    /// Canonical two-hanja label, e.g. `甲寅`.
    pub fn label(self) -> String {
        let mut s = String::with_capacity(8);
        s.push(self.stem.hanja());
        s.push(self.branch.hanja());
        s
    }

    /// Parse a two-hanja label. Unknown symbols are a caller defect.
    pub fn from_label(label: &str) -> Result<Self, PillarError> {
        let mut chars = label.chars();
        let (Some(s), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PillarError::InvalidLabel(label.to_string()));
        };
        Ok(Self {
            stem: Stem::from_hanja(s)?,
            branch: Branch::from_hanja(b)?,
        })
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_cycles_are_bijections() {
        for e in ALL_ELEMENTS {
            assert!(ALL_ELEMENTS.iter().filter(|x| x.generates() == e).count() == 1);
            assert!(ALL_ELEMENTS.iter().filter(|x| x.controls() == e).count() == 1);
            // generating and controlling targets always differ
            assert_ne!(e.generates(), e.controls());
        }
    }

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn stem_polarity_alternates() {
        assert_eq!(Stem::Gap.polarity(), Polarity::Yang);
        assert_eq!(Stem::Eul.polarity(), Polarity::Yin);
        assert_eq!(Stem::Gye.polarity(), Polarity::Yin);
    }

    #[test]
    fn hidden_stem_weights_bounded() {
        for b in ALL_BRANCHES {
            let total: f64 = b.hidden_stems().iter().map(|h| h.weight).sum();
            assert!(total <= 1.0 + 1e-9, "{}: {total}", b.name());
            assert!(!b.hidden_stems().is_empty());
            assert!(b.hidden_stems().len() <= 3);
        }
    }

    #[test]
    fn primary_hidden_matches_branch_element() {
        // 본기 carries the branch's own element
        for b in ALL_BRANCHES {
            assert_eq!(b.primary_hidden_stem().element(), b.element(), "{}", b.name());
        }
    }

    #[test]
    fn pillar_index60_roundtrip() {
        for i in 0..60 {
            let p = Pillar::from_index60(i);
            assert_eq!(p.index60(), i);
        }
    }

    #[test]
    fn pillar_label_roundtrip() {
        let p = Pillar::from_index60(50);
        assert_eq!(p.label(), "甲寅");
        assert_eq!(Pillar::from_label("甲寅").unwrap(), p);
    }

    #[test]
    fn bad_label_rejected() {
        assert!(Pillar::from_label("甲").is_err());
        assert!(Pillar::from_label("甲寅子").is_err());
        assert!(matches!(
            Pillar::from_label("X寅"),
            Err(PillarError::InvalidSymbol('X'))
        ));
    }
}
