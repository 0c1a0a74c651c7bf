//! Classification analyses over a Four Pillars chart.
//!
//! This crate provides the five rule engines derived from a chart:
//! - Ten God classification (십신)
//! - Day-master strength scoring (신강약)
//! - Yongshen selection (용신)
//! - Stem/branch relations (합충형해파)
//! - Sinsal markers (신살)
//!
//! Every engine is a pure function of a [`ChartPillars`] value; charts
//! come from the composer in `saju_pillars` or from four `"甲寅"`-style
//! labels via [`ChartPillars::from_labels`].

pub mod chart;
pub mod relations;
pub mod sinsal;
pub mod strength;
pub mod ten_gods;
pub mod yongshen;

pub use chart::{ALL_POSITIONS, ChartPillars, PillarPosition};
pub use relations::{PunishmentKind, Relation, TransformStatus, analyze_relations};
pub use sinsal::{ALL_SINSALS, Sinsal, SinsalMatch, analyze_sinsal};
pub use strength::{
    ALL_LEVELS, SeasonCategory, StrengthFactors, StrengthLevel, StrengthResult, analyze_strength,
    seasonal_multiplier,
};
pub use ten_gods::{
    ALL_TEN_GODS, ElementRelation, TenGod, TenGodEntry, TenGodsResult, analyze_ten_gods,
    ten_god_for, ten_god_for_branch,
};
pub use yongshen::{
    ElementPair, Season, YongshenMethod, YongshenResult, analyze_yongshen, johu_for,
};
