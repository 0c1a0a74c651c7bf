//! Error types for ephemeris searches.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar-term location.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Bracket expansion exhausted without a sign change. A logic defect
    /// in the caller's bracket, not a transient condition.
    BracketFailed(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BracketFailed(msg) => write!(f, "failed to bracket solar term: {msg}"),
        }
    }
}

impl Error for EphemError {}
