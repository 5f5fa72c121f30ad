//! Position side: Long or Short

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSideError;

/// Direction of a leveraged position.
///
/// Decides which price move is adverse: down for longs, up for shorts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Long,
    Short,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Long => Side::Short,
            Side::Short => Side::Long,
        }
    }

    /// Sign of an adverse price move: `-1.0` for longs, `+1.0` for shorts.
    #[inline]
    pub fn adverse_sign(self) -> f64 {
        match self {
            Side::Long => -1.0,
            Side::Short => 1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Long => write!(f, "LONG"),
            Side::Short => write!(f, "SHORT"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" | "buy" => Ok(Side::Long),
            "short" | "sell" => Ok(Side::Short),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}
