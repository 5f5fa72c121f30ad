//! Advisory and rejection warnings attached to a calculation.

use std::fmt;

/// Something the calculator noticed about its inputs or outputs.
///
/// `Display` renders the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Warning {
    /// Entry or stop is not a positive price.
    InvalidPrices,
    /// Long position with the stop at or above entry.
    StopAboveEntryForLong,
    /// Short position with the stop at or below entry.
    StopBelowEntryForShort,
    /// Zero stop distance.
    StopEqualsEntry,
    /// The requested leverage was replaced by the safe maximum.
    ExceedsSafeMax { desired: f64, safe_max: f64 },
    /// The stop is so wide that no leverage above 1x is safe.
    StopTooWide,
    /// Safety margin below the minimum.
    CloseToLiquidation,
}

impl Warning {
    /// True for warnings that do not count against validity.
    ///
    /// Only [`Warning::ExceedsSafeMax`] is informational: the calculator
    /// already substituted the safe leverage.
    pub fn is_informational(&self) -> bool {
        matches!(self, Warning::ExceedsSafeMax { .. })
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InvalidPrices => write!(f, "Invalid prices"),
            Warning::StopAboveEntryForLong => {
                write!(f, "Stop should be below entry for long positions")
            }
            Warning::StopBelowEntryForShort => {
                write!(f, "Stop should be above entry for short positions")
            }
            Warning::StopEqualsEntry => write!(f, "Stop cannot equal entry"),
            Warning::ExceedsSafeMax { desired, safe_max } => {
                write!(f, "Desired leverage {desired}x exceeds safe max {safe_max}x")
            }
            Warning::StopTooWide => write!(f, "Stop too wide for leverage increase"),
            Warning::CloseToLiquidation => write!(f, "High risk: Stop is close to liquidation"),
        }
    }
}
