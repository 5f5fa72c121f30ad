//! Three-level risk classification from leverage and safety margin.

use std::fmt;

/// Leverage above this is always [`RiskLevel::High`].
pub const HIGH_LEVERAGE: f64 = 50.0;
/// Leverage at or below this can be [`RiskLevel::Low`].
pub const LOW_LEVERAGE: f64 = 20.0;
/// Safety margin (percent) below this is always [`RiskLevel::High`].
pub const MIN_SAFE_MARGIN_PCT: f64 = 0.25;
/// Safety margin (percent) at or above this can be [`RiskLevel::Low`].
pub const COMFORT_MARGIN_PCT: f64 = 0.75;

/// Risk category, ordered by severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// Classify a position. First matching rule wins:
///
/// 1. `Low` if leverage `<= 20` and margin `>= 0.75%`
/// 2. `High` if leverage `> 50` or margin `< 0.25%`
/// 3. `Medium` otherwise
pub fn risk_level_from(leverage: f64, margin_pct: f64) -> RiskLevel {
    if leverage <= LOW_LEVERAGE && margin_pct >= COMFORT_MARGIN_PCT {
        RiskLevel::Low
    } else if leverage > HIGH_LEVERAGE || margin_pct < MIN_SAFE_MARGIN_PCT {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}
