//! Calculator parameters shared across calls.

use crate::error::ParamsError;

/// Liquidation buffer and leverage cap applied to every calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RiskParams {
    /// Headroom in percent of entry kept between stop and liquidation.
    pub buffer_pct: f64,
    /// Highest leverage the venue allows.
    pub leverage_cap: f64,
}

impl RiskParams {
    /// Validate the parameters.
    ///
    /// The calculator accepts any numbers; this is for callers that load
    /// parameters from user input and want to reject nonsense early.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.buffer_pct.is_finite() || self.buffer_pct < 0.0 {
            return Err(ParamsError::Buffer(self.buffer_pct));
        }
        if !self.leverage_cap.is_finite() || self.leverage_cap < 1.0 {
            return Err(ParamsError::LeverageCap(self.leverage_cap));
        }
        Ok(())
    }
}

impl Default for RiskParams {
    fn default() -> Self {
        Self {
            buffer_pct: 0.5,
            leverage_cap: 100.0,
        }
    }
}
