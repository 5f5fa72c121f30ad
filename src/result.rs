//! Aggregate output of a leverage calculation.

use std::fmt;

use crate::{RiskLevel, Warning};

/// Everything computed for one position. Built once, never mutated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationResult {
    /// Stop distance from entry, in percent
    pub stop_pct: f64,
    /// Unrounded maximum leverage `L*`
    pub l_star: f64,
    /// `L*` quantized to a leverage tier and capped
    pub l_max: f64,
    /// Leverage the liquidation and risk figures were computed with
    pub leverage_used: f64,
    /// Fraction of entry between entry and liquidation, never negative
    pub dliq_used: f64,
    /// Approximate liquidation price
    pub liquidation_price: f64,
    /// Gap between stop and liquidation in percent of entry (may be negative)
    pub margin_pct: f64,
    pub risk_level: RiskLevel,
    /// Money lost at the stop, present only when a positive size was given
    pub risk_value: Option<f64>,
    pub stop_price: f64,
    pub is_valid: bool,
    /// Warnings in the order they were raised
    pub warnings: Vec<Warning>,
}

impl CalculationResult {
    /// Result for non-positive prices: zeroed figures at 1x, high risk.
    pub(crate) fn invalid_prices(stop_price: f64) -> Self {
        Self {
            stop_pct: 0.0,
            l_star: 0.0,
            l_max: 1.0,
            leverage_used: 1.0,
            dliq_used: 0.0,
            liquidation_price: 0.0,
            margin_pct: 0.0,
            risk_level: RiskLevel::High,
            risk_value: None,
            stop_price,
            is_valid: false,
            warnings: vec![Warning::InvalidPrices],
        }
    }

    /// Result for a zero stop distance, keeping warnings raised so far.
    pub(crate) fn stop_equals_entry(entry: f64, mut warnings: Vec<Warning>) -> Self {
        warnings.push(Warning::StopEqualsEntry);
        Self {
            stop_pct: 0.0,
            l_star: 0.0,
            l_max: 1.0,
            leverage_used: 1.0,
            dliq_used: 0.0,
            liquidation_price: entry,
            margin_pct: 0.0,
            risk_level: RiskLevel::High,
            risk_value: None,
            stop_price: entry,
            is_valid: false,
            warnings,
        }
    }

    /// Warning messages in order.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "LEVERAGE CHECK: {}",
            if self.is_valid { "VALID" } else { "INVALID" }
        )?;
        writeln!(f, "  Stop distance:     {:.4}%", self.stop_pct)?;
        writeln!(f, "  Stop price:        {:.4}", self.stop_price)?;
        writeln!(f, "  Theoretical max:   {:.2}x", self.l_star)?;
        writeln!(f, "  Safe max (tier):   {}x", self.l_max)?;
        writeln!(f, "  Leverage used:     {}x", self.leverage_used)?;
        writeln!(f, "  Liquidation price: {:.4}", self.liquidation_price)?;
        writeln!(f, "  Safety margin:     {:.4}%", self.margin_pct)?;
        writeln!(f, "  Risk level:        {}", self.risk_level)?;
        if let Some(value) = self.risk_value {
            writeln!(f, "  Risk value:        {value:.2}")?;
        }
        for warning in &self.warnings {
            writeln!(f, "  [WARN] {warning}")?;
        }
        Ok(())
    }
}
