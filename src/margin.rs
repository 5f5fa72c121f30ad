//! Safety margin between stop and liquidation, and money at risk.

use std::fmt;
use std::str::FromStr;

use crate::Side;
use crate::error::ParseSizeModeError;

/// Unit a position size is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizeMode {
    /// Notional in quote currency (e.g. USDT).
    #[default]
    Quote,
    /// Quantity of the base asset (e.g. BTC).
    Base,
}

impl fmt::Display for SizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeMode::Quote => write!(f, "quote"),
            SizeMode::Base => write!(f, "base"),
        }
    }
}

impl FromStr for SizeMode {
    type Err = ParseSizeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quote" => Ok(SizeMode::Quote),
            "base" => Ok(SizeMode::Base),
            _ => Err(ParseSizeModeError(s.to_string())),
        }
    }
}

/// Price gap between stop and liquidation, in percent of entry.
///
/// Positive when the stop fires before liquidation. Negative when
/// liquidation comes first, which is a meaningful answer rather than an error.
#[inline]
pub fn safety_margin_percent(entry: f64, stop: f64, liquidation_price: f64, side: Side) -> f64 {
    let gap = match side {
        Side::Long => stop - liquidation_price,
        Side::Short => liquidation_price - stop,
    };
    gap / entry * 100.0
}

/// Loss at the stop for a notional of `quote_size` quote currency.
#[inline]
pub fn risk_value_quote(entry: f64, stop: f64, quote_size: f64) -> f64 {
    (entry - stop).abs() * (quote_size / entry)
}

/// Loss at the stop for `base_qty` units of the base asset.
#[inline]
pub fn risk_value_base(entry: f64, stop: f64, base_qty: f64) -> f64 {
    (entry - stop).abs() * base_qty
}

/// Dispatch to [`risk_value_quote`] or [`risk_value_base`] by `mode`.
pub fn risk_value(entry: f64, stop: f64, size: f64, mode: SizeMode) -> f64 {
    match mode {
        SizeMode::Quote => risk_value_quote(entry, stop, size),
        SizeMode::Base => risk_value_base(entry, stop, size),
    }
}
