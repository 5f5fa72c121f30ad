//! # levguard
//!
//! Pre-trade risk calculator for leveraged positions.
//!
//! Given an entry price, a stop-loss and a side, it derives the highest
//! leverage that keeps the stop clear of liquidation, the approximate
//! liquidation price, the safety margin between stop and liquidation, a risk
//! level and the money at risk.
//!
//! ## Quick Start
//!
//! ```
//! use levguard::{MetricsRequest, RiskLevel, Side, SizeMode, calculate_leverage_metrics};
//!
//! // Long BTC at 50,000 with a stop at 49,000 and 1,000 USDT notional
//! let req = MetricsRequest::new(50_000.0, 49_000.0, Side::Long)
//!     .with_size(1_000.0, SizeMode::Quote);
//! let result = calculate_leverage_metrics(&req);
//!
//! assert!(result.is_valid);
//! assert_eq!(result.l_max, 40.0);
//! assert_eq!(result.risk_level, RiskLevel::Medium);
//! assert!((result.risk_value.unwrap() - 20.0).abs() < 1e-9);
//! ```
//!
//! ## Leverage Tiers
//!
//! Safe leverage is always snapped down to one of [`LEVERAGE_STEPS`]:
//!
//! ```
//! use levguard::{LEVERAGE_STEPS, round_down_to_step};
//!
//! assert_eq!(round_down_to_step(18.2, &LEVERAGE_STEPS), 15.0);
//! assert_eq!(round_down_to_step(0.3, &LEVERAGE_STEPS), 1.0);
//! ```
//!
//! ## Warnings and Validity
//!
//! The calculator never fails. Bad input comes back as a result with
//! `is_valid == false` and a [`Warning`]:
//!
//! | Warning | Stops calculation | Affects validity |
//! |---------|-------------------|------------------|
//! | Invalid prices | yes | yes |
//! | Stop on the wrong side of entry | no | yes |
//! | Stop cannot equal entry | yes | yes |
//! | Desired leverage exceeds safe max | no | **no** |
//! | Stop too wide for leverage increase | no | yes |
//! | Close to liquidation | no | yes |
//!
//! ```
//! use levguard::{MetricsRequest, Side, calculate_leverage_metrics};
//!
//! let req = MetricsRequest::new(50_000.0, 49_000.0, Side::Long).with_desired_leverage(75.0);
//! let result = calculate_leverage_metrics(&req);
//!
//! assert!(result.is_valid);
//! assert_eq!(result.leverage_used, 40.0);
//! assert_eq!(result.warning_messages(), vec!["Desired leverage 75x exceeds safe max 40x"]);
//! ```

pub mod calculator;
pub mod classify;
pub mod convert;
mod error;
pub mod leverage;
pub mod margin;
mod params;
mod result;
mod side;
pub mod tiers;
mod warning;

// Re-export public API
pub use calculator::{MetricsRequest, calculate_leverage_metrics, leverage_table};
pub use classify::{RiskLevel, risk_level_from};
pub use convert::{stop_percent_from_prices, stop_price_from_percent};
pub use error::{ParamsError, ParseSideError, ParseSizeModeError};
pub use leverage::{
    liquidation_distance, liquidation_price_approx, max_leverage_from_stop_percent,
    theoretical_max_leverage,
};
pub use margin::{SizeMode, risk_value, risk_value_base, risk_value_quote, safety_margin_percent};
pub use params::RiskParams;
pub use result::CalculationResult;
pub use side::Side;
pub use tiers::{LEVERAGE_STEPS, round_down_to_step};
pub use warning::Warning;
