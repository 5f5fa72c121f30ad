//! Leverage calculator: validates a position and composes the pure formulas.
//!
//! Never fails. Bad or degenerate input produces a [`CalculationResult`] with
//! `is_valid == false` and a [`Warning`] explaining why.

use crate::classify::{MIN_SAFE_MARGIN_PCT, risk_level_from};
use crate::convert::{stop_percent_from_prices, stop_price_from_percent};
use crate::leverage::{
    liquidation_distance, liquidation_price_approx, max_leverage_from_stop_percent,
    theoretical_max_leverage,
};
use crate::margin::{SizeMode, risk_value, safety_margin_percent};
use crate::{CalculationResult, RiskParams, Side, Warning};

/// Inputs for one calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsRequest {
    pub entry: f64,
    pub stop: f64,
    pub side: Side,
    /// Leverage the trader wants. `None`, zero, negative or NaN means
    /// "use the safe maximum".
    pub desired_leverage: Option<f64>,
    pub params: RiskParams,
    /// Position size. `None` or non-positive means no risk value.
    pub size: Option<f64>,
    pub size_mode: SizeMode,
}

impl MetricsRequest {
    /// Request with default parameters, no desired leverage and no size.
    pub fn new(entry: f64, stop: f64, side: Side) -> Self {
        Self {
            entry,
            stop,
            side,
            desired_leverage: None,
            params: RiskParams::default(),
            size: None,
            size_mode: SizeMode::Quote,
        }
    }

    pub fn with_desired_leverage(mut self, leverage: f64) -> Self {
        self.desired_leverage = Some(leverage);
        self
    }

    pub fn with_params(mut self, params: RiskParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_size(mut self, size: f64, mode: SizeMode) -> Self {
        self.size = Some(size);
        self.size_mode = mode;
        self
    }
}

fn is_usable_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

/// Run the full leverage check for one position.
///
/// Stages, in order:
/// 1. non-positive or non-finite prices reject immediately
/// 2. a stop on the wrong side of entry warns but continues
/// 3. a zero stop distance rejects
/// 4. the safe maximum replaces any larger desired leverage
/// 5. liquidation price, safety margin, risk level and risk value
/// 6. trailing warnings, then validity
pub fn calculate_leverage_metrics(req: &MetricsRequest) -> CalculationResult {
    let MetricsRequest {
        entry,
        stop,
        side,
        desired_leverage,
        params,
        size,
        size_mode,
    } = *req;

    if !is_usable_price(entry) || !is_usable_price(stop) {
        return CalculationResult::invalid_prices(stop);
    }

    let mut warnings = Vec::new();
    match side {
        Side::Long if stop >= entry => warnings.push(Warning::StopAboveEntryForLong),
        Side::Short if stop <= entry => warnings.push(Warning::StopBelowEntryForShort),
        _ => {}
    }

    let stop_pct = stop_percent_from_prices(entry, stop);
    if stop_pct == 0.0 {
        return CalculationResult::stop_equals_entry(entry, warnings);
    }

    let l_star = theoretical_max_leverage(stop_pct, params.buffer_pct);
    let l_max = max_leverage_from_stop_percent(stop_pct, params.buffer_pct, params.leverage_cap);

    let leverage_used = match desired_leverage.filter(|d| *d > 0.0) {
        Some(desired) if desired > l_max => {
            warnings.push(Warning::ExceedsSafeMax {
                desired,
                safe_max: l_max,
            });
            l_max
        }
        Some(desired) => desired,
        None => l_max,
    };

    // The buffer is already reserved between stop and liquidation by L*,
    // so the liquidation estimate itself takes none.
    let dliq_used = liquidation_distance(leverage_used, 0.0);
    let liquidation_price = liquidation_price_approx(entry, leverage_used, 0.0, side);
    let margin_pct = safety_margin_percent(entry, stop, liquidation_price, side);
    let risk_level = risk_level_from(leverage_used, margin_pct);

    let risk_value = size
        .filter(|s| *s > 0.0)
        .map(|s| risk_value(entry, stop, s, size_mode));

    if l_max == 1.0 {
        warnings.push(Warning::StopTooWide);
    }
    if margin_pct < MIN_SAFE_MARGIN_PCT {
        warnings.push(Warning::CloseToLiquidation);
    }

    let is_valid = warnings.iter().all(Warning::is_informational);

    CalculationResult {
        stop_pct,
        l_star,
        l_max,
        leverage_used,
        dliq_used,
        liquidation_price,
        margin_pct,
        risk_level,
        risk_value,
        stop_price: stop,
        is_valid,
        warnings,
    }
}

/// Calculator output for a range of stop distances at a fixed entry.
///
/// Each row is `(stop_pct, result)` with the stop placed `stop_pct` away on
/// the adverse side and no desired leverage.
pub fn leverage_table(
    entry: f64,
    side: Side,
    params: RiskParams,
    stop_pcts: &[f64],
) -> Vec<(f64, CalculationResult)> {
    stop_pcts
        .iter()
        .map(|&pct| {
            let stop = stop_price_from_percent(entry, pct, side);
            let req = MetricsRequest::new(entry, stop, side).with_params(params);
            (pct, calculate_leverage_metrics(&req))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RiskLevel;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn btc_long() -> MetricsRequest {
        MetricsRequest::new(50_000.0, 49_000.0, Side::Long)
    }

    #[test]
    fn reference_long() {
        let r = calculate_leverage_metrics(&btc_long().with_size(1_000.0, SizeMode::Quote));
        assert!(r.is_valid);
        assert!(approx(r.stop_pct, 2.0));
        assert!(approx(r.l_star, 40.0));
        assert_eq!(r.l_max, 40.0);
        assert_eq!(r.leverage_used, 40.0);
        assert!(approx(r.liquidation_price, 48_750.0));
        assert!(approx(r.margin_pct, 0.5));
        assert_eq!(r.risk_level, RiskLevel::Medium);
        assert!(approx(r.risk_value.unwrap(), 20.0));
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn reference_short() {
        let req = MetricsRequest::new(50_000.0, 51_000.0, Side::Short);
        let r = calculate_leverage_metrics(&req);
        assert!(r.is_valid);
        assert_eq!(r.l_max, 40.0);
        assert!(approx(r.liquidation_price, 51_250.0));
        assert!(approx(r.margin_pct, 0.5));
        assert!(r.risk_value.is_none());
    }

    #[test]
    fn non_positive_prices() {
        for (entry, stop) in [
            (0.0, 49_000.0),
            (50_000.0, 0.0),
            (-1.0, -2.0),
            (f64::NAN, 49_000.0),
            (50_000.0, f64::INFINITY),
        ] {
            let r = calculate_leverage_metrics(&MetricsRequest::new(entry, stop, Side::Long));
            assert!(!r.is_valid);
            assert_eq!(r.l_max, 1.0);
            assert_eq!(r.risk_level, RiskLevel::High);
            assert_eq!(r.warnings, vec![Warning::InvalidPrices]);
        }
    }

    #[test]
    fn stop_equals_entry() {
        let r = calculate_leverage_metrics(&MetricsRequest::new(50_000.0, 50_000.0, Side::Long));
        assert!(!r.is_valid);
        assert_eq!(r.l_max, 1.0);
        assert_eq!(r.liquidation_price, 50_000.0);
        assert_eq!(
            r.warnings,
            vec![Warning::StopAboveEntryForLong, Warning::StopEqualsEntry]
        );
    }

    #[test]
    fn wrong_side_stop_continues() {
        // Long with the stop above entry: 2% away, same maths as a short.
        let r = calculate_leverage_metrics(&MetricsRequest::new(50_000.0, 51_000.0, Side::Long));
        assert!(!r.is_valid);
        assert_eq!(r.warnings[0], Warning::StopAboveEntryForLong);
        assert_eq!(r.l_max, 40.0);
    }

    #[test]
    fn desired_above_safe_max_is_replaced() {
        let r = calculate_leverage_metrics(&btc_long().with_desired_leverage(50.0));
        assert!(r.is_valid);
        assert_eq!(r.leverage_used, 40.0);
        assert_eq!(r.warning_messages(), vec!["Desired leverage 50x exceeds safe max 40x"]);
    }

    #[test]
    fn desired_below_safe_max_is_kept() {
        let r = calculate_leverage_metrics(&btc_long().with_desired_leverage(10.0));
        assert!(r.is_valid);
        assert_eq!(r.leverage_used, 10.0);
        assert_eq!(r.l_max, 40.0);
        // 1/10 -> 45,000; margin (49,000 - 45,000) / 50,000 = 8%
        assert!(approx(r.liquidation_price, 45_000.0));
        assert!(approx(r.margin_pct, 8.0));
        assert_eq!(r.risk_level, RiskLevel::Low);
    }

    #[test]
    fn nonsense_desired_leverage_ignored() {
        for d in [0.0, -5.0, f64::NAN] {
            let r = calculate_leverage_metrics(&btc_long().with_desired_leverage(d));
            assert_eq!(r.leverage_used, 40.0);
            assert!(r.warnings.is_empty());
        }
    }

    #[test]
    fn infinite_desired_leverage_is_replaced() {
        let r = calculate_leverage_metrics(&btc_long().with_desired_leverage(f64::INFINITY));
        assert!(r.is_valid);
        assert_eq!(r.leverage_used, 40.0);
        assert_eq!(
            r.warnings,
            vec![Warning::ExceedsSafeMax {
                desired: f64::INFINITY,
                safe_max: 40.0
            }]
        );
        assert_eq!(r.warning_messages(), vec!["Desired leverage infx exceeds safe max 40x"]);
    }

    #[test]
    fn wide_stop_pins_to_one() {
        // Short with the stop 150% above entry
        let r = calculate_leverage_metrics(&MetricsRequest::new(100.0, 250.0, Side::Short));
        assert_eq!(r.l_max, 1.0);
        assert!(approx(r.liquidation_price, 200.0));
        assert!(approx(r.margin_pct, -50.0));
        assert_eq!(
            r.warnings,
            vec![Warning::StopTooWide, Warning::CloseToLiquidation]
        );
        assert!(!r.is_valid);
    }

    #[test]
    fn zero_buffer_flags_close_to_liquidation() {
        let params = RiskParams {
            buffer_pct: 0.0,
            leverage_cap: 100.0,
        };
        // 1 / 0.04 = 25 exactly, stop sits on the liquidation price
        let req = MetricsRequest::new(100.0, 96.0, Side::Long).with_params(params);
        let r = calculate_leverage_metrics(&req);
        assert_eq!(r.l_max, 25.0);
        assert!(r.margin_pct < MIN_SAFE_MARGIN_PCT);
        assert_eq!(r.warnings, vec![Warning::CloseToLiquidation]);
        assert_eq!(r.risk_level, RiskLevel::High);
        assert!(!r.is_valid);
    }

    #[test]
    fn base_size_risk_value() {
        let r = calculate_leverage_metrics(&btc_long().with_size(0.25, SizeMode::Base));
        assert!(approx(r.risk_value.unwrap(), 250.0));
    }

    #[test]
    fn non_positive_size_has_no_risk_value() {
        let r = calculate_leverage_metrics(&btc_long().with_size(0.0, SizeMode::Quote));
        assert!(r.risk_value.is_none());
        let r = calculate_leverage_metrics(&btc_long().with_size(-10.0, SizeMode::Base));
        assert!(r.risk_value.is_none());
    }

    #[test]
    fn cap_limits_leverage() {
        let params = RiskParams {
            buffer_pct: 0.5,
            leverage_cap: 20.0,
        };
        let r = calculate_leverage_metrics(&btc_long().with_params(params));
        assert_eq!(r.l_max, 20.0);
        assert!(approx(r.l_star, 40.0));
        assert_eq!(r.risk_level, RiskLevel::Low);
    }

    #[test]
    fn table_rows() {
        let rows = leverage_table(50_000.0, Side::Long, RiskParams::default(), &[0.5, 2.0, 9.5]);
        let maxes: Vec<f64> = rows.iter().map(|(_, r)| r.l_max).collect();
        assert_eq!(maxes, vec![100.0, 40.0, 10.0]);
        assert!(rows.iter().all(|(_, r)| r.is_valid));
        assert!(approx(rows[1].1.stop_price, 49_000.0));
    }
}
