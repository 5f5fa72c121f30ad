//! Safe leverage derivation and approximate liquidation prices.
//!
//! The approximation assumes liquidation after an adverse move of `1 / L`
//! of entry, less a buffer. It ignores funding, margin mode and
//! maintenance-margin tiers.

use crate::Side;
use crate::tiers::{LEVERAGE_STEPS, round_down_to_step};

/// Unrounded maximum leverage `L* = 1 / (δ/100 + B/100)`.
///
/// `delta_pct` is the stop distance and `buffer_pct` the liquidation buffer,
/// both in percent of entry. Zero for both yields infinity.
#[inline]
pub fn theoretical_max_leverage(delta_pct: f64, buffer_pct: f64) -> f64 {
    1.0 / (delta_pct / 100.0 + buffer_pct / 100.0)
}

/// Maximum leverage tier that keeps a `delta_pct` stop clear of liquidation
/// with `buffer_pct` of headroom.
///
/// The result is a member of [`LEVERAGE_STEPS`], at most `cap` and at least 1.
/// A `cap` that is not itself a tier floors to the tier below it. The lower
/// bound wins when `cap < 1`.
pub fn max_leverage_from_stop_percent(delta_pct: f64, buffer_pct: f64, cap: f64) -> f64 {
    let l_star = theoretical_max_leverage(delta_pct, buffer_pct);
    // Not `f64::min`: a NaN `l_star` must fall to the bottom tier, not to `cap`.
    let bounded = if l_star > cap { cap } else { l_star };
    round_down_to_step(bounded, &LEVERAGE_STEPS).max(1.0)
}

/// Fraction of entry between entry and liquidation: `max(1/L - B/100, 0)`.
///
/// Never negative. At low leverage with a large buffer it is zero.
#[inline]
pub fn liquidation_distance(leverage: f64, buffer_pct: f64) -> f64 {
    (1.0 / leverage - buffer_pct / 100.0).max(0.0)
}

/// Approximate liquidation price for a position opened at `entry`.
///
/// Below entry for longs, above for shorts. When [`liquidation_distance`]
/// clamps to zero this returns `entry` itself.
pub fn liquidation_price_approx(entry: f64, leverage: f64, buffer_pct: f64, side: Side) -> f64 {
    let d_liq = liquidation_distance(leverage, buffer_pct);
    entry * (1.0 + side.adverse_sign() * d_liq)
}
