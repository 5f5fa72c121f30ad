//! Conversions between stop prices and percentage distances from entry.

use crate::Side;

/// Distance from `entry` to `stop` as a percentage of `entry`.
///
/// Direction-agnostic: only the magnitude matters. The caller guarantees
/// `entry != 0`.
#[inline]
pub fn stop_percent_from_prices(entry: f64, stop: f64) -> f64 {
    (entry - stop).abs() / entry * 100.0
}

/// Stop price `percent` away from `entry`, on the adverse side for `side`.
///
/// Below entry for longs, above entry for shorts. A percent of zero returns
/// `entry` for either side.
#[inline]
pub fn stop_price_from_percent(entry: f64, percent: f64, side: Side) -> f64 {
    entry * (1.0 + side.adverse_sign() * percent / 100.0)
}
