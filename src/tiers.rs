//! Discrete leverage tiers and the step quantizer.

/// Leverage multiples an exchange accepts, ascending.
///
/// Every quantized leverage the calculator returns is a member of this list.
/// Changing it changes every quantized output.
pub const LEVERAGE_STEPS: [f64; 20] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 75.0,
    80.0, 90.0, 100.0,
];

/// Largest step `<= value`, or the smallest step when `value` is below all of them.
///
/// A floor over the discrete set: never interpolates, never rounds up past
/// `value` except at the bottom tier. Unsorted `steps` are sorted first.
/// An empty `steps` slice returns `value` unchanged.
pub fn round_down_to_step(value: f64, steps: &[f64]) -> f64 {
    if steps.is_sorted_by(|a, b| a <= b) {
        floor_sorted(value, steps)
    } else {
        let mut sorted = steps.to_vec();
        sorted.sort_by(f64::total_cmp);
        floor_sorted(value, &sorted)
    }
}

fn floor_sorted(value: f64, steps: &[f64]) -> f64 {
    let Some(&lowest) = steps.first() else {
        return value;
    };
    steps
        .iter()
        .rev()
        .copied()
        .find(|&step| step <= value)
        .unwrap_or(lowest)
}
