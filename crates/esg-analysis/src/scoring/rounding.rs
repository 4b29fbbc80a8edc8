//! Decimal rounding of binary floats.

/// Round `value` to `decimals` places.
///
/// Goes through the correctly rounded decimal expansion of the exact binary
/// value, so `2.675` (stored just below 2.675) rounds to `2.67`, matching
/// what decimal-aware rounding in other tools reports. Scaling by a power of
/// ten first would round the scaled product instead.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let rounded = format!("{value:.decimals$}")
        .parse::<f64>()
        .unwrap_or(value);
    // Avoid emitting "-0" for tiny negatives.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
