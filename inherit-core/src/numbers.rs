//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Truncate a f64 toward zero and clamp it to the i32 range, returning `None` for non-finite values.
#[must_use]
pub fn truncate_f64_to_i32(value: f64) -> Option<i32> {
    if !value.is_finite() {
        return None;
    }
    let min = cast::<i32, f64>(i32::MIN).unwrap_or(f64::MIN);
    let max = cast::<i32, f64>(i32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).trunc();
    cast::<f64, i32>(clamped)
}

/// Halve an integer, rounding an exact half up toward positive infinity.
#[must_use]
pub const fn halve_round_half_up(value: i32) -> i32 {
    value.div_euclid(2) + value.rem_euclid(2)
}

/// Clamp an i32 into the u16 range.
#[must_use]
pub fn clamp_i32_to_u16(value: i32) -> u16 {
    let clamped = value.clamp(0, i32::from(u16::MAX));
    cast::<i32, u16>(clamped).unwrap_or(0)
}
