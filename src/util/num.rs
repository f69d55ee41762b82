/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Values at or above this magnitude are printed through the float path.
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Maximum number of fractional digits printed.
const DECIMAL_PLACES: usize = 10;

/// Converts an `f64` to `i64` if the value is finite, integral and exactly
/// representable.
///
/// ## Returns
/// - `Some(i64)`: The converted value if the conversion is lossless.
/// - `None`: For non-finite, fractional or out-of-range values.
///
/// ## Example
/// ```
/// use stackcalc::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(42.0), Some(42));
/// assert_eq!(f64_to_i64_checked(0.5), None);
/// assert_eq!(f64_to_i64_checked(f64::INFINITY), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Formats an evaluation result for display.
///
/// Integral values below `1e15` are printed without a fractional part. Other
/// finite values are rounded to ten decimal places with trailing zeros
/// removed. Infinities print as `inf` / `-inf`.
///
/// # Example
/// ```
/// use stackcalc::util::num::format_result;
///
/// assert_eq!(format_result(14.0), "14");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(-2.5), "-2.5");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.abs() < INTEGER_DISPLAY_LIMIT
       && let Some(integer) = f64_to_i64_checked(value)
    {
        return integer.to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{value:.DECIMAL_PLACES$}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0".to_string() } else { trimmed.to_string() }
}
