use crate::engine::core::OperandStyle;

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// ## Returns
/// - `Some(i64)`: The truncated value if `value` is finite and within the
///   range of `i64`.
/// - `None`: For infinities, `NaN`, and values outside the `i64` range.
///
/// ## Example
/// ```
/// use rpnote::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(2.9), Some(2));
/// assert_eq!(f64_to_i64_truncated(-2.9), Some(-2));
/// assert_eq!(f64_to_i64_truncated(f64::NAN), None);
/// assert_eq!(f64_to_i64_truncated(1e20), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_truncated(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    // i64::MAX is not representable, the nearest f64 is 2^63.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Writes an operand the way it appears in an infix description.
///
/// With [`OperandStyle::Truncated`] the fractional part is dropped. Values
/// that have no integer form (infinities, `NaN`, huge magnitudes) are written
/// in full in either style.
///
/// ## Example
/// ```
/// use rpnote::{engine::core::OperandStyle, util::num::format_operand};
///
/// assert_eq!(format_operand(2.5, OperandStyle::Truncated), "2");
/// assert_eq!(format_operand(2.5, OperandStyle::Exact), "2.5");
/// assert_eq!(format_operand(4.0, OperandStyle::Exact), "4");
/// assert_eq!(format_operand(f64::INFINITY, OperandStyle::Truncated), "inf");
/// ```
#[must_use]
pub fn format_operand(value: f64, style: OperandStyle) -> String {
    match style {
        OperandStyle::Truncated => {
            f64_to_i64_truncated(value).map_or_else(|| value.to_string(), |n| n.to_string())
        },
        OperandStyle::Exact => value.to_string(),
    }
}

/// Returns `true` if `text` reads as a plain, finite number.
///
/// Spellings of non-finite values such as `inf` or `NaN` are treated as names.
///
/// ## Example
/// ```
/// use rpnote::util::num::is_numeric;
///
/// assert!(is_numeric("-12"));
/// assert!(is_numeric("0.5"));
/// assert!(!is_numeric("π"));
/// assert!(!is_numeric("inf"));
/// assert!(!is_numeric("NaN"));
/// assert!(!is_numeric(""));
/// ```
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Parses a keyed-in entry such as `"12.5"`.
///
/// Malformed entries (for example `"1.2.3"` or an empty string) yield `None`
/// instead of an error, since a bad entry simply means no operand is
/// available.
///
/// ## Example
/// ```
/// use rpnote::util::num::parse_entry;
///
/// assert_eq!(parse_entry("12.5"), Some(12.5));
/// assert_eq!(parse_entry(".5"), Some(0.5));
/// assert_eq!(parse_entry("1.2.3"), None);
/// ```
#[must_use]
pub fn parse_entry(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
