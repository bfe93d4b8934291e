//! Provides misc utilities.

/// The number of digits after the decimal point on text output.
pub const PRECISION: usize = 6;

/// Returns a text of `t` with exactly [`PRECISION`] digits after the decimal point.
///
/// Rounding follows [`std::fmt`], the sign of a negative value is kept
/// even if it rounds to zero.
///
/// # Example
///
/// ```
/// # use gcjtrans::utils::to_fixed;
/// assert_eq!(to_fixed(116.39752531), "116.397525");
/// assert_eq!(to_fixed(39.9), "39.900000");
/// assert_eq!(to_fixed(-0.0000001), "-0.000000");
/// ```
#[inline]
pub fn to_fixed(t: f64) -> String {
    format!("{t:.PRECISION$}")
}
