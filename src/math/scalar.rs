//! Tolerance-aware comparisons of real numbers and unit conversions.
//!
//! Every comparison takes an explicit tolerance; callers without a
//! specific requirement pass [`LINEAR_TOLERANCE`](super::LINEAR_TOLERANCE).

/// Millimetres per foot, the host's internal length unit.
const MM_PER_FOOT: f64 = 304.8;

/// Returns whether `x` lies within `tolerance` of zero.
#[must_use]
pub fn is_almost_zero(x: f64, tolerance: f64) -> bool {
    x.abs() <= tolerance
}

/// Returns whether `a` and `b` differ by at most `tolerance`.
#[must_use]
pub fn is_almost_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Returns whether `a` exceeds `b` by more than `tolerance`.
#[must_use]
pub fn is_greater_than(a: f64, b: f64, tolerance: f64) -> bool {
    a - b > tolerance
}

/// Returns whether `a` is greater than `b`, or equal to it within `tolerance`.
#[must_use]
pub fn is_greater_or_equal(a: f64, b: f64, tolerance: f64) -> bool {
    a - b >= -tolerance
}

/// Returns whether `a` is below `b` by more than `tolerance`.
#[must_use]
pub fn is_less_than(a: f64, b: f64, tolerance: f64) -> bool {
    !is_greater_or_equal(a, b, tolerance)
}

/// Returns whether `a` is less than `b`, or equal to it within `tolerance`.
#[must_use]
pub fn is_less_or_equal(a: f64, b: f64, tolerance: f64) -> bool {
    !is_greater_than(a, b, tolerance)
}

/// Converts an angle in radians to degrees.
#[must_use]
pub fn radian_to_degree(radian: f64) -> f64 {
    radian.to_degrees()
}

/// Converts an angle in degrees to radians.
#[must_use]
pub fn degree_to_radian(degree: f64) -> f64 {
    degree.to_radians()
}

/// Converts a length in feet to millimetres.
#[must_use]
pub fn feet_to_mm(feet: f64) -> f64 {
    feet * MM_PER_FOOT
}

/// Converts a length in millimetres to feet.
#[must_use]
pub fn mm_to_feet(mm: f64) -> f64 {
    mm / MM_PER_FOOT
}
