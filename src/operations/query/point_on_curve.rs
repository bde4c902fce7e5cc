use crate::geometry::curve::{AnyCurve, Curve};
use crate::math::scalar::{is_almost_equal, is_almost_zero};
use crate::math::vector::is_almost_equal_point;
use crate::math::{Point3, POINT_TOLERANCE};

/// Point at the middle of the curve's domain.
#[must_use]
pub fn middle_point(curve: &AnyCurve) -> Point3 {
    curve.evaluate_normalized(0.5)
}

/// Returns whether `point` lies within `tolerance` of the curve.
///
/// Works for bound and unbound curves alike.
#[must_use]
pub fn is_point_on_curve(curve: &AnyCurve, point: &Point3, tolerance: f64) -> bool {
    curve.distance_to(point) <= tolerance
}

/// Returns whether `point` projects onto the interior of the curve, i.e.
/// its nearest curve point is not (within `tolerance`) one of the ends.
#[must_use]
pub fn is_point_projected_on_curve(curve: &AnyCurve, point: &Point3, tolerance: f64) -> bool {
    let projected = curve.evaluate(curve.project(point));
    !(is_almost_equal_point(&projected, &curve.start_point(), tolerance, false)
        || is_almost_equal_point(&projected, &curve.end_point(), tolerance, false))
}

/// Returns whether the curve contains `point`.
///
/// A bound line only contains points of its segment: the distances to
/// both ends must add up to the length, and the point must sit on the
/// infinite line. Unbound lines and other curves need only be close.
#[must_use]
pub fn contains_point(curve: &AnyCurve, point: &Point3, tolerance: f64) -> bool {
    let AnyCurve::Line(line) = curve else {
        return is_almost_zero(curve.distance_to(point), tolerance);
    };
    let on_infinite_line = is_almost_zero(line.perpendicular_distance(point), tolerance);
    if !line.is_bound() {
        return on_infinite_line;
    }
    let span = (point - line.start_point()).norm() + (point - line.end_point()).norm();
    is_almost_equal(span, line.length(), tolerance) && on_infinite_line
}

/// Distance from `point` to the curve; a point at an arc's center is one
/// radius away.
#[must_use]
pub fn distance_from_curve(point: &Point3, curve: &AnyCurve) -> f64 {
    match curve {
        AnyCurve::Arc(arc) if is_almost_zero((point - arc.center()).norm(), POINT_TOLERANCE) => {
            arc.radius()
        }
        _ => curve.distance_to(point),
    }
}
