use crate::geometry::curve::{AnyCurve, Arc, Curve, Line, SetComparison};
use crate::math::scalar::is_almost_zero;
use crate::math::vector::{is_opposite_direction, is_parallel, is_same_direction};
use crate::math::{Point3, Vector3, ANGULAR_TOLERANCE};

/// Returns whether `target` lies on the unbounded extension of `source`:
/// both of its end points within `tolerance` of it.
///
/// For an arc source the extension is its full circle.
#[must_use]
pub fn is_collinear_with(source: &AnyCurve, target: &AnyCurve, tolerance: f64) -> bool {
    let unbound = source.make_unbound();
    unbound.distance_to(&target.start_point()) <= tolerance
        && unbound.distance_to(&target.end_point()) <= tolerance
}

/// Returns whether two arcs share a center (within `tolerance`) and lie in
/// the same or in opposite planes.
#[must_use]
pub fn is_parallel_arcs(a: &Arc, b: &Arc, tolerance: f64) -> bool {
    is_almost_zero((a.center() - b.center()).norm(), tolerance)
        && (is_same_direction(a.normal(), b.normal(), ANGULAR_TOLERANCE)
            || is_opposite_direction(a.normal(), b.normal(), ANGULAR_TOLERANCE))
}

/// Returns whether two lines have parallel directions.
#[must_use]
pub fn is_parallel_lines(a: &Line, b: &Line) -> bool {
    is_parallel(a.direction(), b.direction(), ANGULAR_TOLERANCE, false)
}

/// Parallelism across curve kinds. Mixed or generic pairs are never
/// parallel.
#[must_use]
pub fn is_parallel_curves(a: &AnyCurve, b: &AnyCurve, tolerance: f64) -> bool {
    match (a, b) {
        (AnyCurve::Line(a), AnyCurve::Line(b)) => is_parallel_lines(a, b),
        (AnyCurve::Arc(a), AnyCurve::Arc(b)) => is_parallel_arcs(a, b, tolerance),
        _ => false,
    }
}

/// Foot of the horizontal perpendicular dropped from `point` onto `line`.
///
/// The perpendicular runs through `point` along `line.direction × Z`.
/// Returns `None` for vertical lines or when the perpendicular does not
/// cross the line in exactly one point.
#[must_use]
pub fn perpendicular_foot_on_line(point: &Point3, line: &Line) -> Option<Point3> {
    let across = Line::unbound(*point, line.direction().cross(&Vector3::z())).ok()?;
    let hit = AnyCurve::Line(line.clone()).intersect_with(&AnyCurve::Line(across));
    match (hit.relation, hit.points.as_slice()) {
        (SetComparison::Overlap, [foot]) => Some(*foot),
        _ => None,
    }
}
