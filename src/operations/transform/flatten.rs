use crate::error::Result;
use crate::geometry::curve::{AnyCurve, Curve, Line};
use crate::math::vector::flat;
use crate::math::Vector3;
use crate::operations::query::middle_point;

/// Rebuilds `line` with both end points at height `elevation`.
///
/// Flattening an already flat line at the same elevation is a no-op.
///
/// # Errors
///
/// Returns an error if the line is vertical, so that flattening collapses
/// it to a point.
pub fn flatten(line: &Line, elevation: f64) -> Result<Line> {
    let start = flat(&line.start_point(), elevation);
    let end = flat(&line.end_point(), elevation);
    if line.is_bound() {
        Line::bound(start, end)
    } else {
        Line::unbound(start, end - start)
    }
}

/// Moves `curve` vertically so that its midpoint sits at `elevation`.
#[must_use]
pub fn offset_vertical(curve: &AnyCurve, elevation: f64) -> AnyCurve {
    let mid = middle_point(curve);
    curve.translated(&Vector3::new(0.0, 0.0, elevation - mid.z))
}
