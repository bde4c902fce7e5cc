use crate::geometry::bounding_box::Outline;
use crate::geometry::curve::{AnyCurve, Curve};

/// Axis-aligned extent of a curve.
///
/// Bound curves are sampled through their tessellation; unbound curves
/// contribute only their two end points. With `extend_z_vertical` the
/// vertical range is opened to `(-∞, +∞)`, giving a plan-view footprint.
#[must_use]
pub fn outline(curve: &AnyCurve, extend_z_vertical: bool) -> Outline {
    let points = if curve.is_bound() {
        curve.tessellate()
    } else {
        vec![curve.start_point(), curve.end_point()]
    };
    // Curves always yield at least two samples.
    let outline = Outline::from_points(&points).unwrap_or_default();
    if extend_z_vertical {
        outline.flattened_z(f64::NEG_INFINITY, f64::INFINITY)
    } else {
        outline
    }
}
