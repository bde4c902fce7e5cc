use crate::geometry::curve::{AnyCurve, SetComparison};
use crate::math::Point3;

/// Points where `curve` crosses `target`.
///
/// Only a proper [`Overlap`](SetComparison::Overlap) yields points; equal,
/// nested or disjoint curves give an empty list.
#[must_use]
pub fn cross_points(curve: &AnyCurve, target: &AnyCurve) -> Vec<Point3> {
    let hit = curve.intersect_with(target);
    match hit.relation {
        SetComparison::Overlap => hit.points,
        _ => Vec::new(),
    }
}

/// Every crossing point between pairs of `curves`.
///
/// Pairs are visited from the last curve backwards, each against the
/// curves before it. Points shared by several pairs are reported once per
/// pair.
#[must_use]
pub fn intersect_points(curves: &[AnyCurve]) -> Vec<Point3> {
    let mut points = Vec::new();
    for i in (1..curves.len()).rev() {
        for j in (0..i).rev() {
            points.extend(cross_points(&curves[i], &curves[j]));
        }
    }
    points
}
