use crate::geometry::surface::Plane;

use super::{Point3, Vector3, RAY_PLANE_EPSILON, TOLERANCE};

/// Relationship between two planes.
#[derive(Debug)]
pub enum PlanePairRelation {
    /// Planes intersect along a line.
    IntersectionLine {
        origin: Point3,
        direction: Vector3,
    },
    /// Planes are parallel but not coincident.
    Parallel { distance: f64 },
    /// Planes are the same (coincident).
    Coincident,
}

/// Signed distance from a point to a plane.
/// Positive = on the normal side, negative = opposite.
#[must_use]
pub fn signed_distance_to_plane(point: &Point3, plane: &Plane) -> f64 {
    let normal = plane.normal();
    normal.dot(&point.coords) - normal.dot(&plane.origin().coords)
}

/// Orthogonal projection of a point onto a plane.
#[must_use]
pub fn project_point_to_plane(point: &Point3, plane: &Plane) -> Point3 {
    point - plane.normal() * signed_distance_to_plane(point, plane)
}

/// Projects a point onto a plane by expressing it in the plane's local
/// frame and dropping the normal component.
///
/// Agrees with [`project_point_to_plane`]; useful when the caller also
/// wants the in-plane coordinates, see [`Plane::to_local`].
#[must_use]
pub fn plane_project_point(plane: &Plane, point: &Point3) -> Point3 {
    let (u, v, _) = plane.to_local(point);
    plane.point_at(u, v)
}

/// Intersects the ray `origin + t * direction` with a plane.
///
/// Returns `None` when the direction is parallel to the plane, judged by
/// the fixed [`RAY_PLANE_EPSILON`] on `|direction · normal|`.
#[must_use]
pub fn intersect_ray_with_plane(
    origin: &Point3,
    direction: &Vector3,
    plane: &Plane,
) -> Option<Point3> {
    let normal = plane.normal();
    let denom = normal.dot(direction);
    if denom.abs() <= RAY_PLANE_EPSILON {
        return None;
    }
    let t = normal.dot(&(plane.origin() - origin)) / denom;
    Some(origin + direction * t)
}

/// Computes the intersection of two planes.
///
/// Returns an [`IntersectionLine`](PlanePairRelation::IntersectionLine) with a
/// unit-length `direction` when the planes cross, [`Parallel`](PlanePairRelation::Parallel)
/// when they don't, or [`Coincident`](PlanePairRelation::Coincident) when they overlap.
#[must_use]
pub fn plane_plane_intersect(a: &Plane, b: &Plane, tolerance: f64) -> PlanePairRelation {
    let na = a.normal();
    let nb = b.normal();

    let dir = na.cross(nb);
    let dir_len = dir.norm();

    if dir_len < tolerance {
        let dist = signed_distance_to_plane(b.origin(), a).abs();
        if dist < tolerance {
            PlanePairRelation::Coincident
        } else {
            PlanePairRelation::Parallel { distance: dist }
        }
    } else {
        let dir = dir / dir_len;

        // p = oa + s * na + t * nb lies on both planes when
        //   s + t * (na.nb) = 0  and  s * (na.nb) + t = nb.(ob - oa)
        let d2 = nb.dot(&(b.origin() - a.origin()));
        let dot_nn = na.dot(nb);
        let denom = 1.0 - dot_nn * dot_nn;

        let origin = if denom.abs() < TOLERANCE {
            *a.origin()
        } else {
            let s = -dot_nn * d2 / denom;
            let t = d2 / denom;
            a.origin() + na * s + nb * t
        };

        PlanePairRelation::IntersectionLine { origin, direction: dir }
    }
}
