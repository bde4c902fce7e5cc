//! Point and vector relations: direction tests, angles, rotation.
//!
//! Direction tests compare angles, so their tolerances are in radians
//! ([`ANGULAR_TOLERANCE`](super::ANGULAR_TOLERANCE) by default). Point
//! coincidence compares coordinates in length units.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{GeometryError, OperationError, Result};

use super::scalar::is_almost_equal;
use super::{Matrix4, Point3, Vector3, TOLERANCE};

/// Returns whether `u` and `v` are perpendicular: `|u · v| <= |tolerance|`.
#[must_use]
pub fn is_perpendicular(u: &Vector3, v: &Vector3, tolerance: f64) -> bool {
    u.dot(v).abs() <= tolerance.abs()
}

/// Unsigned angle between two vectors, in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so nearly parallel
/// vectors never yield `NaN` through round-off.
#[must_use]
pub fn angle_between(u: &Vector3, v: &Vector3) -> f64 {
    let cos = u.normalize().dot(&v.normalize()).clamp(-1.0, 1.0);
    cos.acos()
}

/// Returns whether `u` and `v` point the same way within `tolerance` radians.
#[must_use]
pub fn is_same_direction(u: &Vector3, v: &Vector3, tolerance: f64) -> bool {
    angle_between(u, v) <= tolerance.abs()
}

/// Returns whether `u` and `v` point in opposite ways within `tolerance` radians.
#[must_use]
pub fn is_opposite_direction(u: &Vector3, v: &Vector3, tolerance: f64) -> bool {
    angle_between(u, &-v) <= tolerance.abs()
}

/// Returns whether `u` and `v` are parallel (same or opposite direction).
///
/// With `consider_zero_vector`, a zero-length operand counts as parallel
/// to anything.
#[must_use]
pub fn is_parallel(u: &Vector3, v: &Vector3, tolerance: f64, consider_zero_vector: bool) -> bool {
    (consider_zero_vector && (is_zero_length(u) || is_zero_length(v)))
        || is_same_direction(u, v, tolerance)
        || is_opposite_direction(u, v, tolerance)
}

/// Returns whether two points coincide coordinate-wise within `tolerance`.
///
/// With `ignore_z`, only x and y are compared.
#[must_use]
pub fn is_almost_equal_point(p: &Point3, q: &Point3, tolerance: f64, ignore_z: bool) -> bool {
    let planar = is_almost_equal(p.x, q.x, tolerance) && is_almost_equal(p.y, q.y, tolerance);
    if ignore_z {
        return planar;
    }
    planar && is_almost_equal(p.z, q.z, tolerance)
}

/// Returns whether three points are collinear in plan (XY) view.
#[must_use]
pub fn are_three_points_collinear(p1: &Point3, p2: &Point3, p3: &Point3, tolerance: f64) -> bool {
    ((p2.y - p1.y) * (p3.x - p1.x) - (p3.y - p1.y) * (p2.x - p1.x)).abs() <= tolerance
}

/// Unit vector pointing from `from` towards `to`.
///
/// # Errors
///
/// Returns an error if the points coincide.
pub fn direction_to(from: &Point3, to: &Point3) -> Result<Vector3> {
    let diff = to - from;
    let len = diff.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(diff / len)
}

/// Returns `point` with its z coordinate replaced by `z`.
#[must_use]
pub fn flat(point: &Point3, z: f64) -> Point3 {
    Point3::new(point.x, point.y, z)
}

/// Moves `point` by `distance` along `direction`.
#[must_use]
pub fn offset_point(point: &Point3, direction: &Vector3, distance: f64) -> Point3 {
    point + direction * distance
}

/// Rotates `vector` about `axis` by `angle` radians (right-hand rule).
///
/// # Errors
///
/// Returns an error if the axis is zero-length.
pub fn rotate_vector(vector: &Vector3, axis: &Vector3, angle: f64) -> Result<Vector3> {
    let len = axis.norm();
    if len < TOLERANCE {
        return Err(OperationError::InvalidInput("rotation axis must be non-zero".into()).into());
    }
    Ok(rotation_matrix(&(axis / len), angle).transform_vector(vector))
}

/// Folds the angle between `u` and `v` into the first quadrant, so that
/// parallel and anti-parallel vectors both give zero.
#[must_use]
pub fn min_angle_to_vector(u: &Vector3, v: &Vector3) -> f64 {
    let angle = angle_between(u, v);
    if angle <= FRAC_PI_2 {
        angle
    } else if angle <= PI {
        (PI - angle).abs()
    } else if angle <= PI + FRAC_PI_2 {
        angle - PI
    } else {
        (TAU - angle).abs()
    }
}

fn is_zero_length(v: &Vector3) -> bool {
    v.norm() < TOLERANCE
}

/// Builds a 4x4 rotation matrix around a unit axis by an angle (Rodrigues).
#[allow(clippy::many_single_char_names, clippy::suspicious_operation_groupings)]
#[rustfmt::skip]
fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix4 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}
