use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::tessellation::TessellationParams;

use super::{Curve, CurveDomain};

/// A circular arc in 3D space.
///
/// Defined by a center, radius, normal axis, and a reference direction
/// for the zero-angle. The parametric form sweeps counter-clockwise about
/// the normal from `start_angle` to `end_angle` (in radians). A sweep of
/// a full turn is a closed circle. Circles are bound like any other arc,
/// except the extension produced by [`make_unbound`](Arc::make_unbound).
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
    start_angle: f64,
    end_angle: f64,
    unbound: bool,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `normal` - Normal vector defining the arc plane
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to normal)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians, greater than `start_angle` by at most a full turn
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, a direction is zero-length,
    /// the reference direction is not perpendicular to the normal, or the sweep
    /// is not in `(0, 2π]`.
    pub fn new(
        center: Point3,
        radius: f64,
        normal: Vector3,
        ref_dir: Vector3,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if normal.dot(&ref_dir).abs() > 1e-9 {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        let sweep = end_angle - start_angle;
        if sweep < TOLERANCE || sweep > TAU + TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "arc sweep {sweep} must lie in (0, 2π]"
            ))
            .into());
        }

        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
            start_angle,
            end_angle,
            unbound: false,
        })
    }

    /// Creates the arc that starts at `start`, passes through `through`
    /// and ends at `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the three points are collinear or coincident.
    pub fn from_three_points(start: Point3, end: Point3, through: Point3) -> Result<Self> {
        let ab = through - start;
        let ac = end - start;
        let n = ab.cross(&ac);
        let n_sq = n.norm_squared();
        if n_sq < TOLERANCE * TOLERANCE {
            return Err(
                GeometryError::Degenerate("arc points are collinear".into()).into(),
            );
        }

        // Circumcenter of the triangle (start, through, end).
        let center =
            start + (n.cross(&ab) * ac.norm_squared() + ac.cross(&n) * ab.norm_squared()) / (2.0 * n_sq);
        let radius = (start - center).norm();
        let normal = n / n_sq.sqrt();
        let ref_dir = (start - center) / radius;

        // `n` orients start → through → end counter-clockwise.
        let binormal = normal.cross(&ref_dir);
        let to_end = end - center;
        let mut end_angle = to_end.dot(&binormal).atan2(to_end.dot(&ref_dir));
        if end_angle <= 0.0 {
            end_angle += TAU;
        }

        Self::new(center, radius, normal, ref_dir, 0.0, end_angle)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normal vector of the arc plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the zero-angle reference direction.
    #[must_use]
    pub fn ref_dir(&self) -> &Vector3 {
        &self.ref_dir
    }

    /// Angle swept by the arc, in `(0, 2π]`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns whether the arc is a full circle.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        (self.sweep() - TAU).abs() < TOLERANCE
    }

    /// Returns the full circle this arc lies on.
    #[must_use]
    pub fn full_circle(&self) -> Self {
        Self {
            end_angle: self.start_angle + TAU,
            ..self.clone()
        }
    }

    /// Returns the unbounded circle this arc lies on.
    #[must_use]
    pub fn make_unbound(&self) -> Self {
        Self {
            unbound: true,
            ..self.full_circle()
        }
    }

    /// Returns the same arc traversed from end to start.
    ///
    /// Flipping the normal mirrors the angular frame, so the angles map
    /// to their negatives.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            normal: -self.normal,
            start_angle: -self.end_angle,
            end_angle: -self.start_angle,
            ..self.clone()
        }
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            center: self.center + offset,
            ..self.clone()
        }
    }

    /// Polar angle of `point` projected into the arc plane, in `(-π, π]`,
    /// or `None` when the point lies on the axis.
    #[must_use]
    pub fn angle_of(&self, point: &Point3) -> Option<f64> {
        let d = point - self.center;
        let x = d.dot(&self.ref_dir);
        let y = d.dot(&self.binormal());
        if x.hypot(y) < TOLERANCE {
            return None;
        }
        Some(y.atan2(x))
    }

    /// Moves `angle` by whole turns into `[start_angle, start_angle + 2π)`.
    #[must_use]
    pub fn normalize_angle(&self, angle: f64) -> f64 {
        self.start_angle + (angle - self.start_angle).rem_euclid(TAU)
    }

    /// Returns whether `angle` falls within the swept range, with
    /// `angular_tolerance` slack at both ends.
    #[must_use]
    pub fn contains_angle(&self, angle: f64, angular_tolerance: f64) -> bool {
        if self.is_closed() {
            return true;
        }
        let a = self.start_angle + (angle - self.start_angle + angular_tolerance).rem_euclid(TAU)
            - angular_tolerance;
        a <= self.end_angle + angular_tolerance
    }

    /// Computes the second axis direction (perpendicular to both normal and `ref_dir`).
    fn binormal(&self) -> Vector3 {
        self.normal.cross(&self.ref_dir)
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point3 {
        let binormal = self.binormal();
        let x = self.radius * t.cos();
        let y = self.radius * t.sin();
        self.center + self.ref_dir * x + binormal * y
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.end_angle)
    }

    fn is_bound(&self) -> bool {
        !self.unbound
    }

    fn length(&self) -> f64 {
        self.radius * self.sweep()
    }

    fn tessellate_with(&self, params: &TessellationParams) -> Vec<Point3> {
        let n = params.arc_segment_count(self.radius, self.sweep());
        let domain = self.domain();
        let mut points = Vec::with_capacity(n + 1);
        for i in 0..n {
            #[allow(clippy::cast_precision_loss)]
            let u = i as f64 / n as f64;
            points.push(self.evaluate(domain.denormalize(u)));
        }
        points.push(self.end_point());
        points
    }

    fn project(&self, point: &Point3) -> f64 {
        let Some(angle) = self.angle_of(point) else {
            // Every point of the arc is equidistant from its axis.
            return self.start_angle;
        };
        let angle = self.normalize_angle(angle);
        if angle <= self.end_angle {
            return angle;
        }
        // Outside the sweep: the nearer end point wins.
        let to_start = (point - self.start_point()).norm();
        let to_end = (point - self.end_point()).norm();
        if to_start <= to_end {
            self.start_angle
        } else {
            self.end_angle
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn quarter() -> Arc {
        Arc::new(p(0.0, 0.0, 0.0), 2.0, Vector3::z(), Vector3::x(), 0.0, FRAC_PI_2).unwrap()
    }

    #[test]
    fn rejects_bad_radius_and_sweep() {
        assert!(Arc::new(p(0.0, 0.0, 0.0), 0.0, Vector3::z(), Vector3::x(), 0.0, 1.0).is_err());
        assert!(Arc::new(p(0.0, 0.0, 0.0), 1.0, Vector3::z(), Vector3::x(), 1.0, 1.0).is_err());
        assert!(Arc::new(p(0.0, 0.0, 0.0), 1.0, Vector3::z(), Vector3::x(), 0.0, 7.0).is_err());
        assert!(Arc::new(p(0.0, 0.0, 0.0), 1.0, Vector3::z(), Vector3::z(), 0.0, 1.0).is_err());
    }

    #[test]
    fn end_points_and_length() {
        let arc = quarter();
        assert_abs_diff_eq!(arc.start_point(), p(2.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(arc.end_point(), p(0.0, 2.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(arc.length(), PI, epsilon = 1e-12);
        assert!(arc.is_bound());
        assert!(arc.full_circle().is_bound());
        assert!(!arc.make_unbound().is_bound());
    }

    #[test]
    fn distance_inside_and_outside_sweep() {
        let arc = quarter();
        // Radially outside the middle of the sweep.
        let d = arc.distance_to(&p(3.0_f64.sqrt() * 2.0, 3.0_f64.sqrt() * 2.0, 0.0));
        assert_abs_diff_eq!(d, 2.0 * 6.0_f64.sqrt() - 2.0, epsilon = 1e-9);
        // Behind the start: nearest is the start point.
        assert_abs_diff_eq!(arc.distance_to(&p(2.0, -3.0, 0.0)), 3.0, epsilon = 1e-12);
        // On the axis, above the center.
        assert_abs_diff_eq!(arc.distance_to(&p(0.0, 0.0, 1.5)), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn reversed_arc_traces_same_points_backwards() {
        let arc = Arc::new(p(1.0, 1.0, 0.0), 1.0, Vector3::z(), Vector3::x(), 0.3, 2.0).unwrap();
        let rev = arc.reversed();
        assert_abs_diff_eq!(rev.start_point(), arc.end_point(), epsilon = 1e-12);
        assert_abs_diff_eq!(rev.end_point(), arc.start_point(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            rev.evaluate_normalized(0.25),
            arc.evaluate_normalized(0.75),
            epsilon = 1e-12
        );
    }

    #[test]
    fn three_point_arc_passes_through_all_points() {
        let start = p(1.0, 0.0, 0.0);
        let through = p(0.0, 1.0, 0.0);
        let end = p(-1.0, 0.0, 0.0);
        let arc = Arc::from_three_points(start, end, through).unwrap();
        assert_abs_diff_eq!(*arc.center(), p(0.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(arc.radius(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.start_point(), start, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.end_point(), end, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.evaluate_normalized(0.5), through, epsilon = 1e-12);
    }

    #[test]
    fn three_point_arc_clockwise_flips_normal() {
        let arc = Arc::from_three_points(p(1.0, 0.0, 0.0), p(-1.0, 0.0, 0.0), p(0.0, -1.0, 0.0))
            .unwrap();
        assert_abs_diff_eq!(*arc.normal(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(arc.evaluate_normalized(0.5), p(0.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_do_not_make_an_arc() {
        assert!(
            Arc::from_three_points(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(1.0, 0.0, 0.0)).is_err()
        );
    }

    #[test]
    fn tessellation_starts_and_ends_on_arc() {
        let arc = quarter();
        let pts = arc.tessellate();
        assert!(pts.len() >= 5);
        assert_abs_diff_eq!(pts[0], arc.start_point(), epsilon = 1e-12);
        assert_abs_diff_eq!(*pts.last().unwrap(), arc.end_point(), epsilon = 1e-12);
        for pt in &pts {
            assert_abs_diff_eq!((pt - arc.center()).norm(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn angle_containment_wraps() {
        let arc = Arc::new(p(0.0, 0.0, 0.0), 1.0, Vector3::z(), Vector3::x(), -0.5, 0.5).unwrap();
        assert!(arc.contains_angle(0.0, 1e-9));
        assert!(arc.contains_angle(TAU - 0.2, 1e-9));
        assert!(!arc.contains_angle(PI, 1e-9));
        assert!(arc.contains_angle(0.5 + 1e-12, 1e-9));
    }
}
