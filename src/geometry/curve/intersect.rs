//! Curve/curve intersection with set-style classification.
//!
//! Lines and arcs are intersected analytically. Any pair involving a
//! [`GenericCurve`](super::GenericCurve) falls back to intersecting the
//! chords of both tessellations.

use std::f64::consts::TAU;

use tracing::debug;

use crate::geometry::surface::Plane;
use crate::math::plane_3d::{plane_plane_intersect, PlanePairRelation};
use crate::math::{Point3, Vector3, INTERSECTION_TOLERANCE, TOLERANCE};

use super::{AnyCurve, Arc, Curve, CurveDomain, Line};

/// How two curves relate as point sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetComparison {
    /// The curves share no point.
    Disjoint,
    /// The curves share isolated points or a partial run.
    Overlap,
    /// The curves are the same point set.
    Equal,
    /// The first curve lies entirely within the second.
    Subset,
    /// The second curve lies entirely within the first.
    Superset,
}

/// Result of intersecting two curves.
///
/// `points` holds the shared points for [`SetComparison::Overlap`]: the
/// crossing points, or the ends of a shared run. It is empty for the
/// other classifications.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveIntersection {
    pub relation: SetComparison,
    pub points: Vec<Point3>,
}

impl CurveIntersection {
    fn disjoint() -> Self {
        Self::of(SetComparison::Disjoint)
    }

    fn of(relation: SetComparison) -> Self {
        Self {
            relation,
            points: Vec::new(),
        }
    }

    fn overlap(points: Vec<Point3>) -> Self {
        if points.is_empty() {
            return Self::disjoint();
        }
        Self {
            relation: SetComparison::Overlap,
            points,
        }
    }

    /// Swaps the roles of the two curves.
    fn flipped(mut self) -> Self {
        self.relation = match self.relation {
            SetComparison::Subset => SetComparison::Superset,
            SetComparison::Superset => SetComparison::Subset,
            other => other,
        };
        self
    }
}

impl AnyCurve {
    /// Intersects this curve with `other`.
    #[must_use]
    pub fn intersect_with(&self, other: &AnyCurve) -> CurveIntersection {
        match (self, other) {
            (Self::Line(a), Self::Line(b)) => line_line(a, b),
            (Self::Line(line), Self::Arc(arc)) => line_arc(line, arc),
            (Self::Arc(arc), Self::Line(line)) => line_arc(line, arc).flipped(),
            (Self::Arc(a), Self::Arc(b)) => arc_arc(a, b),
            _ => {
                debug!(
                    first = self.kind_name(),
                    second = other.kind_name(),
                    "intersecting through tessellation"
                );
                chords_chords(self, other)
            }
        }
    }
}

fn in_domain(t: f64, domain: &CurveDomain, tolerance: f64) -> bool {
    t >= domain.t_min - tolerance && t <= domain.t_max + tolerance
}

fn push_unique(points: &mut Vec<Point3>, point: Point3) {
    if points
        .iter()
        .all(|q| (q - point).norm() > INTERSECTION_TOLERANCE)
    {
        points.push(point);
    }
}

// ── line / line ──

fn line_line(a: &Line, b: &Line) -> CurveIntersection {
    let tol = INTERSECTION_TOLERANCE;
    let da = a.direction();
    let db = b.direction();

    if da.cross(db).norm() < TOLERANCE {
        if a.perpendicular_distance(b.origin()) > tol {
            return CurveIntersection::disjoint();
        }
        return collinear_lines(a, b);
    }

    // Closest approach between the two infinite lines.
    let w0 = a.origin() - b.origin();
    let bb = da.dot(db);
    let d = da.dot(&w0);
    let e = db.dot(&w0);
    let denom = 1.0 - bb * bb;
    let s = (bb * e - d) / denom;
    let t = (e - bb * d) / denom;

    let pa = a.evaluate(s);
    let pb = b.evaluate(t);
    if (pa - pb).norm() > tol || !in_domain(s, &a.domain(), tol) || !in_domain(t, &b.domain(), tol) {
        return CurveIntersection::disjoint();
    }
    CurveIntersection::overlap(vec![pa])
}

/// Classifies two lines known to lie on the same infinite line, in the
/// parameterisation of `a`.
fn collinear_lines(a: &Line, b: &Line) -> CurveIntersection {
    let tol = INTERSECTION_TOLERANCE;
    let ra = a.domain();
    let (b0, b1) = if b.is_bound() {
        let s = a.parameter_of(&b.start_point());
        let e = a.parameter_of(&b.end_point());
        (s.min(e), s.max(e))
    } else {
        (f64::NEG_INFINITY, f64::INFINITY)
    };

    let close = |x: f64, y: f64| x == y || (x - y).abs() <= tol;
    if close(ra.t_min, b0) && close(ra.t_max, b1) {
        return CurveIntersection::of(SetComparison::Equal);
    }
    if ra.t_min <= b0 + tol && b1 <= ra.t_max + tol {
        return CurveIntersection::of(SetComparison::Superset);
    }
    if b0 <= ra.t_min + tol && ra.t_max <= b1 + tol {
        return CurveIntersection::of(SetComparison::Subset);
    }

    let lo = ra.t_min.max(b0);
    let hi = ra.t_max.min(b1);
    if hi < lo - tol {
        return CurveIntersection::disjoint();
    }
    let mut points = vec![a.evaluate(lo)];
    push_unique(&mut points, a.evaluate(hi));
    CurveIntersection::overlap(points)
}

// ── line / arc ──

fn line_arc(line: &Line, arc: &Arc) -> CurveIntersection {
    let tol = INTERSECTION_TOLERANCE;
    let params = line_circle_params(line.origin(), line.direction(), arc, tol);

    let mut points = Vec::new();
    for t in params {
        if !in_domain(t, &line.domain(), tol) {
            continue;
        }
        let point = line.evaluate(t);
        if arc_contains_point(arc, &point, tol) {
            push_unique(&mut points, point);
        }
    }
    CurveIntersection::overlap(points)
}

/// Parameters along `origin + t * dir` (unit `dir`) where the line meets
/// the full circle of `arc`.
fn line_circle_params(origin: &Point3, dir: &Vector3, arc: &Arc, tolerance: f64) -> Vec<f64> {
    let normal = arc.normal();
    let w = origin - arc.center();
    let denom = normal.dot(dir);
    let height = normal.dot(&w);

    if denom.abs() < TOLERANCE {
        if height.abs() > tolerance {
            return Vec::new();
        }
        // In the arc plane: |w + t dir| = r.
        let b = dir.dot(&w);
        let dist = (w.norm_squared() - b * b).max(0.0).sqrt();
        let r = arc.radius();
        if dist > r + tolerance {
            Vec::new()
        } else if (dist - r).abs() <= tolerance {
            vec![-b]
        } else {
            let half = (r * r - dist * dist).sqrt();
            vec![-b - half, -b + half]
        }
    } else {
        // Crossing the plane: only the piercing point can be on the circle.
        vec![-height / denom]
    }
}

/// Returns whether `point` lies on the swept part of `arc`.
fn arc_contains_point(arc: &Arc, point: &Point3, tolerance: f64) -> bool {
    let d = point - arc.center();
    if arc.normal().dot(&d).abs() > tolerance {
        return false;
    }
    let in_plane = d - arc.normal() * arc.normal().dot(&d);
    if (in_plane.norm() - arc.radius()).abs() > tolerance {
        return false;
    }
    arc.angle_of(point)
        .is_some_and(|angle| arc.contains_angle(angle, tolerance / arc.radius()))
}

// ── arc / arc ──

fn arc_arc(a: &Arc, b: &Arc) -> CurveIntersection {
    let tol = INTERSECTION_TOLERANCE;
    let na = a.normal();
    let nb = b.normal();

    if na.cross(nb).norm() >= TOLERANCE {
        return skew_arcs(a, b, tol);
    }

    if na.dot(&(b.center() - a.center())).abs() > tol {
        // Parallel planes.
        return CurveIntersection::disjoint();
    }

    if (b.center() - a.center()).norm() <= tol && (a.radius() - b.radius()).abs() <= tol {
        return same_circle(a, b, tol);
    }

    // Coplanar, distinct circles.
    let offset = b.center() - a.center();
    let d = offset.norm();
    let (ra, rb) = (a.radius(), b.radius());
    if d < TOLERANCE || d > ra + rb + tol || d < (ra - rb).abs() - tol {
        return CurveIntersection::disjoint();
    }
    let u = offset / d;
    let v = na.cross(&u);
    let x = (d * d + ra * ra - rb * rb) / (2.0 * d);
    let h = (ra * ra - x * x).max(0.0).sqrt();
    let base = a.center() + u * x;
    let candidates = if h <= tol {
        vec![base]
    } else {
        vec![base + v * h, base - v * h]
    };

    let mut points = Vec::new();
    for point in candidates {
        if arc_contains_point(a, &point, tol) && arc_contains_point(b, &point, tol) {
            push_unique(&mut points, point);
        }
    }
    CurveIntersection::overlap(points)
}

/// Arcs in non-parallel planes can only meet on the line shared by both
/// planes.
fn skew_arcs(a: &Arc, b: &Arc, tol: f64) -> CurveIntersection {
    let (Ok(plane_a), Ok(plane_b)) = (
        Plane::from_normal(*a.center(), *a.normal()),
        Plane::from_normal(*b.center(), *b.normal()),
    ) else {
        return CurveIntersection::disjoint();
    };
    let PlanePairRelation::IntersectionLine { origin, direction } =
        plane_plane_intersect(&plane_a, &plane_b, TOLERANCE)
    else {
        return CurveIntersection::disjoint();
    };

    let mut points = Vec::new();
    for t in line_circle_params(&origin, &direction, a, tol) {
        let point = origin + direction * t;
        if arc_contains_point(a, &point, tol) && arc_contains_point(b, &point, tol) {
            push_unique(&mut points, point);
        }
    }
    CurveIntersection::overlap(points)
}

/// Classifies two arcs on the same circle by their angular ranges.
fn same_circle(a: &Arc, b: &Arc, tol: f64) -> CurveIntersection {
    match (a.is_closed(), b.is_closed()) {
        (true, true) => return CurveIntersection::of(SetComparison::Equal),
        (true, false) => return CurveIntersection::of(SetComparison::Superset),
        (false, true) => return CurveIntersection::of(SetComparison::Subset),
        (false, false) => {}
    }

    // Traverse both arcs with the same orientation.
    let b = if a.normal().dot(b.normal()) < 0.0 {
        b.reversed()
    } else {
        b.clone()
    };
    let atol = tol / a.radius();

    let a_has_b_start = arc_contains_point(a, &b.start_point(), tol);
    let a_has_b_end = arc_contains_point(a, &b.end_point(), tol);
    let b_has_a_start = arc_contains_point(&b, &a.start_point(), tol);
    let b_has_a_end = arc_contains_point(&b, &a.end_point(), tol);

    let same_ends = (a.start_point() - b.start_point()).norm() <= tol
        && (a.end_point() - b.end_point()).norm() <= tol;
    if same_ends && (a.sweep() - b.sweep()).abs() <= atol {
        return CurveIntersection::of(SetComparison::Equal);
    }
    if a_has_b_start && a_has_b_end && b.sweep() <= a.sweep() + atol && starts_within(a, &b, atol) {
        return CurveIntersection::of(SetComparison::Superset);
    }
    if b_has_a_start && b_has_a_end && a.sweep() <= b.sweep() + atol && starts_within(&b, a, atol) {
        return CurveIntersection::of(SetComparison::Subset);
    }

    let mut points = Vec::new();
    for (inside, point) in [
        (b_has_a_start, a.start_point()),
        (b_has_a_end, a.end_point()),
        (a_has_b_start, b.start_point()),
        (a_has_b_end, b.end_point()),
    ] {
        if inside {
            push_unique(&mut points, point);
        }
    }
    CurveIntersection::overlap(points)
}

/// Returns whether `inner`, walked from its start, stays inside `outer`
/// for its whole sweep.
fn starts_within(outer: &Arc, inner: &Arc, atol: f64) -> bool {
    let Some(start) = outer.angle_of(&inner.start_point()) else {
        return false;
    };
    let domain = outer.domain();
    let mut s = outer.normalize_angle(start);
    // Snap a start just before the outer start onto it.
    if s > domain.t_min + TAU - atol {
        s -= TAU;
    }
    s + inner.sweep() <= domain.t_max + atol
}

// ── tessellation fallback ──

fn chords(curve: &AnyCurve) -> Vec<Line> {
    if let AnyCurve::Line(line) = curve {
        return vec![line.clone()];
    }
    curve
        .tessellate()
        .windows(2)
        .filter_map(|pair| Line::bound(pair[0], pair[1]).ok())
        .collect()
}

fn chords_chords(a: &AnyCurve, b: &AnyCurve) -> CurveIntersection {
    let chords_a = chords(a);
    let chords_b = chords(b);
    let mut points = Vec::new();
    for ca in &chords_a {
        for cb in &chords_b {
            let hit = line_line(ca, cb);
            match hit.relation {
                SetComparison::Overlap => {
                    for point in hit.points {
                        push_unique(&mut points, point);
                    }
                }
                SetComparison::Disjoint => {}
                // Collinear chords: report the ends of the shared run.
                SetComparison::Equal | SetComparison::Subset => {
                    push_unique(&mut points, ca.start_point());
                    push_unique(&mut points, ca.end_point());
                }
                SetComparison::Superset => {
                    push_unique(&mut points, cb.start_point());
                    push_unique(&mut points, cb.end_point());
                }
            }
        }
    }
    CurveIntersection::overlap(points)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::curve::GenericCurve;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn seg(a: Point3, b: Point3) -> AnyCurve {
        Line::bound(a, b).unwrap().into()
    }

    fn arc(center: Point3, radius: f64, start: f64, end: f64) -> AnyCurve {
        Arc::new(center, radius, Vector3::z(), Vector3::x(), start, end)
            .unwrap()
            .into()
    }

    // ── line / line ──

    #[test]
    fn crossing_segments_overlap_at_one_point() {
        let a = seg(p(-0.5, 0.0, 0.0), p(0.5, 0.0, 0.0));
        let b = seg(p(0.0, -0.5, 0.0), p(0.0, 0.5, 0.0));
        let hit = a.intersect_with(&b);
        assert_eq!(hit.relation, SetComparison::Overlap);
        assert_eq!(hit.points, vec![p(0.0, 0.0, 0.0)]);
    }

    #[test]
    fn segments_that_would_cross_if_extended_are_disjoint() {
        let a = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = seg(p(2.0, -1.0, 0.0), p(2.0, 1.0, 0.0));
        assert_eq!(a.intersect_with(&b).relation, SetComparison::Disjoint);
        let unbound = a.make_unbound();
        assert_eq!(unbound.intersect_with(&b).points, vec![p(2.0, 0.0, 0.0)]);
    }

    #[test]
    fn skew_segments_are_disjoint() {
        let a = seg(p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = seg(p(0.0, -1.0, 1.0), p(0.0, 1.0, 1.0));
        assert_eq!(a.intersect_with(&b).relation, SetComparison::Disjoint);
    }

    #[test]
    fn collinear_segments_classify_by_extent() {
        let long = seg(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0));
        let inner = seg(p(7.0, 0.0, 0.0), p(2.0, 0.0, 0.0));
        let partial = seg(p(8.0, 0.0, 0.0), p(12.0, 0.0, 0.0));
        let apart = seg(p(11.0, 0.0, 0.0), p(12.0, 0.0, 0.0));

        assert_eq!(long.intersect_with(&long).relation, SetComparison::Equal);
        assert_eq!(long.intersect_with(&inner).relation, SetComparison::Superset);
        assert_eq!(inner.intersect_with(&long).relation, SetComparison::Subset);
        assert_eq!(long.intersect_with(&apart).relation, SetComparison::Disjoint);

        let hit = long.intersect_with(&partial);
        assert_eq!(hit.relation, SetComparison::Overlap);
        assert_eq!(hit.points.len(), 2);
        assert_abs_diff_eq!(hit.points[0], p(8.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(hit.points[1], p(10.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn collinear_segments_touching_end_to_end() {
        let a = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = seg(p(1.0, 0.0, 0.0), p(3.0, 0.0, 0.0));
        let hit = a.intersect_with(&b);
        assert_eq!(hit.relation, SetComparison::Overlap);
        assert_eq!(hit.points.len(), 1);
    }

    #[test]
    fn parallel_offset_lines_are_disjoint() {
        let a = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let b = seg(p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0));
        assert_eq!(a.intersect_with(&b).relation, SetComparison::Disjoint);
    }

    // ── line / arc ──

    #[test]
    fn line_through_semicircle_hits_once() {
        let half = arc(p(0.0, 0.0, 0.0), 1.0, 0.0, PI);
        let line = seg(p(-2.0, 0.5, 0.0), p(2.0, 0.5, 0.0));
        let hit = line.intersect_with(&half);
        assert_eq!(hit.relation, SetComparison::Overlap);
        assert_eq!(hit.points.len(), 2);
        let x = 0.75_f64.sqrt();
        assert_abs_diff_eq!(hit.points[0], p(-x, 0.5, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(hit.points[1], p(x, 0.5, 0.0), epsilon = 1e-12);

        let below = seg(p(-2.0, -0.5, 0.0), p(2.0, -0.5, 0.0));
        assert_eq!(below.intersect_with(&half).relation, SetComparison::Disjoint);
    }

    #[test]
    fn tangent_line_touches_arc() {
        let quarter = arc(p(0.0, 0.0, 0.0), 1.0, 0.0, FRAC_PI_2);
        let line = seg(p(-1.0, 1.0, 0.0), p(1.0, 1.0, 0.0));
        let hit = quarter.intersect_with(&line);
        assert_eq!(hit.points.len(), 1);
        assert_abs_diff_eq!(hit.points[0], p(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn line_piercing_arc_plane() {
        let circle = arc(p(0.0, 0.0, 0.0), 1.0, 0.0, TAU);
        let line = seg(p(1.0, 0.0, -1.0), p(1.0, 0.0, 1.0));
        assert_eq!(line.intersect_with(&circle).points, vec![p(1.0, 0.0, 0.0)]);
        let miss = seg(p(0.5, 0.0, -1.0), p(0.5, 0.0, 1.0));
        assert_eq!(miss.intersect_with(&circle).relation, SetComparison::Disjoint);
    }

    // ── arc / arc ──

    #[test]
    fn coplanar_circles_cross_twice() {
        let a = arc(p(0.0, 0.0, 0.0), 1.0, 0.0, TAU);
        let b = arc(p(1.0, 0.0, 0.0), 1.0, 0.0, TAU);
        let hit = a.intersect_with(&b);
        assert_eq!(hit.relation, SetComparison::Overlap);
        assert_eq!(hit.points.len(), 2);
        for point in &hit.points {
            assert_abs_diff_eq!(point.x, 0.5, epsilon = 1e-12);
            assert_abs_diff_eq!(point.y.abs(), 0.75_f64.sqrt(), epsilon = 1e-12);
        }
    }

    #[test]
    fn same_circle_arcs_classify_by_range() {
        let big = arc(p(0.0, 0.0, 0.0), 2.0, 0.0, PI);
        let small = arc(p(0.0, 0.0, 0.0), 2.0, 0.5, 1.5);
        let shifted = arc(p(0.0, 0.0, 0.0), 2.0, FRAC_PI_2, PI + FRAC_PI_2);
        let apart = arc(p(0.0, 0.0, 0.0), 2.0, PI + 0.5, PI + 1.0);

        assert_eq!(big.intersect_with(&big).relation, SetComparison::Equal);
        assert_eq!(big.intersect_with(&small).relation, SetComparison::Superset);
        assert_eq!(small.intersect_with(&big).relation, SetComparison::Subset);
        assert_eq!(big.intersect_with(&apart).relation, SetComparison::Disjoint);

        let hit = big.intersect_with(&shifted);
        assert_eq!(hit.relation, SetComparison::Overlap);
        assert_eq!(hit.points.len(), 2);
    }

    #[test]
    fn reversed_arc_equals_original() {
        let a = arc(p(0.0, 0.0, 0.0), 1.0, 0.2, 1.7);
        let rev = a.reversed().unwrap();
        assert_eq!(a.intersect_with(&rev).relation, SetComparison::Equal);
    }

    #[test]
    fn perpendicular_circles_meet_on_shared_line() {
        let a = arc(p(0.0, 0.0, 0.0), 1.0, 0.0, TAU);
        let b: AnyCurve = Arc::new(p(0.0, 0.0, 0.0), 1.0, Vector3::y(), Vector3::x(), 0.0, TAU)
            .unwrap()
            .into();
        let hit = a.intersect_with(&b);
        assert_eq!(hit.relation, SetComparison::Overlap);
        assert_eq!(hit.points.len(), 2);
        for point in &hit.points {
            assert_abs_diff_eq!(point.x.abs(), 1.0, epsilon = 1e-9);
        }
    }

    // ── fallback ──

    #[test]
    fn generic_curve_intersects_through_chords() {
        let zigzag: AnyCurve =
            GenericCurve::new(vec![p(0.0, 0.0, 0.0), p(2.0, 2.0, 0.0), p(4.0, 0.0, 0.0)])
                .unwrap()
                .into();
        let line = seg(p(0.0, 1.0, 0.0), p(4.0, 1.0, 0.0));
        let hit = zigzag.intersect_with(&line);
        assert_eq!(hit.relation, SetComparison::Overlap);
        assert_eq!(hit.points.len(), 2);
        assert_abs_diff_eq!(hit.points[0], p(1.0, 1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(hit.points[1], p(3.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn shared_vertex_reported_once() {
        let a: AnyCurve =
            GenericCurve::new(vec![p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(2.0, 0.0, 0.0)])
                .unwrap()
                .into();
        let b = seg(p(1.0, 1.0, 0.0), p(1.0, 5.0, 0.0));
        assert_eq!(a.intersect_with(&b).points.len(), 1);
    }
}
