use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::tessellation::TessellationParams;

use super::{Curve, CurveDomain};

/// A free-form curve (spline, ellipse, hermite, ...) carried as the
/// ordered points of its tessellation.
///
/// The parameter is arc length along the polyline, so the domain is
/// `[0, length]`. Generic curves are always bound.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericCurve {
    points: Vec<Point3>,
    /// Cumulative arc length at each point; `stations[0] == 0`.
    stations: Vec<f64>,
}

impl GenericCurve {
    /// Creates a generic curve through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given or the points
    /// span no length.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(
                "a generic curve needs at least two points".into(),
            )
            .into());
        }
        let mut stations = Vec::with_capacity(points.len());
        let mut total = 0.0;
        stations.push(total);
        for pair in points.windows(2) {
            total += (pair[1] - pair[0]).norm();
            stations.push(total);
        }
        if total < TOLERANCE {
            return Err(
                GeometryError::Degenerate("generic curve has zero length".into()).into(),
            );
        }
        Ok(Self { points, stations })
    }

    /// Returns the sample points of the curve.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            points: self.points.iter().map(|pt| pt + offset).collect(),
            stations: self.stations.clone(),
        }
    }

    fn total_length(&self) -> f64 {
        self.stations.last().copied().unwrap_or(0.0)
    }
}

impl Curve for GenericCurve {
    fn evaluate(&self, t: f64) -> Point3 {
        let t = t.clamp(0.0, self.total_length());
        // First segment whose end station reaches `t`.
        let idx = self
            .stations
            .partition_point(|&s| s < t)
            .clamp(1, self.points.len() - 1);
        let (s0, s1) = (self.stations[idx - 1], self.stations[idx]);
        let (p0, p1) = (self.points[idx - 1], self.points[idx]);
        let span = s1 - s0;
        if span < TOLERANCE {
            return p1;
        }
        p0 + (p1 - p0) * ((t - s0) / span)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.total_length())
    }

    fn is_bound(&self) -> bool {
        true
    }

    fn length(&self) -> f64 {
        self.total_length()
    }

    fn tessellate_with(&self, _params: &TessellationParams) -> Vec<Point3> {
        self.points.clone()
    }

    fn project(&self, point: &Point3) -> f64 {
        let mut best_t = 0.0;
        let mut best_dist = f64::INFINITY;
        for (i, pair) in self.points.windows(2).enumerate() {
            let seg = pair[1] - pair[0];
            let seg_len_sq = seg.norm_squared();
            let frac = if seg_len_sq < TOLERANCE * TOLERANCE {
                0.0
            } else {
                ((point - pair[0]).dot(&seg) / seg_len_sq).clamp(0.0, 1.0)
            };
            let d = (point - (pair[0] + seg * frac)).norm();
            if d < best_dist {
                best_dist = d;
                best_t = self.stations[i] + frac * (self.stations[i + 1] - self.stations[i]);
            }
        }
        best_t
    }
}
