use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, SHORT_CURVE_TOLERANCE, TOLERANCE};
use crate::tessellation::TessellationParams;

use super::{Curve, CurveDomain};

/// A straight line defined by an origin point and a unit direction.
///
/// The parametric form is: `P(t) = origin + t * direction`. A bound line
/// (segment) starts at its origin and has the domain `[0, length]`; an
/// unbound line has the domain `(-∞, +∞)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    origin: Point3,
    direction: Vector3,
    /// Parameter range of a bound line.
    extent: Option<(f64, f64)>,
}

impl Line {
    /// Creates a line segment from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are closer than
    /// [`SHORT_CURVE_TOLERANCE`].
    pub fn bound(start: Point3, end: Point3) -> Result<Self> {
        let diff = end - start;
        let len = diff.norm();
        if len < SHORT_CURVE_TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "line segment of length {len} is too short"
            ))
            .into());
        }
        Ok(Self {
            origin: start,
            direction: diff / len,
            extent: Some((0.0, len)),
        })
    }

    /// Creates an infinite line through `origin` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn unbound(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
            extent: None,
        })
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns the infinite line this line lies on.
    #[must_use]
    pub fn make_unbound(&self) -> Self {
        Self {
            extent: None,
            ..self.clone()
        }
    }

    /// Returns the same line traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self.extent {
            Some(_) => Self {
                origin: self.end_point(),
                direction: -self.direction,
                extent: Some((0.0, self.length())),
            },
            None => Self {
                origin: self.origin,
                direction: -self.direction,
                extent: None,
            },
        }
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            origin: self.origin + offset,
            ..self.clone()
        }
    }

    /// Parameter of the foot of the perpendicular from `point`, ignoring
    /// the extent.
    #[must_use]
    pub fn parameter_of(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    /// Distance from `point` to the infinite line through this line.
    #[must_use]
    pub fn perpendicular_distance(&self, point: &Point3) -> f64 {
        let foot = self.origin + self.direction * self.parameter_of(point);
        (point - foot).norm()
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    fn domain(&self) -> CurveDomain {
        match self.extent {
            Some((t0, t1)) => CurveDomain::new(t0, t1),
            None => CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY),
        }
    }

    fn is_bound(&self) -> bool {
        self.extent.is_some()
    }

    fn start_point(&self) -> Point3 {
        match self.extent {
            Some((t0, _)) => self.evaluate(t0),
            None => self.origin,
        }
    }

    fn end_point(&self) -> Point3 {
        match self.extent {
            Some((_, t1)) => self.evaluate(t1),
            None => self.origin + self.direction,
        }
    }

    fn evaluate_normalized(&self, u: f64) -> Point3 {
        match self.extent {
            Some(_) => self.evaluate(self.domain().denormalize(u)),
            // An infinite domain cannot be normalized.
            None => self.evaluate(u),
        }
    }

    fn length(&self) -> f64 {
        match self.extent {
            Some((t0, t1)) => t1 - t0,
            None => f64::INFINITY,
        }
    }

    fn tessellate_with(&self, _params: &TessellationParams) -> Vec<Point3> {
        vec![self.start_point(), self.end_point()]
    }

    fn project(&self, point: &Point3) -> f64 {
        let t = self.parameter_of(point);
        match self.extent {
            Some((t0, t1)) => t.clamp(t0, t1),
            None => t,
        }
    }
}
