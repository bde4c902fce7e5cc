mod arc;
mod generic;
mod intersect;
mod line;

pub use arc::Arc;
pub use generic::GenericCurve;
pub use intersect::{CurveIntersection, SetComparison};
pub use line::Line;

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3};
use crate::tessellation::TessellationParams;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Maps a normalized parameter in `[0, 1]` onto this domain.
    #[must_use]
    pub fn denormalize(&self, u: f64) -> f64 {
        self.t_min + u * (self.t_max - self.t_min)
    }
}

/// Capabilities shared by every curve kind.
pub trait Curve {
    /// Evaluates the curve at raw parameter `t`.
    fn evaluate(&self, t: f64) -> Point3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve has finite end points.
    fn is_bound(&self) -> bool;

    /// Point at the start of the curve.
    fn start_point(&self) -> Point3 {
        self.evaluate(self.domain().t_min)
    }

    /// Point at the end of the curve.
    fn end_point(&self) -> Point3 {
        self.evaluate(self.domain().t_max)
    }

    /// Evaluates the curve at `u ∈ [0, 1]` across its domain.
    fn evaluate_normalized(&self, u: f64) -> Point3 {
        self.evaluate(self.domain().denormalize(u))
    }

    /// Length of the curve; infinite for unbound lines.
    fn length(&self) -> f64;

    /// Ordered points approximating the curve, start and end included.
    fn tessellate_with(&self, params: &TessellationParams) -> Vec<Point3>;

    /// [`tessellate_with`](Curve::tessellate_with) using default parameters.
    fn tessellate(&self) -> Vec<Point3> {
        self.tessellate_with(&TessellationParams::default())
    }

    /// Parameter of the point on the curve nearest to `point`.
    fn project(&self, point: &Point3) -> f64;

    /// Distance from `point` to the nearest point of the curve.
    fn distance_to(&self, point: &Point3) -> f64 {
        (point - self.evaluate(self.project(point))).norm()
    }
}

/// The closed set of curve kinds handled by the toolkit.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyCurve {
    /// A straight line, bound or unbound.
    Line(Line),
    /// A circular arc or full circle.
    Arc(Arc),
    /// Any other curve, carried as its tessellation.
    Generic(GenericCurve),
}

impl AnyCurve {
    /// Short name of the curve kind, for messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Line(_) => "Line",
            Self::Arc(_) => "Arc",
            Self::Generic(_) => "GenericCurve",
        }
    }

    /// Returns the same curve traversed from end to start.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Unsupported`] for generic curves; only
    /// lines and arcs can be reversed.
    pub fn reversed(&self) -> Result<Self> {
        match self {
            Self::Line(line) => Ok(Self::Line(line.reversed())),
            Self::Arc(arc) => Ok(Self::Arc(arc.reversed())),
            Self::Generic(_) => Err(OperationError::Unsupported(format!(
                "reversing a {} curve",
                self.kind_name()
            ))
            .into()),
        }
    }

    /// Returns the unbounded extension of this curve: the infinite line
    /// through a line, the full circle through an arc. Generic curves have
    /// no extension and are returned unchanged.
    #[must_use]
    pub fn make_unbound(&self) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.make_unbound()),
            Self::Arc(arc) => Self::Arc(arc.make_unbound()),
            Self::Generic(_) => self.clone(),
        }
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.translated(offset)),
            Self::Arc(arc) => Self::Arc(arc.translated(offset)),
            Self::Generic(curve) => Self::Generic(curve.translated(offset)),
        }
    }

    fn as_curve(&self) -> &dyn Curve {
        match self {
            Self::Line(line) => line,
            Self::Arc(arc) => arc,
            Self::Generic(curve) => curve,
        }
    }
}

impl Curve for AnyCurve {
    fn evaluate(&self, t: f64) -> Point3 {
        self.as_curve().evaluate(t)
    }

    fn domain(&self) -> CurveDomain {
        self.as_curve().domain()
    }

    fn is_bound(&self) -> bool {
        self.as_curve().is_bound()
    }

    fn start_point(&self) -> Point3 {
        self.as_curve().start_point()
    }

    fn end_point(&self) -> Point3 {
        self.as_curve().end_point()
    }

    fn evaluate_normalized(&self, u: f64) -> Point3 {
        self.as_curve().evaluate_normalized(u)
    }

    fn length(&self) -> f64 {
        self.as_curve().length()
    }

    fn tessellate_with(&self, params: &TessellationParams) -> Vec<Point3> {
        self.as_curve().tessellate_with(params)
    }

    fn project(&self, point: &Point3) -> f64 {
        self.as_curve().project(point)
    }

    fn distance_to(&self, point: &Point3) -> f64 {
        self.as_curve().distance_to(point)
    }
}

impl From<Line> for AnyCurve {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for AnyCurve {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl From<GenericCurve> for AnyCurve {
    fn from(curve: GenericCurve) -> Self {
        Self::Generic(curve)
    }
}
