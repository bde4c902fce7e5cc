pub mod bounding_box;
pub mod curve;
pub mod surface;

pub use bounding_box::{BoundingBox, Outline};
pub use curve::{
    AnyCurve, Arc, Curve, CurveDomain, CurveIntersection, GenericCurve, Line, SetComparison,
};
pub use surface::{Face, Plane, Solid};
