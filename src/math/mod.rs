pub mod plane_3d;
pub mod scalar;
pub mod vector;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Threshold below which a vector or radius counts as zero-length.
pub const TOLERANCE: f64 = 1e-10;

/// Default tolerance for scalar and curve-distance comparisons.
pub const LINEAR_TOLERANCE: f64 = 1e-5;

/// Default tolerance for point coincidence and point-on-curve checks.
pub const POINT_TOLERANCE: f64 = 1e-3;

/// Default angular tolerance (radians) for direction relations.
pub const ANGULAR_TOLERANCE: f64 = 1e-6;

/// Fixed epsilon under which a ray is treated as parallel to a plane.
pub const RAY_PLANE_EPSILON: f64 = 1e-6;

/// Gap allowed between consecutive curves of a contiguous chain
/// (a sixteenth of an inch, in feet).
pub const CONTIGUOUS_TOLERANCE: f64 = 1.0 / 12.0 / 16.0;

/// Shortest segment that still forms a valid bound line.
pub const SHORT_CURVE_TOLERANCE: f64 = 1e-6;

/// Distance under which two curves are reported as crossing.
pub const INTERSECTION_TOLERANCE: f64 = 1e-6;
