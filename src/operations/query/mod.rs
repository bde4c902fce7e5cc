mod intersect;
mod outline;
mod point_on_curve;
mod relation;

pub use intersect::{cross_points, intersect_points};
pub use outline::outline;
pub use point_on_curve::{
    contains_point, distance_from_curve, is_point_on_curve, is_point_projected_on_curve,
    middle_point,
};
pub use relation::{
    is_collinear_with, is_parallel_arcs, is_parallel_curves, is_parallel_lines,
    perpendicular_foot_on_line,
};
