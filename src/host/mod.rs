//! Boundary with the host building model.
//!
//! The toolkit never owns host elements. It reads placements, boxes and
//! solids through [`HostGeometry`] and works on the values it gets back.

mod bounds;
mod faces;

pub use bounds::union_of_element_boxes;
pub use faces::{faces_matching, plane_from_face, plane_from_view};

use crate::error::{HostError, Result};
use crate::geometry::bounding_box::BoundingBox;
use crate::geometry::curve::AnyCurve;
use crate::geometry::surface::Solid;
use crate::math::{Point3, Vector3};

/// How an element is placed in the model.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Placed along a curve (walls, beams, pipes).
    Curve(AnyCurve),
    /// Placed at a point (families, fixtures).
    Point(Point3),
}

/// A host view, as far as geometry is concerned.
pub trait HostView {
    /// Direction the view looks towards.
    fn view_direction(&self) -> Vector3;

    /// Origin of the view.
    fn origin(&self) -> Point3;
}

/// Read access to the geometry of host elements.
pub trait HostGeometry {
    type Element;
    type View: HostView;

    /// Placement of `element`, if it has one.
    fn location(&self, element: &Self::Element) -> Option<Location>;

    /// Bounding box of `element`, optionally as seen in `view`.
    fn bounding_box(
        &self,
        element: &Self::Element,
        view: Option<&Self::View>,
    ) -> Option<BoundingBox>;

    /// Solids making up `element`.
    fn solids(&self, element: &Self::Element) -> Vec<Solid>;

    /// Human-readable name used in error messages.
    fn element_name(&self, element: &Self::Element) -> String;
}

/// The curve `element` is placed along.
///
/// # Errors
///
/// Returns [`HostError::InvalidElement`] if the element is not curve-placed.
pub fn location_curve<H: HostGeometry>(host: &H, element: &H::Element) -> Result<AnyCurve> {
    match host.location(element) {
        Some(Location::Curve(curve)) => Ok(curve),
        _ => Err(HostError::InvalidElement(format!(
            "{} has no location curve",
            host.element_name(element)
        ))
        .into()),
    }
}

/// The point `element` is placed at.
///
/// # Errors
///
/// Returns [`HostError::InvalidElement`] if the element is not point-placed.
pub fn location_point<H: HostGeometry>(host: &H, element: &H::Element) -> Result<Point3> {
    match host.location(element) {
        Some(Location::Point(point)) => Ok(point),
        _ => Err(HostError::InvalidElement(format!(
            "{} has no location point",
            host.element_name(element)
        ))
        .into()),
    }
}
