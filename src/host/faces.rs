use crate::error::Result;
use crate::geometry::surface::{Face, Plane};

use super::{HostGeometry, HostView};

/// The plane through a view's origin facing along its view direction.
///
/// # Errors
///
/// Returns an error if the view direction is zero-length.
pub fn plane_from_view<V: HostView>(view: &V) -> Result<Plane> {
    Plane::from_normal(view.origin(), view.view_direction())
}

/// Supporting plane of a planar face. Curved faces and faces with a
/// zero normal have none.
#[must_use]
pub fn plane_from_face(face: &Face) -> Option<Plane> {
    face.plane().ok().flatten()
}

/// Faces of every solid of `element` accepted by `predicate`.
#[must_use]
pub fn faces_matching<H, P>(host: &H, element: &H::Element, mut predicate: P) -> Vec<Face>
where
    H: HostGeometry,
    P: FnMut(&Face) -> bool,
{
    host.solids(element)
        .into_iter()
        .flat_map(|solid| solid.faces)
        .filter(|face| predicate(face))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::mock::{MockElement, MockHost, MockView};
    use super::*;
    use crate::geometry::surface::Solid;
    use crate::math::{Point3, Vector3};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn floor_face(z: f64) -> Face {
        Face::Planar {
            origin: p(0.0, 0.0, z),
            normal: Vector3::z(),
        }
    }

    #[test]
    fn view_plane_faces_view_direction() {
        let view = MockView {
            direction: Vector3::new(0.0, -3.0, 0.0),
            origin: p(1.0, 2.0, 3.0),
        };
        let plane = plane_from_view(&view).unwrap();
        assert_eq!(*plane.origin(), p(1.0, 2.0, 3.0));
        assert_eq!(*plane.normal(), Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn degenerate_view_has_no_plane() {
        let view = MockView {
            direction: Vector3::zeros(),
            origin: p(0.0, 0.0, 0.0),
        };
        assert!(plane_from_view(&view).is_err());
    }

    #[test]
    fn only_planar_faces_have_planes() {
        assert!(plane_from_face(&floor_face(1.0)).is_some());
        assert!(plane_from_face(&Face::General).is_none());
        let flat_normal = Face::Planar {
            origin: p(0.0, 0.0, 0.0),
            normal: Vector3::zeros(),
        };
        assert!(plane_from_face(&flat_normal).is_none());
    }

    #[test]
    fn collects_matching_faces_across_solids() {
        let mut host = MockHost::default();
        host.elements.insert(
            7,
            MockElement {
                solids: vec![
                    Solid {
                        faces: vec![floor_face(0.0), Face::General],
                        volume: 1.0,
                    },
                    Solid {
                        faces: vec![floor_face(3.0)],
                        volume: 2.0,
                    },
                ],
                ..MockElement::default()
            },
        );

        let planar = faces_matching(&host, &7, Face::is_planar);
        assert_eq!(planar.len(), 2);
        let upper = faces_matching(&host, &7, |face| {
            plane_from_face(face).is_some_and(|plane| plane.origin().z > 1.0)
        });
        assert_eq!(upper, vec![floor_face(3.0)]);
        assert!(faces_matching(&host, &8, |_| true).is_empty());
    }
}
