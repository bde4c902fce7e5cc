use crate::geometry::bounding_box::BoundingBox;

use super::HostGeometry;

/// Union of the host boxes of `elements`.
///
/// The fold starts from the degenerate box at the origin, so the result
/// always contains the origin. Elements without a box are skipped.
#[must_use]
pub fn union_of_element_boxes<'a, H, I>(host: &H, elements: I, view: Option<&H::View>) -> BoundingBox
where
    H: HostGeometry,
    H::Element: 'a,
    I: IntoIterator<Item = &'a H::Element>,
{
    elements
        .into_iter()
        .filter_map(|element| host.bounding_box(element, view))
        .fold(BoundingBox::default(), |mut acc, bbox| {
            acc.extend_by_another(&bbox);
            acc
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::mock::{MockElement, MockHost};
    use super::*;
    use crate::math::Point3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn boxed(min: Point3, max: Point3) -> MockElement {
        MockElement {
            bbox: Some(BoundingBox::new(min, max)),
            ..MockElement::default()
        }
    }

    #[test]
    fn unions_boxes_and_skips_missing() {
        let mut host = MockHost::default();
        host.elements.insert(1, boxed(p(2.0, 2.0, 1.0), p(3.0, 4.0, 5.0)));
        host.elements.insert(2, boxed(p(-1.0, 3.0, 2.0), p(0.5, 6.0, 3.0)));
        host.elements.insert(3, MockElement::default());

        let bbox = union_of_element_boxes(&host, &[1, 2, 3, 4], None);
        assert_eq!(bbox.min, p(-1.0, 0.0, 0.0));
        assert_eq!(bbox.max, p(3.0, 6.0, 5.0));
    }

    #[test]
    fn no_elements_give_origin_box() {
        let host = MockHost::default();
        let bbox = union_of_element_boxes(&host, &[], None);
        assert_eq!(bbox, BoundingBox::default());
    }
}
