use crate::math::Point3;

/// An axis-aligned bounding box.
///
/// Extension keeps `min <= max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// The extent of a curve or point set; same shape as a bounding box.
pub type Outline = BoundingBox;

impl Default for BoundingBox {
    /// The degenerate box at the origin.
    fn default() -> Self {
        Self {
            min: Point3::origin(),
            max: Point3::origin(),
        }
    }
}

impl BoundingBox {
    /// Creates a box from two corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing every point, or `None` for an empty input.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bbox = Self::new(first, first);
        for point in iter {
            bbox.extend_by_point(point);
        }
        Some(bbox)
    }

    /// Grows the box to include `point`.
    pub fn extend_by_point(&mut self, point: &Point3) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Grows the box to include both corners of `other`.
    pub fn extend_by_another(&mut self, other: &BoundingBox) {
        self.extend_by_point(&other.min);
        self.extend_by_point(&other.max);
    }

    /// Returns the box with its vertical range replaced by `[min_z, max_z]`.
    #[must_use]
    pub fn flattened_z(&self, min_z: f64, max_z: f64) -> Self {
        Self {
            min: Point3::new(self.min.x, self.min.y, min_z),
            max: Point3::new(self.max.x, self.max.y, max_z),
        }
    }

    /// Returns whether `point` lies inside the box or on its boundary,
    /// allowing `tolerance` on every side.
    #[must_use]
    pub fn contains(&self, point: &Point3, tolerance: f64) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] - tolerance && point[i] <= self.max[i] + tolerance)
    }
}
