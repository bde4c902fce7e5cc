use crate::error::Result;
use crate::math::{Point3, Vector3};

use super::Plane;

/// A face of a host solid.
///
/// Only planar faces carry geometry the toolkit reasons about; other
/// faces are kept so that collections of faces stay complete.
#[derive(Debug, Clone, PartialEq)]
pub enum Face {
    /// A flat face with a point on it and its outward normal.
    Planar { origin: Point3, normal: Vector3 },
    /// Any curved face.
    General,
}

impl Face {
    /// Returns whether this face is planar.
    #[must_use]
    pub fn is_planar(&self) -> bool {
        matches!(self, Self::Planar { .. })
    }

    /// Returns the supporting plane of a planar face, or `None` for a
    /// general face.
    ///
    /// # Errors
    ///
    /// Returns an error if the face normal is zero-length.
    pub fn plane(&self) -> Result<Option<Plane>> {
        match self {
            Self::Planar { origin, normal } => Plane::from_normal(*origin, *normal).map(Some),
            Self::General => Ok(None),
        }
    }
}

/// A closed solid from the host model, seen through its faces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    /// Bounding faces of the solid.
    pub faces: Vec<Face>,
    /// Enclosed volume as reported by the host.
    pub volume: f64,
}
