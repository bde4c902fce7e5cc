use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space.
///
/// Defined by an origin point and two orthogonal unit basis vectors
/// (`x_vec`, `y_vec`). The normal is `x_vec × y_vec`.
///
/// Parametric form: `P(u, v) = origin + u * x_vec + v * y_vec`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    origin: Point3,
    x_vec: Vector3,
    y_vec: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a new plane from an origin and two spanning vectors.
    ///
    /// `y_dir` is re-orthogonalised against `x_dir`, so any non-parallel
    /// pair is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if a direction vector is zero-length
    /// or the two are parallel (degenerate plane).
    pub fn new(origin: Point3, x_dir: Vector3, y_dir: Vector3) -> Result<Self> {
        let x_len = x_dir.norm();
        if x_len < TOLERANCE || y_dir.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let x_vec = x_dir / x_len;

        let normal = x_vec.cross(&y_dir);
        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(
                GeometryError::Degenerate("plane directions are parallel".into()).into(),
            );
        }
        let normal = normal / normal_len;
        let y_vec = normal.cross(&x_vec);

        Ok(Self {
            origin,
            x_vec,
            y_vec,
            normal,
        })
    }

    /// Creates a plane from an origin and a normal vector.
    ///
    /// The basis vectors are computed automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;

        // Choose a reference vector not parallel to the normal
        let reference = if normal.x.abs() < 0.9 {
            Vector3::new(1.0, 0.0, 0.0)
        } else {
            Vector3::new(0.0, 1.0, 0.0)
        };

        let x_vec = normal.cross(&reference).normalize();
        let y_vec = normal.cross(&x_vec);

        Ok(Self {
            origin,
            x_vec,
            y_vec,
            normal,
        })
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the first in-plane basis vector.
    #[must_use]
    pub fn x_vec(&self) -> &Vector3 {
        &self.x_vec
    }

    /// Returns the second in-plane basis vector.
    #[must_use]
    pub fn y_vec(&self) -> &Vector3 {
        &self.y_vec
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Evaluates the plane at in-plane coordinates `(u, v)`.
    #[must_use]
    pub fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.origin + self.x_vec * u + self.y_vec * v
    }

    /// Expresses `point` in the plane's frame as `(u, v, height)`.
    #[must_use]
    pub fn to_local(&self, point: &Point3) -> (f64, f64, f64) {
        let d = point - self.origin;
        (d.dot(&self.x_vec), d.dot(&self.y_vec), d.dot(&self.normal))
    }
}
