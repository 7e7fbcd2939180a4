//! Concrete triangle with resolved vertex positions.

use nalgebra::{Point3, Vector3};

/// A triangle with three resolved vertex positions.
///
/// Polygonal faces are fan-triangulated into these for geometric
/// computation. Winding is inherited from the owning face: CCW when
/// viewed from outside the mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: Point3<f64>,
    /// Second vertex.
    pub b: Point3<f64>,
    /// Third vertex.
    pub c: Point3<f64>,
}

impl Triangle {
    /// Create a triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { a, b, c }
    }

    /// Compute the triangle's area.
    #[must_use]
    pub fn area(&self) -> f64 {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac).norm() * 0.5
    }

    /// Compute the unit normal by the right-hand rule.
    ///
    /// Returns `None` for degenerate (zero-area) triangles.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let n = ab.cross(&ac);
        let len = n.norm();
        if len < 1e-12 {
            None
        } else {
            Some(n / len)
        }
    }

    /// Compute the centroid (average of the three vertices).
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Signed volume of the tetrahedron spanned by this triangle and the origin.
    ///
    /// `a · (b × c) / 6`. Positive when the triangle's outward normal faces
    /// away from the origin. Summed over a closed mesh this yields the
    /// enclosed volume by the divergence theorem.
    #[must_use]
    pub fn signed_origin_volume(&self) -> f64 {
        self.a.coords.dot(&self.b.coords.cross(&self.c.coords)) / 6.0
    }
}
