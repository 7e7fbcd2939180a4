//! Indexed polygonal mesh.

use crate::{Aabb, MeshBounds, MeshTopology, Triangle, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygonal face: an ordered list of vertex indices, at least 3.
///
/// Faces are assumed planar, with counter-clockwise winding when viewed
/// from outside the mesh.
pub type Face = Vec<u32>;

/// An indexed polygonal mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices
/// by index. Faces may be arbitrary n-gons (n >= 3); geometric queries
/// fan-triangulate them on the fly.
///
/// The mesh is owned by the caller and read-only to the analyzer.
///
/// # Example
///
/// ```
/// use stablemesh_types::{PolyMesh, Vertex, MeshTopology};
///
/// let mut mesh = PolyMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push(vec![0, 1, 2, 3]); // one quad
///
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangles().count(), 2); // fan-triangulated
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Polygonal faces as indices into the vertex array.
    pub faces: Vec<Face>,
}

impl PolyMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use stablemesh_types::{PolyMesh, Vertex, MeshTopology};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = PolyMesh::from_parts(vertices, vec![vec![0, 1, 2]]);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Translate the mesh by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Scale the mesh uniformly around the origin.
    pub fn scale(&mut self, factor: f64) {
        for vertex in &mut self.vertices {
            vertex.position.coords *= factor;
        }
    }

    /// Clear all vertex colors.
    pub fn clear_colors(&mut self) {
        for vertex in &mut self.vertices {
            vertex.attributes.color = None;
        }
    }

    /// Fan-triangulate a single face into resolved triangles.
    ///
    /// A face `[v0, v1, ..., vn]` yields triangles `(v0, vi, vi+1)`.
    /// Faces with fewer than 3 indices yield nothing; out-of-range
    /// indices are skipped.
    pub fn triangle_fan(&self, face: &[u32]) -> impl Iterator<Item = Triangle> + '_ {
        let face = face.to_vec();
        (1..face.len().saturating_sub(1)).filter_map(move |i| {
            let a = self.vertices.get(face[0] as usize)?;
            let b = self.vertices.get(face[i] as usize)?;
            let c = self.vertices.get(face[i + 1] as usize)?;
            Some(Triangle::new(a.position, b.position, c.position))
        })
    }
}

impl MeshTopology for PolyMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<&[u32]> {
        self.faces.get(index).map(Vec::as_slice)
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn faces(&self) -> impl Iterator<Item = &[u32]> {
        self.faces.iter().map(Vec::as_slice)
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        self.faces.iter().flat_map(|face| self.triangle_fan(face))
    }
}

impl MeshBounds for PolyMesh {
    fn bounds(&self) -> Aabb {
        if self.vertices.is_empty() {
            return Aabb::empty();
        }
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

/// Helper function to create a unit cube mesh.
///
/// Creates a cube from (0,0,0) to (1,1,1) as six quad faces with
/// outward-facing (CCW) winding.
///
/// # Example
///
/// ```
/// use stablemesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 6);
/// ```
#[must_use]
pub fn unit_cube() -> PolyMesh {
    let mut mesh = PolyMesh::with_capacity(8, 6);

    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0)); // 0
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0)); // 1
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0)); // 2
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0)); // 3
    mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 1.0)); // 4
    mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 1.0)); // 5
    mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0)); // 6
    mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 1.0)); // 7

    mesh.faces.push(vec![0, 3, 2, 1]); // bottom (z=0), normal -Z
    mesh.faces.push(vec![4, 5, 6, 7]); // top (z=1), normal +Z
    mesh.faces.push(vec![0, 1, 5, 4]); // front (y=0), normal -Y
    mesh.faces.push(vec![2, 3, 7, 6]); // back (y=1), normal +Y
    mesh.faces.push(vec![0, 4, 7, 3]); // left (x=0), normal -X
    mesh.faces.push(vec![1, 2, 6, 5]); // right (x=1), normal +X

    mesh
}
