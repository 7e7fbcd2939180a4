//! Core geometry types for StableMesh.
//!
//! This crate provides the foundational types for stability analysis:
//!
//! - [`Vertex`] - A point in 3D space with optional attributes
//! - [`PolyMesh`] - A polygonal mesh with indexed vertices
//! - [`Triangle`] - A concrete triangle with resolved positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Host independence
//!
//! These types carry no dependency on any host 3D tool. A host supplies a
//! [`PolyMesh`] (vertex list + face index lists) and consumes analysis results;
//! the mesh is index-based rather than pointer-linked, so there are no
//! ownership cycles to manage.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system** with Z up. Gravity acts along -Z,
//! so "the ground" is the plane of a mesh's minimum Z.
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//! Normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use stablemesh_types::{PolyMesh, Vertex, MeshTopology};
//!
//! let mut mesh = PolyMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
//! mesh.faces.push(vec![0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod traits;
mod triangle;
mod vertex;

// Re-export core types
pub use bounds::Aabb;
pub use mesh::{unit_cube, Face, PolyMesh};
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;
pub use vertex::{Vertex, VertexAttributes, VertexColor};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
