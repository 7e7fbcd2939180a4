//! Structural mesh validation.
//!
//! Catches malformed index data before the geometric stages run, so the
//! analyzer never panics on a bad face and errors carry the offending
//! face index.

use stablemesh_types::{MeshTopology, PolyMesh};

use crate::error::{AnalysisError, AnalysisResult};

/// Validate a mesh's structure for analysis.
///
/// Checks that the mesh has vertices and faces, that every face has at
/// least 3 indices, and that every index references an existing vertex.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidMesh`] describing the first problem found.
///
/// # Example
///
/// ```
/// use stablemesh_types::unit_cube;
/// use stablemesh_analysis::validate_mesh;
///
/// assert!(validate_mesh(&unit_cube()).is_ok());
/// ```
pub fn validate_mesh(mesh: &PolyMesh) -> AnalysisResult<()> {
    if mesh.vertices.is_empty() {
        return Err(AnalysisError::invalid_mesh("mesh has no vertices"));
    }
    if mesh.faces.is_empty() {
        return Err(AnalysisError::invalid_mesh("mesh has no faces"));
    }

    let vertex_count = mesh.vertex_count();
    for (face_index, face) in mesh.faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(AnalysisError::invalid_mesh(format!(
                "face {face_index} has {} vertices, need at least 3",
                face.len()
            )));
        }
        for &index in face {
            if index as usize >= vertex_count {
                return Err(AnalysisError::invalid_mesh(format!(
                    "face {face_index} references vertex {index}, mesh has {vertex_count}"
                )));
            }
        }
    }

    Ok(())
}
