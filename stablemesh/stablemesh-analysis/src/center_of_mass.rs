//! Volumetric center of mass.
//!
//! Treats the mesh as a uniform-density solid: each fan triangle of each
//! face spans a signed tetrahedron with the origin, and the volume-weighted
//! sum of tetrahedron centroids converges to the true solid center.
//! This differs from both the bounding-box center and the vertex average,
//! which ignore how the volume is distributed.

use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};
use stablemesh_types::{MeshBounds, MeshTopology, PolyMesh};

use crate::config::StabilityConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::validate::validate_mesh;

/// Compute the signed enclosed volume of a mesh.
///
/// Positive for consistent outward-facing (CCW) winding, negative for an
/// inside-out mesh. Only meaningful for watertight meshes.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidMesh`] for malformed face data.
///
/// # Example
///
/// ```
/// use stablemesh_types::unit_cube;
/// use stablemesh_analysis::signed_volume;
///
/// let vol = signed_volume(&unit_cube()).unwrap();
/// assert!((vol - 1.0).abs() < 1e-10);
/// ```
pub fn signed_volume(mesh: &PolyMesh) -> AnalysisResult<f64> {
    validate_mesh(mesh)?;
    Ok(mesh.triangles().map(|t| t.signed_origin_volume()).sum())
}

/// Compute the volumetric center of mass of a closed manifold mesh.
///
/// # Errors
///
/// - [`AnalysisError::InvalidMesh`] for malformed face data.
/// - [`AnalysisError::DegenerateVolume`] when the mesh is not watertight
///   (open or non-manifold edges) or encloses no measurable volume.
///
/// # Example
///
/// ```
/// use stablemesh_types::unit_cube;
/// use stablemesh_analysis::{center_of_mass, StabilityConfig};
///
/// let com = center_of_mass(&unit_cube(), &StabilityConfig::default()).unwrap();
/// assert!((com - nalgebra::Point3::new(0.5, 0.5, 0.5)).norm() < 1e-10);
/// ```
pub fn center_of_mass(mesh: &PolyMesh, config: &StabilityConfig) -> AnalysisResult<Point3<f64>> {
    validate_mesh(mesh)?;
    check_watertight(mesh)?;

    let mut weighted = Vector3::zeros();
    let mut total_volume = 0.0;

    for triangle in mesh.triangles() {
        let volume = triangle.signed_origin_volume();
        // Centroid of the tetrahedron (origin, a, b, c).
        let centroid = (triangle.a.coords + triangle.b.coords + triangle.c.coords) / 4.0;
        weighted += centroid * volume;
        total_volume += volume;
    }

    let epsilon = config.volume_epsilon(mesh.bounds().volume());
    if total_volume.abs() <= epsilon {
        return Err(AnalysisError::degenerate_volume(format!(
            "enclosed volume {total_volume:.3e} is below threshold {epsilon:.3e}"
        )));
    }

    // Dividing signed by signed keeps the center correct even for a
    // consistently inverted mesh.
    Ok(Point3::from(weighted / total_volume))
}

/// Check that every undirected edge is shared by exactly two faces.
///
/// Open edges mean the shell does not enclose a volume; edges used more
/// than twice mean non-manifold geometry. Either way the tetrahedron
/// decomposition is not a valid solid.
fn check_watertight(mesh: &PolyMesh) -> AnalysisResult<()> {
    let mut edge_count: HashMap<(u32, u32), u32> = HashMap::new();

    for face in mesh.faces() {
        let n = face.len();
        for i in 0..n {
            let a = face[i];
            let b = face[(i + 1) % n];
            let edge = (a.min(b), a.max(b));
            *edge_count.entry(edge).or_insert(0) += 1;
        }
    }

    let open = edge_count.values().filter(|&&c| c == 1).count();
    let non_manifold = edge_count.values().filter(|&&c| c > 2).count();

    if open > 0 || non_manifold > 0 {
        return Err(AnalysisError::degenerate_volume(format!(
            "mesh is not watertight: {open} open edge(s), {non_manifold} non-manifold edge(s)"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stablemesh_types::{unit_cube, Vertex};

    #[test]
    fn test_unit_cube_center() {
        let com = center_of_mass(&unit_cube(), &StabilityConfig::default()).unwrap();
        assert_relative_eq!(com.x, 0.5, epsilon = 1e-10);
        assert_relative_eq!(com.y, 0.5, epsilon = 1e-10);
        assert_relative_eq!(com.z, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_centered_cube_center_is_origin() {
        let mut cube = unit_cube();
        cube.translate(Vector3::new(-0.5, -0.5, -0.5));
        let com = center_of_mass(&cube, &StabilityConfig::default()).unwrap();
        assert!(com.coords.norm() < 1e-10);
    }

    #[test]
    fn test_translation_invariance() {
        let config = StabilityConfig::default();
        let base = center_of_mass(&unit_cube(), &config).unwrap();

        let offset = Vector3::new(17.0, -42.5, 3.25);
        let mut moved = unit_cube();
        moved.translate(offset);
        let com = center_of_mass(&moved, &config).unwrap();

        assert_relative_eq!(com.x, base.x + offset.x, epsilon = 1e-9);
        assert_relative_eq!(com.y, base.y + offset.y, epsilon = 1e-9);
        assert_relative_eq!(com.z, base.z + offset.z, epsilon = 1e-9);
    }

    #[test]
    fn test_inverted_winding_same_center() {
        let mut inverted = unit_cube();
        for face in &mut inverted.faces {
            face.reverse();
        }
        let config = StabilityConfig::default();

        let vol = signed_volume(&inverted).unwrap();
        assert!(vol < 0.0, "inverted mesh should have negative volume");

        let com = center_of_mass(&inverted, &config).unwrap();
        assert_relative_eq!(com.x, 0.5, epsilon = 1e-10);
        assert_relative_eq!(com.z, 0.5, epsilon = 1e-10);
    }

    #[test]
    fn test_open_shell_degenerate() {
        let mut open = unit_cube();
        open.faces.remove(1); // take the lid off
        let result = center_of_mass(&open, &StabilityConfig::default());
        assert!(matches!(result, Err(AnalysisError::DegenerateVolume(_))));
    }

    #[test]
    fn test_zero_volume_pillow_degenerate() {
        // Two coincident triangles back to back: watertight but flat.
        let vertices = vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
        ];
        let faces = vec![vec![0, 1, 2], vec![0, 2, 1]];
        let mesh = PolyMesh::from_parts(vertices, faces);

        let result = center_of_mass(&mesh, &StabilityConfig::default());
        assert!(matches!(result, Err(AnalysisError::DegenerateVolume(_))));
    }

    #[test]
    fn test_invalid_face_reference() {
        let mut mesh = unit_cube();
        mesh.faces.push(vec![0, 1, 99]);
        let result = center_of_mass(&mesh, &StabilityConfig::default());
        assert!(matches!(result, Err(AnalysisError::InvalidMesh(_))));
    }

    #[test]
    fn test_asymmetric_solid_center_shifts() {
        // Stack a wide slab under a tall thin column; the center of mass
        // must sit below the half-height mark (volume concentrates low).
        let mut slab = unit_cube(); // 1x1x1 at origin
        let mut column = unit_cube();
        column.scale(0.2); // 0.2^3 cube
        column.translate(Vector3::new(0.4, 0.4, 1.0)); // sits on the slab

        // Merge into one mesh (indices offset by slab vertex count).
        let offset = u32::try_from(slab.vertices.len()).unwrap();
        slab.vertices.extend(column.vertices.iter().cloned());
        for face in &column.faces {
            slab.faces.push(face.iter().map(|&i| i + offset).collect());
        }

        let vol = signed_volume(&slab).unwrap();
        assert_relative_eq!(vol, 1.0 + 0.008, epsilon = 1e-10);

        let com = center_of_mass(&slab, &StabilityConfig::default()).unwrap();
        // Column volume is 0.8% of the slab's: barely lifts the center.
        assert!(com.z > 0.5 && com.z < 0.51, "com.z = {}", com.z);
        assert_relative_eq!(com.x, 0.5, epsilon = 1e-3);
    }
}
