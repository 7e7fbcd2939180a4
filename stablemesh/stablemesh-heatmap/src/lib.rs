//! Per-vertex tipping-torque heatmap.
//!
//! Turns a [`StabilityAnalysis`] into a vertex coloring a host viewport can
//! display directly: vertices anchored over the footprint stay a deep blue,
//! while vertices hanging far outside it — especially high ones, whose
//! leverage is larger — ramp through orange into hot red.
//!
//! The factor for each vertex combines how far its XY projection reaches
//! beyond the footprint radius with a height-based leverage weight, clamped
//! to [0, 1].
//!
//! # Example
//!
//! ```
//! use stablemesh_types::unit_cube;
//! use stablemesh_analysis::analyze;
//! use stablemesh_heatmap::apply_heatmap;
//!
//! let mut cube = unit_cube();
//! let analysis = analyze(&cube).unwrap();
//! apply_heatmap(&mut cube, &analysis);
//!
//! assert!(cube.vertices.iter().all(|v| v.attributes.color.is_some()));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod ramp;

pub use ramp::ramp_color;

use nalgebra::{Point2, Point3};
use stablemesh_analysis::StabilityAnalysis;
use stablemesh_types::PolyMesh;

/// Amplification of the tipping factor with vertex height: a vertex at the
/// top of the mesh has 3.5x the leverage of one at ground level.
const HEIGHT_LEVERAGE: f64 = 2.5;

/// Padding added to the footprint radius when normalizing, so near-point
/// footprints cannot divide by zero.
const RADIUS_PADDING: f64 = 0.1;

/// Padding added to the mesh height, so flat meshes cannot divide by zero.
const HEIGHT_PADDING: f64 = 1e-3;

/// Tipping factor in [0, 1] for a single point of the analyzed mesh.
///
/// 0 means the point sits over the footprint; 1 means it overhangs far
/// beyond it with maximum height leverage.
#[must_use]
pub fn tipping_factor(position: &Point3<f64>, analysis: &StabilityAnalysis) -> f64 {
    let center = analysis.hull.centroid();
    let max_radius = analysis.hull.max_radius();

    let planar = Point2::new(position.x, position.y);
    let overreach = ((planar - center).norm() - max_radius).max(0.0);

    let height_weight = (position.z - analysis.hull.z) / (analysis.height + HEIGHT_PADDING);
    let factor = overreach / (max_radius + RADIUS_PADDING)
        * HEIGHT_LEVERAGE.mul_add(height_weight, 1.0);

    factor.clamp(0.0, 1.0)
}

/// Tipping factors for every vertex of a mesh, in vertex order.
#[must_use]
pub fn tipping_factors(mesh: &PolyMesh, analysis: &StabilityAnalysis) -> Vec<f64> {
    mesh.vertices
        .iter()
        .map(|v| tipping_factor(&v.position, analysis))
        .collect()
}

/// Color every vertex of a mesh by its tipping factor.
///
/// Overwrites any existing vertex colors. The host is expected to switch
/// its viewport to vertex-color shading to display the result.
pub fn apply_heatmap(mesh: &mut PolyMesh, analysis: &StabilityAnalysis) {
    for vertex in &mut mesh.vertices {
        let factor = tipping_factor(&vertex.position, analysis);
        vertex.attributes.color = Some(ramp_color(factor));
    }
}
