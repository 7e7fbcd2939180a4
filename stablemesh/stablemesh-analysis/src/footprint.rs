//! Support footprint extraction.
//!
//! Selects the vertices resting on the ground (the lowest-Z band of the
//! mesh) and forms their 2D convex hull: the polygon the body actually
//! stands on. The center of mass must project inside this polygon for
//! the body to balance.

use nalgebra::{Point2, Point3};
use stablemesh_types::{MeshBounds, PolyMesh};

use crate::config::StabilityConfig;
use crate::error::{AnalysisError, AnalysisResult};

/// The convex polygon a mesh stands on.
///
/// Points are in the mesh's XY plane at height [`SupportHull::z`], ordered
/// counter-clockwise. Construction guarantees at least 3 points and a
/// strictly convex boundary (collinear points are dropped).
///
/// Derived from mesh geometry; recompute after any geometry edit.
#[derive(Debug, Clone)]
pub struct SupportHull {
    /// Hull vertices in counter-clockwise order.
    pub points: Vec<Point2<f64>>,

    /// Height of the ground plane (the mesh's minimum Z).
    pub z: f64,
}

impl SupportHull {
    /// Vertex-average centroid of the hull polygon.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // hull point counts are tiny
    pub fn centroid(&self) -> Point2<f64> {
        let sum = self
            .points
            .iter()
            .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords);
        Point2::from(sum / self.points.len() as f64)
    }

    /// Largest distance from the centroid to any hull vertex.
    #[must_use]
    pub fn max_radius(&self) -> f64 {
        let center = self.centroid();
        self.points
            .iter()
            .map(|p| (p - center).norm())
            .fold(0.0, f64::max)
    }

    /// Area of the hull polygon (shoelace formula).
    #[must_use]
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        let mut twice_area = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            twice_area += a.x * b.y - b.x * a.y;
        }
        twice_area.abs() * 0.5
    }

    /// Check whether a point lies inside or on the hull boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// Signed planar distance from a point to the hull boundary.
    ///
    /// Positive when the point is inside the hull, negative outside;
    /// the magnitude is the distance to the nearest edge. A point on the
    /// boundary has distance zero.
    ///
    /// # Example
    ///
    /// ```
    /// use nalgebra::Point2;
    /// use stablemesh_analysis::SupportHull;
    ///
    /// let square = SupportHull {
    ///     points: vec![
    ///         Point2::new(0.0, 0.0),
    ///         Point2::new(1.0, 0.0),
    ///         Point2::new(1.0, 1.0),
    ///         Point2::new(0.0, 1.0),
    ///     ],
    ///     z: 0.0,
    /// };
    ///
    /// assert!((square.signed_distance(&Point2::new(0.5, 0.5)) - 0.5).abs() < 1e-12);
    /// assert!((square.signed_distance(&Point2::new(2.0, 0.5)) + 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn signed_distance(&self, point: &Point2<f64>) -> f64 {
        let n = self.points.len();
        let mut min_distance = f64::INFINITY;
        let mut inside = true;

        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];

            // For a CCW polygon the interior is to the left of every edge.
            let edge = b - a;
            let to_point = point - a;
            if edge.x * to_point.y - edge.y * to_point.x < 0.0 {
                inside = false;
            }

            min_distance = min_distance.min(point_segment_distance(point, &a, &b));
        }

        if inside {
            min_distance
        } else {
            -min_distance
        }
    }
}

/// Extract the support hull of a mesh.
///
/// Vertices whose Z lies within the ground band above the mesh's minimum Z
/// are projected to XY and their convex hull computed with the monotone
/// chain algorithm. The band height comes from
/// [`StabilityConfig::base_band`].
///
/// # Errors
///
/// Returns [`AnalysisError::DegenerateFootprint`] when fewer than 3
/// distinct points rest on the ground, or all of them are collinear.
/// Returns [`AnalysisError::InvalidMesh`] for a mesh with no vertices.
///
/// # Example
///
/// ```
/// use stablemesh_types::unit_cube;
/// use stablemesh_analysis::{support_hull, StabilityConfig};
///
/// let hull = support_hull(&unit_cube(), &StabilityConfig::default()).unwrap();
/// assert_eq!(hull.points.len(), 4); // the four base corners
/// assert_eq!(hull.z, 0.0);
/// ```
pub fn support_hull(mesh: &PolyMesh, config: &StabilityConfig) -> AnalysisResult<SupportHull> {
    if mesh.vertices.is_empty() {
        return Err(AnalysisError::invalid_mesh("mesh has no vertices"));
    }

    let bounds = mesh.bounds();
    let min_z = bounds.min.z;
    let band = config.base_band(bounds.size().z);

    let mut ground: Vec<Point2<f64>> = mesh
        .vertices
        .iter()
        .filter(|v| v.position.z - min_z < band)
        .map(|v| Point2::new(v.position.x, v.position.y))
        .collect();

    ground.sort_unstable_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    ground.dedup_by(|a, b| a.x == b.x && a.y == b.y);

    if ground.len() < 3 {
        return Err(AnalysisError::degenerate_footprint(format!(
            "{} distinct ground point(s), need at least 3",
            ground.len()
        )));
    }

    let points = monotone_chain(&ground);
    if points.len() < 3 {
        return Err(AnalysisError::degenerate_footprint(
            "ground points are collinear",
        ));
    }

    Ok(SupportHull { points, z: min_z })
}

/// Project a 3D point into the hull's XY plane.
#[must_use]
pub fn project_xy(point: &Point3<f64>) -> Point2<f64> {
    Point2::new(point.x, point.y)
}

/// Andrew's monotone chain convex hull.
///
/// Input must be sorted lexicographically by (x, y) with exact duplicates
/// removed. Output is in counter-clockwise order with collinear boundary
/// points excluded.
fn monotone_chain(sorted: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let n = sorted.len();
    let mut hull: Vec<Point2<f64>> = Vec::with_capacity(2 * n);

    // Lower hull
    for &p in sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    // Upper hull
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }

    hull.pop(); // last point repeats the first
    hull
}

/// Z-component of the cross product (a - o) x (b - o).
///
/// Positive for a left (counter-clockwise) turn.
fn cross(o: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Distance from a point to a line segment.
fn point_segment_distance(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.norm_squared();
    if len_sq < 1e-24 {
        return ap.norm();
    }
    let t = (ap.dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}
