//! Torque and stability evaluation.
//!
//! The body tips when its center of mass projects outside the support
//! hull: gravity then generates torque about the nearest hull edge with
//! nothing to oppose it. The lever arm is the planar distance from the
//! projected center to the hull boundary.

use nalgebra::Point3;

use crate::config::StabilityConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::footprint::{project_xy, SupportHull};

/// Padding added to the hull radius when normalizing the stability score,
/// so a hull degenerating toward a point cannot divide by zero.
const RADIUS_PADDING: f64 = 0.1;

/// The verdict of a stability evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityResult {
    /// Planar distance from the projected center of mass to the hull
    /// boundary. Positive inside the hull, negative outside.
    pub signed_distance: f64,

    /// Tipping torque magnitude: `|signed_distance| * mass * gravity`.
    /// When stable this is the restoring margin; when unstable, the
    /// uncountered torque pulling the body over.
    pub torque: f64,

    /// True when the center of mass projects inside (or onto) the hull.
    pub is_stable: bool,

    /// Stability margin in [0, 100]: how centered the mass is over the
    /// footprint. 100 = dead center, 0 = at or beyond the boundary.
    pub score: f64,
}

/// Evaluate tipping stability from a center of mass and a support hull.
///
/// Stateless and pure: identical inputs always yield identical output.
///
/// # Errors
///
/// Returns [`AnalysisError::DegenerateFootprint`] if the hull has fewer
/// than 3 points; a verdict is never silently defaulted.
///
/// # Example
///
/// ```
/// use nalgebra::{Point2, Point3};
/// use stablemesh_analysis::{evaluate_stability, StabilityConfig, SupportHull};
///
/// let hull = SupportHull {
///     points: vec![
///         Point2::new(-0.5, -0.5),
///         Point2::new(0.5, -0.5),
///         Point2::new(0.5, 0.5),
///         Point2::new(-0.5, 0.5),
///     ],
///     z: 0.0,
/// };
/// let com = Point3::new(0.0, 0.0, 0.5);
///
/// let result = evaluate_stability(&com, &hull, &StabilityConfig::default()).unwrap();
/// assert!(result.is_stable);
/// assert!((result.signed_distance - 0.5).abs() < 1e-12);
/// ```
pub fn evaluate_stability(
    center_of_mass: &Point3<f64>,
    hull: &SupportHull,
    config: &StabilityConfig,
) -> AnalysisResult<StabilityResult> {
    if hull.points.len() < 3 {
        return Err(AnalysisError::degenerate_footprint(format!(
            "support hull has {} point(s), need at least 3",
            hull.points.len()
        )));
    }

    let projected = project_xy(center_of_mass);
    let signed_distance = hull.signed_distance(&projected);
    let is_stable = signed_distance >= 0.0;
    let torque = signed_distance.abs() * config.mass * config.gravity;

    let score = if is_stable {
        let offset = (projected - hull.centroid()).norm();
        (100.0 * (1.0 - offset / (hull.max_radius() + RADIUS_PADDING))).max(0.0)
    } else {
        0.0
    };

    Ok(StabilityResult {
        signed_distance,
        torque,
        is_stable,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn centered_square_hull() -> SupportHull {
        SupportHull {
            points: vec![
                Point2::new(-0.5, -0.5),
                Point2::new(0.5, -0.5),
                Point2::new(0.5, 0.5),
                Point2::new(-0.5, 0.5),
            ],
            z: 0.0,
        }
    }

    #[test]
    fn test_centered_mass_is_stable() {
        let result = evaluate_stability(
            &Point3::new(0.0, 0.0, 0.5),
            &centered_square_hull(),
            &StabilityConfig::default(),
        )
        .unwrap();

        assert!(result.is_stable);
        assert_relative_eq!(result.signed_distance, 0.5, epsilon = 1e-12);
        assert_relative_eq!(result.torque, 0.5 * 9.806_65, epsilon = 1e-9);
        assert_relative_eq!(result.score, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_offset_mass_is_unstable() {
        let result = evaluate_stability(
            &Point3::new(3.0, 0.0, 0.5),
            &centered_square_hull(),
            &StabilityConfig::default(),
        )
        .unwrap();

        assert!(!result.is_stable);
        assert_relative_eq!(result.signed_distance, -2.5, epsilon = 1e-12);
        assert!((result.score - 0.0).abs() < f64::EPSILON);
        assert!(result.torque > 0.0);
    }

    #[test]
    fn test_torque_scales_with_mass() {
        let hull = centered_square_hull();
        let com = Point3::new(0.0, 0.0, 0.5);

        let light = evaluate_stability(&com, &hull, &StabilityConfig::default()).unwrap();
        let heavy =
            evaluate_stability(&com, &hull, &StabilityConfig::default().with_mass(4.0)).unwrap();

        assert_relative_eq!(heavy.torque, 4.0 * light.torque, epsilon = 1e-9);
    }

    #[test]
    fn test_score_drops_off_center() {
        let hull = centered_square_hull();
        let config = StabilityConfig::default();

        let centered = evaluate_stability(&Point3::new(0.0, 0.0, 1.0), &hull, &config).unwrap();
        let shifted = evaluate_stability(&Point3::new(0.3, 0.0, 1.0), &hull, &config).unwrap();

        assert!(shifted.score < centered.score);
        assert!(shifted.is_stable);
    }

    #[test]
    fn test_degenerate_hull_rejected() {
        let hull = SupportHull {
            points: vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            z: 0.0,
        };
        let result = evaluate_stability(
            &Point3::new(0.0, 0.0, 1.0),
            &hull,
            &StabilityConfig::default(),
        );
        assert!(matches!(result, Err(AnalysisError::DegenerateFootprint(_))));
    }

    #[test]
    fn test_boundary_mass_counts_as_stable() {
        let result = evaluate_stability(
            &Point3::new(0.5, 0.0, 1.0),
            &centered_square_hull(),
            &StabilityConfig::default(),
        )
        .unwrap();

        assert!(result.is_stable);
        assert!(result.signed_distance.abs() < 1e-12);
    }
}
