//! Analysis configuration and tolerances.
//!
//! The original addon hard-codes its tolerances; here every constant is an
//! explicit, documented field so hosts can tune them for their unit scale.

/// Configuration for a stability analysis run.
///
/// # Example
///
/// ```
/// use stablemesh_analysis::StabilityConfig;
///
/// let config = StabilityConfig::default().with_mass(2.5);
/// assert!((config.mass - 2.5).abs() < f64::EPSILON);
/// assert!(config.base_band_fraction > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct StabilityConfig {
    /// Fraction of the mesh height treated as the ground band when
    /// extracting the support footprint. A vertex belongs to the footprint
    /// when `z - min_z < max(min_base_band, base_band_fraction * height)`.
    pub base_band_fraction: f64,

    /// Absolute floor for the ground band, in world units. Keeps the band
    /// usable for very flat meshes where the fractional band collapses.
    pub min_base_band: f64,

    /// Relative threshold for volume-zero detection: the accumulated signed
    /// volume is degenerate when `|V| <= relative_volume_epsilon * bbox_volume`.
    pub relative_volume_epsilon: f64,

    /// Absolute floor for volume-zero detection, for meshes whose bounding
    /// box itself has (near-)zero volume.
    pub absolute_volume_epsilon: f64,

    /// Mass of the body in arbitrary units. Uniform density is assumed;
    /// only the torque magnitude scales with this.
    pub mass: f64,

    /// Gravitational acceleration. Standard gravity by default.
    pub gravity: f64,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            // Bottom 1% of mesh height, floored at 1mm-scale units.
            base_band_fraction: 0.01,
            min_base_band: 1e-3,
            relative_volume_epsilon: 1e-9,
            absolute_volume_epsilon: 1e-12,
            mass: 1.0,
            gravity: 9.806_65,
        }
    }
}

impl StabilityConfig {
    /// Set the body mass.
    #[must_use]
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Set the ground band parameters.
    #[must_use]
    pub fn with_base_band(mut self, fraction: f64, floor: f64) -> Self {
        self.base_band_fraction = fraction;
        self.min_base_band = floor;
        self
    }

    /// The ground band height for a mesh of the given total height.
    #[must_use]
    pub fn base_band(&self, mesh_height: f64) -> f64 {
        self.min_base_band.max(self.base_band_fraction * mesh_height)
    }

    /// The volume-zero threshold for a mesh with the given bounding-box volume.
    #[must_use]
    pub fn volume_epsilon(&self, bbox_volume: f64) -> f64 {
        self.absolute_volume_epsilon
            .max(self.relative_volume_epsilon * bbox_volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band_is_one_percent() {
        let config = StabilityConfig::default();
        assert!((config.base_band(10.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_band_floor_for_flat_meshes() {
        let config = StabilityConfig::default();
        assert!((config.base_band(0.0) - 1e-3).abs() < 1e-15);
    }

    #[test]
    fn test_volume_epsilon_scales_with_bbox() {
        let config = StabilityConfig::default();
        assert!((config.volume_epsilon(1.0) - 1e-9).abs() < 1e-15);
        assert!((config.volume_epsilon(0.0) - 1e-12).abs() < 1e-15);
    }
}
