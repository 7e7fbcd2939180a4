//! Color ramp for the tipping heatmap.
//!
//! Three bands: anchored (deep blue), warning (blend toward orange),
//! and falling (orange to hot red).

use stablemesh_types::VertexColor;

/// Factors below this read as fully anchored.
const ANCHORED_MAX: f64 = 0.15;

/// Factors below this blend from anchored blue toward warm orange;
/// above it they blend from orange to red.
const WARNING_MAX: f64 = 0.6;

/// Map a tipping factor in [0, 1] to a heatmap color.
///
/// Out-of-range input is clamped.
///
/// # Example
///
/// ```
/// use stablemesh_heatmap::ramp_color;
///
/// let anchored = ramp_color(0.0);
/// let falling = ramp_color(1.0);
///
/// assert!(anchored.b > anchored.r);
/// assert_eq!(falling.r, 255);
/// assert_eq!(falling.b, 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)] // factor is clamped to [0, 1]
pub fn ramp_color(factor: f64) -> VertexColor {
    let factor = factor.clamp(0.0, 1.0);

    if factor < ANCHORED_MAX {
        // Deep anchored blue.
        VertexColor::from_float(0.05, 0.1, 0.3)
    } else if factor < WARNING_MAX {
        // Blend from blue toward warm orange.
        let t = ((factor - ANCHORED_MAX) / (WARNING_MAX - ANCHORED_MAX)) as f32;
        VertexColor::from_float(0.8 * t, 0.2 * t, 0.3 - 0.2 * t)
    } else {
        // Orange to hot red.
        let t = ((factor - WARNING_MAX) / (1.0 - WARNING_MAX)) as f32;
        VertexColor::from_float(1.0, 0.8 - 0.8 * t, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_band() {
        let c = ramp_color(0.0);
        assert_eq!(c, ramp_color(0.1)); // constant within the band
        assert!(c.b > c.r);
    }

    #[test]
    fn test_hot_end_is_red() {
        let c = ramp_color(1.0);
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 0);
    }

    #[test]
    fn test_red_increases_through_warning_band() {
        let cooler = ramp_color(0.2);
        let warmer = ramp_color(0.5);
        assert!(warmer.r > cooler.r);
        assert!(warmer.b < cooler.b);
    }

    #[test]
    fn test_out_of_range_clamped() {
        assert_eq!(ramp_color(-1.0), ramp_color(0.0));
        assert_eq!(ramp_color(2.0), ramp_color(1.0));
    }
}
