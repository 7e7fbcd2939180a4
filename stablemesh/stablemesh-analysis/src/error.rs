//! Error types for stability analysis.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur during stability analysis.
///
/// These are deterministic geometric failures, not transient faults:
/// the same mesh always fails the same way, so there is nothing to retry.
/// The host application decides user-visible behavior.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The support footprint cannot be formed (fewer than 3 distinct
    /// ground points, or all ground points collinear).
    #[error("degenerate footprint: {0}")]
    DegenerateFootprint(String),

    /// The mesh encloses no measurable volume, or is open/non-manifold.
    #[error("degenerate volume: {0}")]
    DegenerateVolume(String),

    /// Malformed face or vertex references.
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
}

impl AnalysisError {
    /// Create a degenerate footprint error.
    #[must_use]
    pub fn degenerate_footprint(details: impl Into<String>) -> Self {
        Self::DegenerateFootprint(details.into())
    }

    /// Create a degenerate volume error.
    #[must_use]
    pub fn degenerate_volume(details: impl Into<String>) -> Self {
        Self::DegenerateVolume(details.into())
    }

    /// Create an invalid mesh error.
    #[must_use]
    pub fn invalid_mesh(details: impl Into<String>) -> Self {
        Self::InvalidMesh(details.into())
    }
}
