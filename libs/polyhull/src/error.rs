//! # Hull Errors
//!
//! Error types for hull construction and polygon operations.
//!
//! Only contract violations surface here. Numeric degeneracies (collinear
//! triples, near-parallel planes, zero-length normals) are filtered where
//! they are detected and never become errors.

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building hulls or editing polygons.
#[derive(Debug, Error)]
pub enum HullError {
    /// An operation needing a plane got a polygon with fewer than 3 vertices.
    #[error("Polygon has {count} points, at least 3 are required")]
    TooFewPoints { count: usize },

    /// A merge was requested for polygons that share no reversed edge.
    #[error("Polygons share no common edge")]
    NoCommonEdge,

    /// The point set cannot span a solid.
    #[error("Degenerate geometry: {message}")]
    Degenerate { message: String },

    /// A triangulator referenced a point that does not exist.
    #[error("Triangulation index {index} out of range for {count} points")]
    InvalidTriangulation { index: usize, count: usize },

    /// Invalid tolerance configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl HullError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HullError::TooFewPoints { count: 2 };
        assert!(err.to_string().contains("2 points"));

        let err = HullError::degenerate("all points are coplanar");
        assert!(err.to_string().contains("coplanar"));

        let err = HullError::InvalidTriangulation { index: 9, count: 4 };
        assert!(err.to_string().contains("9"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: HullError = ConfigError::InvalidTolerance(0.0).into();
        assert!(matches!(err, HullError::InvalidConfig(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HullError>();
    }
}
