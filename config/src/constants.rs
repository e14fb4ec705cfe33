//! # Configuration Constants
//!
//! Centralized constants for the hull kernel. All tolerances, degeneracy
//! thresholds and parallelism cut-offs are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Hull**: Thresholds specific to the face-enumeration pipeline
//! - **Tolerance**: Validated bundle of the two tolerances a hull build uses

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for raw point deduplication.
///
/// Two input points closer than this are treated as the same point. It is
/// deliberately much tighter than [`GEOMETRY_EPSILON`] so that distinct but
/// nearby input points survive deduplication.
///
/// # Example
///
/// ```rust
/// use config::constants::POINT_EPSILON;
///
/// fn same_point(a: [f64; 3], b: [f64; 3]) -> bool {
///     let dx = a[0] - b[0];
///     let dy = a[1] - b[1];
///     let dz = a[2] - b[2];
///     (dx * dx + dy * dy + dz * dz).sqrt() < POINT_EPSILON
/// }
///
/// assert!(same_point([1.0, 2.0, 3.0], [1.0, 2.0, 3.0 + 1e-12]));
/// assert!(!same_point([1.0, 2.0, 3.0], [1.0, 2.0, 3.00001]));
/// ```
pub const POINT_EPSILON: f64 = 1e-10;

/// Tolerance for geometric predicates.
///
/// Used for plane side tests, direction equality, plane equality and
/// polygon equality.
///
/// # Example
///
/// ```rust
/// use config::constants::GEOMETRY_EPSILON;
///
/// let signed_offset: f64 = 1e-8;
/// let on_plane = signed_offset.abs() < GEOMETRY_EPSILON;
/// assert!(on_plane);
/// ```
pub const GEOMETRY_EPSILON: f64 = 1e-6;

/// Length below which a vector is considered too short to normalize.
///
/// Normalizing such a vector returns it unchanged instead of producing
/// NaN or infinite components.
pub const NORMALIZE_EPSILON: f64 = 1e-10;

/// Determinant magnitude below which three planes have no unique
/// intersection point.
///
/// # Example
///
/// ```rust
/// use config::constants::DETERMINANT_EPSILON;
///
/// let det: f64 = 1e-12; // nearly parallel planes
/// assert!(det.abs() < DETERMINANT_EPSILON);
/// ```
pub const DETERMINANT_EPSILON: f64 = 1e-8;

// =============================================================================
// HULL CONSTANTS
// =============================================================================

/// Minimum number of supporting planes a point must touch to stay a hull
/// vertex candidate.
///
/// A vertex of a 3D convex polytope sits where at least three faces meet.
/// Points touching fewer supporting planes are interior to a face, an edge
/// or the solid and are culled.
pub const MIN_SUPPORTING_PLANES: usize = 3;

/// Point count at which hull passes fan out across worker threads.
///
/// Below this the candidate-plane enumeration is small enough that thread
/// dispatch costs more than it saves.
pub const PARALLEL_THRESHOLD: usize = 32;

// =============================================================================
// TOLERANCE
// =============================================================================

/// The pair of tolerances a hull build threads through its comparisons.
///
/// # Examples
/// ```
/// use config::constants::Tolerance;
/// let tolerance = Tolerance::default();
/// assert!(tolerance.point < tolerance.geometry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Tolerance for raw point deduplication.
    pub point: f64,
    /// Tolerance for side tests and direction/plane/polygon equality.
    pub geometry: f64,
}

impl Tolerance {
    /// Builds a tolerance pair, rejecting values that are not finite and
    /// strictly positive.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, Tolerance};
    /// let tolerance = Tolerance::new(1.0e-9, 1.0e-5).expect("valid tolerance");
    /// assert_eq!(tolerance.geometry, 1.0e-5);
    ///
    /// assert_eq!(
    ///     Tolerance::new(0.0, 1.0e-5),
    ///     Err(ConfigError::InvalidTolerance(0.0))
    /// );
    /// ```
    pub fn new(point: f64, geometry: f64) -> Result<Self, ConfigError> {
        for value in [point, geometry] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTolerance(value));
            }
        }
        Ok(Self { point, geometry })
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            point: POINT_EPSILON,
            geometry: GEOMETRY_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be finite and positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
