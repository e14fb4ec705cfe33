//! Hull-level configuration building on the shared `config` crate.
//!
//! Wraps the workspace [`Tolerance`] with the switches the hull pipeline
//! needs, so call sites never reach for a bare epsilon literal.

use crate::error::HullResult;
use config::constants::Tolerance;

/// Hull pipeline configuration.
///
/// # Examples
/// ```
/// use polyhull::HullConfig;
/// let cfg = HullConfig::default();
/// assert!(cfg.tolerance.geometry > 0.0);
/// assert!(!cfg.merge_coplanar);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfig {
    /// Tolerances threaded through every comparison.
    pub tolerance: Tolerance,
    /// Run the coplanar merge pass over the final faces.
    pub merge_coplanar: bool,
    /// Fan enumeration and face reconstruction out across rayon workers
    /// once the input reaches `PARALLEL_THRESHOLD` points.
    pub parallel: bool,
}

impl HullConfig {
    /// Creates a configuration from explicit tolerances.
    ///
    /// # Examples
    /// ```
    /// use polyhull::HullConfig;
    /// let cfg = HullConfig::new(1.0e-12, 1.0e-8).unwrap();
    /// assert_eq!(cfg.tolerance.point, 1.0e-12);
    /// assert!(HullConfig::new(-1.0, 1.0e-8).is_err());
    /// ```
    pub fn new(point_eps: f64, geometry_eps: f64) -> HullResult<Self> {
        Ok(Self {
            tolerance: Tolerance::new(point_eps, geometry_eps)?,
            ..Self::default()
        })
    }

    /// Enables or disables the final coplanar merge pass.
    pub fn with_merge_coplanar(mut self, merge_coplanar: bool) -> Self {
        self.merge_coplanar = merge_coplanar;
        self
    }

    /// Enables or disables parallel passes.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            merge_coplanar: false,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests;
