//! # Config Crate
//!
//! Centralized tolerances and thresholds for the polyhedral hull kernel.
//! Every epsilon the geometry code compares against is defined here once, so
//! callers can see (and tune) precision without hunting for literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{Tolerance, GEOMETRY_EPSILON, POINT_EPSILON};
//!
//! // Raw point deduplication is much stricter than geometric side tests
//! assert!(POINT_EPSILON < GEOMETRY_EPSILON);
//!
//! // Bundle both into a validated value for the hull pipeline
//! let tolerance = Tolerance::new(1e-10, 1e-6).unwrap();
//! assert_eq!(tolerance.geometry, GEOMETRY_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit Tolerances**: Constants are defaults, never ambient state
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
