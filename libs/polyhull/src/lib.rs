//! # Polyhull
//!
//! Convex hulls of 3D point clouds, returned as minimal sets of planar
//! polygonal faces rather than a raw triangulation. Useful wherever exact
//! face boundaries matter: rendering flat-shaded solids, CSG inputs, physics
//! proxies.
//!
//! ## Architecture
//!
//! ```text
//! points → dedupe → candidate planes → orient → dedupe → supporting only
//!        → cull interior points → replan → faces → drop stale → dedupe
//! ```
//!
//! ## Algorithms
//!
//! - **Primary hull**: brute-force supporting-plane enumeration, O(n³)
//!   candidate planes, one polygon per surviving plane
//! - **Triangulated hull**: any [`Triangulator`] (QuickHull built in)
//!   followed by a coplanar face merge
//!
//! ## Tolerances
//!
//! All comparisons use absolute tolerances from [`HullConfig`], tuned for
//! models around unit size. Rescale them with [`HullConfig::new`] for
//! models far from that size.
//!
//! ## Usage
//!
//! ```rust
//! use polyhull::{points_to_convex_hull, Vec3};
//!
//! let faces = points_to_convex_hull(&[
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//!     Vec3::new(0.0, 0.0, 1.0),
//! ]);
//! assert_eq!(faces.len(), 4);
//! ```

pub mod config;
pub mod dedup;
pub mod error;
pub mod hull;
pub mod line;
pub mod mirror;
pub mod plane;
pub mod polygon;
pub mod triangle;
pub mod vec3;

pub use crate::config::HullConfig;
pub use error::{HullError, HullResult};
pub use hull::{
    points_to_convex_hull, points_to_convex_hull_via_triangulation, ConvexHull, QuickHull,
    Triangulator,
};
pub use line::Line;
pub use mirror::Mirror;
pub use plane::{Plane, Side};
pub use polygon::Polygon;
pub use triangle::Triangle;
pub use vec3::{Vec3, Vec3Ext};
