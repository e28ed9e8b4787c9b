//! Planar convex hulls via Graham scan.
//!
//! Layout
//! - `hull`: the engine (`compute_hull`), its predicates, and the cached `ConvexHull` holder.
//! - `verify`: independent checks of hull post-conditions (convexity, containment, subset).
//! - `cloud`: seeded random point clouds for benches, property tests, and the cli.
//! - `data`: the fixed default and example point sets.
//!
//! Points are `nalgebra::Vector2<f64>`; see `hull::Point`.

pub mod cloud;
pub mod data;
pub mod hull;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{compute_hull, ConvexHull, HullError, Orientation, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::data::{default_points, example_points};
    pub use crate::hull::{compute_hull, orientation, ConvexHull, HullError, Orientation, Point};
    pub use crate::verify::{
        contains_all, contains_all_eps, contains_point, contains_point_eps, is_convex_ccw,
        is_subset_of,
    };
    pub use nalgebra::Vector2 as Vec2;
}
