//! Graham-scan convex hull in 2D.
//!
//! Purpose
//! - Compute the counter-clockwise hull of a finite point set, starting at the
//!   lowest-then-leftmost point, with collinear boundary points excluded.
//!
//! Phases
//! 1. Anchor: minimum y, ties by minimum x.
//! 2. Angular sort around the anchor (`atan2`), then collapse points that are
//!    collinear with the anchor down to the farthest one.
//! 3. Stack scan that pops every non counter-clockwise turn.
//!
//! The engine is a pure function (`compute_hull`). `ConvexHull` is a small
//! holder that caches the last result and drops it whenever its points change.

mod predicates;
mod scan;
mod state;
mod types;

use std::collections::HashMap;

pub use predicates::{distance, orientation};
pub use scan::{anchor, collapse_collinear, scan, sort_by_polar_angle};
pub use state::ConvexHull;
pub use types::{HullError, Orientation, Point};

/// Convex hull of `points` in counter-clockwise order, starting at the anchor.
///
/// - `EmptyInput` for an empty slice; `MalformedInput` for non-finite coordinates.
/// - Fewer than three points are returned unchanged.
/// - All-collinear inputs collapse to the two extreme points.
/// - Any finite coordinate range is accepted: the phases run on a copy rescaled by a
///   power of two, and the hull is reported with the caller's original points.
pub fn compute_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::non_finite(index, points[index]));
    }
    if points.len() < 3 {
        return Ok(points.to_vec());
    }

    let s = unit_scale(points);
    if s == 1.0 {
        return Ok(graham(points));
    }
    let scaled: Vec<Point> = points.iter().map(|p| p * s).collect();
    // first original per scaled value; equal keys only arise from underflow
    let mut originals: HashMap<(u64, u64), Point> = HashMap::with_capacity(points.len());
    for (q, p) in scaled.iter().zip(points) {
        originals.entry(key(q)).or_insert(*p);
    }
    Ok(graham(&scaled)
        .iter()
        .map(|q| originals.get(&key(q)).copied().unwrap_or(*q / s))
        .collect())
}

/// Phases 1-3 on finite points with at least three entries.
fn graham(points: &[Point]) -> Vec<Point> {
    let Some(a) = anchor(points) else {
        return Vec::new();
    };
    let mut sorted = sort_by_polar_angle(points, a);
    collapse_collinear(&mut sorted, a);
    if sorted.len() < 3 {
        tracing::debug!(n = points.len(), "degenerate hull (collinear input)");
        return sorted;
    }
    let hull = scan(&sorted);
    tracing::debug!(n = points.len(), hull = hull.len(), "hull computed");
    hull
}

#[inline]
fn key(p: &Point) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

/// Power of two that brings the largest |coordinate| into `[1, 2)`.
///
/// Cross products then stay far from overflow and underflow, and the scaling is
/// exact for normal numbers, so orientation signs are unchanged.
fn unit_scale(points: &[Point]) -> f64 {
    let m = points
        .iter()
        .fold(0.0f64, |m, p| m.max(p.x.abs()).max(p.y.abs()));
    if m == 0.0 {
        return 1.0;
    }
    let e = (m.log2().floor() as i32).clamp(-1022, 1022);
    pow2(-e)
}

/// `2^k` built from its bit pattern, `k` in `[-1022, 1023]` (normal range).
#[inline]
fn pow2(k: i32) -> f64 {
    f64::from_bits(((1023 + k) as u64) << 52)
}
