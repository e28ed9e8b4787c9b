//! Hull post-conditions, checked independently of the scan.
//!
//! - `is_convex_ccw`: every cyclic vertex triple is a strict left turn.
//! - `contains_point[_eps]` / `contains_all[_eps]`: containment in the closed hull.
//! - `is_subset_of`: every hull vertex is an input point (exact equality).
//!
//! Containment uses outward edge normals of the CCW boundary, `n = (e.y, -e.x)/|e|`,
//! i.e. each edge is the half-space `n·(p - a) <= eps`.

use crate::hull::{orientation, Orientation, Point};

/// True if the hull turns strictly counter-clockwise at every vertex (cyclically).
///
/// Hulls with fewer than three vertices are trivially convex.
pub fn is_convex_ccw(hull: &[Point]) -> bool {
    let m = hull.len();
    if m < 3 {
        return true;
    }
    (0..m).all(|k| {
        orientation(hull[k], hull[(k + 1) % m], hull[(k + 2) % m]) == Orientation::CounterClockwise
    })
}

/// Closed containment with slack `eps` (distance units).
///
/// `eps > 0` is permissive (accepts boundary points lost to rounding), `eps = 0` is exact
/// up to the division by the edge length.
pub fn contains_point_eps(hull: &[Point], p: Point, eps: f64) -> bool {
    match hull.len() {
        0 => false,
        1 => (p - hull[0]).norm() <= eps,
        2 => dist_to_segment(p, hull[0], hull[1]) <= eps,
        m => (0..m).all(|k| {
            let a = hull[k];
            let e = hull[(k + 1) % m] - a;
            let norm = e.norm();
            if norm == 0.0 {
                return true;
            }
            let d = p - a;
            (e.y * d.x - e.x * d.y) / norm <= eps
        }),
    }
}

#[inline]
pub fn contains_point(hull: &[Point], p: Point) -> bool {
    contains_point_eps(hull, p, 0.0)
}

pub fn contains_all_eps(hull: &[Point], points: &[Point], eps: f64) -> bool {
    points.iter().all(|&p| contains_point_eps(hull, p, eps))
}

#[inline]
pub fn contains_all(hull: &[Point], points: &[Point]) -> bool {
    contains_all_eps(hull, points, 0.0)
}

/// Every hull vertex occurs in `points` (coordinate equality).
pub fn is_subset_of(hull: &[Point], points: &[Point]) -> bool {
    hull.iter().all(|h| points.iter().any(|p| p == h))
}

fn dist_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}
