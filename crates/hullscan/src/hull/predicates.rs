use super::types::{Orientation, Point};

/// Orientation of `(p, q, r)` from the cross product `(q - p) × (r - q)`.
///
/// Sign convention: `> 0` is clockwise, `< 0` counter-clockwise, exact zero collinear.
/// Coordinates must keep the products finite; `compute_hull` rescales its input first.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Euclidean distance.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
