use super::predicates::{distance, orientation};
use super::types::{Orientation, Point};

/// Lowest point, leftmost among ties. `None` for an empty slice.
pub fn anchor(points: &[Point]) -> Option<Point> {
    points.iter().copied().reduce(|best, p| {
        if p.y < best.y || (p.y == best.y && p.x < best.x) {
            p
        } else {
            best
        }
    })
}

#[inline]
fn polar_angle(p: Point, anchor: Point) -> f64 {
    // compare by value first: atan2(0, 0) must not decide the anchor's slot
    if p == anchor {
        return f64::NEG_INFINITY;
    }
    (p.y - anchor.y).atan2(p.x - anchor.x)
}

/// Copy of `points` ordered by polar angle around `anchor` (stable).
///
/// Points equal to the anchor come first.
pub fn sort_by_polar_angle(points: &[Point], anchor: Point) -> Vec<Point> {
    let mut keyed: Vec<(f64, Point)> = points
        .iter()
        .map(|&p| (polar_angle(p, anchor), p))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Keep only the farthest point of each run collinear with the anchor.
///
/// `sorted[0]` is the anchor. Each point is compared with the last kept one; on
/// a collinear pair the nearer is dropped, so a chain of k points on one ray
/// shrinks to its farthest member. Equal distances keep the earlier point.
/// Single pass, compacting in place.
pub fn collapse_collinear(sorted: &mut Vec<Point>, anchor: Point) {
    if sorted.len() < 3 {
        return;
    }
    let mut w = 1usize;
    for r in 2..sorted.len() {
        let (kept, next) = (sorted[w], sorted[r]);
        if orientation(anchor, kept, next) == Orientation::Collinear {
            if distance(anchor, kept) < distance(anchor, next) {
                sorted[w] = next;
            }
        } else {
            w += 1;
            sorted[w] = next;
        }
    }
    sorted.truncate(w + 1);
}

/// Stack scan over angle-sorted, collapsed points; keeps strict left turns only.
pub fn scan(sorted: &[Point]) -> Vec<Point> {
    if sorted.len() < 3 {
        return sorted.to_vec();
    }
    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len());
    hull.push(sorted[0]);
    hull.push(sorted[1]);
    for &p in &sorted[2..] {
        while hull.len() >= 2
            && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p)
                != Orientation::CounterClockwise
        {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}
