//! Fixed point sets: the fallback default and the 20-point example data.

use crate::hull::Point;

/// Fallback input used when no data file is available.
pub fn default_points() -> Vec<Point> {
    from_pairs(&[
        (0.0, 3.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (4.0, 4.0),
        (0.0, 0.0),
        (1.0, 2.0),
        (3.0, 1.0),
        (3.0, 3.0),
    ])
}

/// Example data offered for download: 20 points, 7 of them on the hull.
pub fn example_points() -> Vec<Point> {
    from_pairs(&[
        (2.0, 2.0),
        (4.0, 3.0),
        (5.0, 1.0),
        (6.0, 4.0),
        (7.0, 5.0),
        (3.0, 6.0),
        (1.0, 7.0),
        (0.0, 5.0),
        (1.0, 3.0),
        (2.0, 4.0),
        (3.0, 3.0),
        (4.0, 5.0),
        (5.0, 3.0),
        (3.0, 2.0),
        (2.0, 1.0),
        (4.0, 1.0),
        (6.0, 2.0),
        (5.0, 5.0),
        (4.0, 7.0),
        (2.0, 6.0),
    ])
}

fn from_pairs(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
