use super::types::{HullError, Point};

/// Point set with a cached hull.
///
/// Mutators only invalidate the cache; `compute_hull` is always the source of truth.
#[derive(Clone, Debug, Default)]
pub struct ConvexHull {
    points: Vec<Point>,
    hull: Option<Vec<Point>>,
}

impl ConvexHull {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, hull: None }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Last computed hull, if still valid for the current points.
    #[inline]
    pub fn hull(&self) -> Option<&[Point]> {
        self.hull.as_deref()
    }

    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
        self.hull = None;
    }

    pub fn add_points<I: IntoIterator<Item = Point>>(&mut self, new_points: I) {
        self.points.extend(new_points);
        self.hull = None;
    }

    /// Compute (or reuse) the hull of the current points.
    pub fn compute_hull(&mut self) -> Result<&[Point], HullError> {
        if self.hull.is_none() {
            self.hull = Some(super::compute_hull(&self.points)?);
        }
        Ok(self.hull.as_deref().unwrap_or(&[]))
    }
}
