//! JSON point documents: `{"points": [[x, y], ...]}` in, `{"hull_points": [...]}` out.

use anyhow::{bail, Context, Result};
use hullscan::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Input/export document for a point set.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsDoc {
    pub points: Vec<[f64; 2]>,
}

/// Export document for a computed hull.
#[derive(Debug, Serialize, Deserialize)]
pub struct HullDoc {
    pub hull_points: Vec<[f64; 2]>,
}

impl PointsDoc {
    pub fn new(points: &[Point]) -> Self {
        Self {
            points: to_pairs(points),
        }
    }
}

impl HullDoc {
    pub fn new(hull: &[Point]) -> Self {
        Self {
            hull_points: to_pairs(hull),
        }
    }
}

pub fn to_pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn from_pairs(pairs: &[[f64; 2]]) -> Vec<Point> {
    pairs.iter().map(|&[x, y]| Point::new(x, y)).collect()
}

/// Decode a points document. Invalid JSON, a missing `points` key, or a pair
/// without exactly two numbers is an error.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let value: serde_json::Value = serde_json::from_str(text).context("invalid JSON file format")?;
    if value.get("points").is_none() {
        bail!("JSON file must contain a 'points' key");
    }
    let doc: PointsDoc =
        serde_json::from_value(value).context("'points' must be a list of [x, y] pairs")?;
    Ok(from_pairs(&doc.points))
}

pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("loading points from {}", path.display()))
}

pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    write_json(path, &PointsDoc::new(points))
}

pub fn write_hull(path: &Path, hull: &[Point]) -> Result<()> {
    write_json(path, &HullDoc::new(hull))
}

pub fn write_json<T: Serialize>(path: &Path, doc: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
