//! Point alias, turn orientation, and the engine's error type.

use nalgebra::Vector2;
use std::fmt;

/// A planar point `(x, y)`.
pub type Point = Vector2<f64>;

/// Turn direction of an ordered triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Errors surfaced by the hull engine.
#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// No points supplied; a hull is undefined.
    EmptyInput,
    /// A point cannot enter the arithmetic (NaN or infinite coordinate).
    MalformedInput { index: usize, reason: String },
}

impl HullError {
    pub(crate) fn non_finite(index: usize, p: Point) -> Self {
        Self::MalformedInput {
            index,
            reason: format!("non-finite coordinate ({}, {})", p.x, p.y),
        }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyInput => write!(f, "no points available; add points first"),
            HullError::MalformedInput { index, reason } => {
                write!(f, "malformed point at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for HullError {}
