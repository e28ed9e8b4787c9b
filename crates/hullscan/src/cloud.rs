//! Seeded random point clouds (disk, box, integer lattice) with replay tokens.
//!
//! Purpose
//! - Reproducible hull inputs for benches, property tests, and `cli random`.
//! - A `(seed, index)` token is mixed into a single RNG, so the k-th cloud of a
//!   run can be regenerated without drawing the first k-1.
//!
//! The lattice shape produces integer coordinates: many duplicates and
//! collinear triples, and exact f64 arithmetic in the orientation test.

use crate::hull::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Region the points are drawn from (uniformly).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    Disk { radius: f64 },
    Box { half_width: f64, half_height: f64 },
    /// Integer points in `[-extent, extent]²`.
    Lattice { extent: i32 },
}

#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    pub center: Point,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: CloudShape::Disk { radius: 1.0 },
            center: Point::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points. Same `(cfg, tok)` always yields the same cloud.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| cfg.center + sample(&cfg.shape, &mut rng))
        .collect()
}

fn sample<R: Rng>(shape: &CloudShape, rng: &mut R) -> Point {
    match *shape {
        CloudShape::Disk { radius } => {
            let r = radius.max(0.0) * rng.gen::<f64>().sqrt();
            let theta = rng.gen::<f64>() * std::f64::consts::TAU;
            Point::new(r * theta.cos(), r * theta.sin())
        }
        CloudShape::Box {
            half_width,
            half_height,
        } => {
            let (w, h) = (half_width.abs(), half_height.abs());
            Point::new(
                (rng.gen::<f64>() * 2.0 - 1.0) * w,
                (rng.gen::<f64>() * 2.0 - 1.0) * h,
            )
        }
        CloudShape::Lattice { extent } => {
            let e = extent.abs();
            Point::new(
                rng.gen_range(-e..=e) as f64,
                rng.gen_range(-e..=e) as f64,
            )
        }
    }
}
