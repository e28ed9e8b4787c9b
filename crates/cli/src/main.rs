use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hullscan::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use hullscan::data::{default_points, example_points};
use hullscan::verify::{contains_all_eps, is_convex_ccw};
use hullscan::{compute_hull, Point};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod render;

use render::{render_svg, RenderCfg};

#[derive(Parser)]
#[command(name = "hullscan")]
#[command(about = "Convex hulls of 2D point sets (Graham scan)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a points file; falls back to default points if the file is missing
    Run {
        #[arg(long, default_value = "data/data.json")]
        input: PathBuf,
        #[arg(long, default_value = "out")]
        out_dir: PathBuf,
        /// Skip the SVG plot
        #[arg(long)]
        no_plot: bool,
    },
    /// Write the 20-point example data set
    Example {
        #[arg(long, default_value = "example_points.json")]
        out: PathBuf,
    },
    /// Write a seeded random point cloud
    Random {
        #[arg(long, default_value_t = 50)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Shape::Disk)]
        shape: Shape,
        /// Disk radius or box half-size
        #[arg(long, default_value_t = 10.0, value_parser = positive_finite)]
        size: f64,
        /// Lattice half-extent; points are drawn from `[-extent, extent]²`
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(1..=MAX_EXTENT))]
        extent: i32,
        #[arg(long)]
        out: PathBuf,
    },
}

const MAX_EXTENT: i64 = 1 << 30;

fn positive_finite(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("expected a positive finite number, got {s}"))
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Disk,
    Box,
    Lattice,
}

impl Shape {
    fn to_cloud(self, size: f64, extent: i32) -> CloudShape {
        match self {
            Shape::Disk => CloudShape::Disk { radius: size },
            Shape::Box => CloudShape::Box {
                half_width: size,
                half_height: size,
            },
            Shape::Lattice => CloudShape::Lattice { extent },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out_dir,
            no_plot,
        } => run(&input, &out_dir, !no_plot).map(|_| ()),
        Action::Example { out } => example(&out),
        Action::Random {
            n,
            seed,
            shape,
            size,
            extent,
            out,
        } => random(n, seed, shape.to_cloud(size, extent), &out),
    }
}

/// Input points: the file if it exists, otherwise the defaults (persisted to `input`).
fn load_or_default(input: &Path) -> Result<Vec<Point>> {
    if input.exists() {
        let points = io::load_points(input)?;
        tracing::info!(n = points.len(), input = %input.display(), "loaded points");
        return Ok(points);
    }
    tracing::warn!(input = %input.display(), "input not found, using default points");
    let points = default_points();
    io::write_points(input, &points)?;
    tracing::info!(n = points.len(), input = %input.display(), "saved default points");
    Ok(points)
}

/// Run the full pipeline; returns the written artifacts.
fn run(input: &Path, out_dir: &Path, plot: bool) -> Result<Vec<PathBuf>> {
    let points = load_or_default(input)?;
    let hull = compute_hull(&points).with_context(|| format!("hull of {}", input.display()))?;
    tracing::info!(points = points.len(), hull = hull.len(), "convex hull");

    let ok = contains_all_eps(&hull, &points, 1e-9) && (hull.len() < 3 || is_convex_ccw(&hull));
    if ok {
        tracing::debug!("hull post-conditions hold");
    } else {
        tracing::warn!("hull post-conditions violated (floating-point degeneracy?)");
    }

    let mut outputs = Vec::new();

    let hull_path = out_dir.join("hull_points.json");
    io::write_hull(&hull_path, &hull)?;
    outputs.push(hull_path);

    let points_path = out_dir.join("all_points.json");
    io::write_points(&points_path, &points)?;
    outputs.push(points_path);

    if plot {
        let svg_path = out_dir.join("convex_hull.svg");
        let svg = render_svg(&points, &hull, &RenderCfg::default())
            .context("rendering convex hull plot")?;
        io::ensure_parent(&svg_path)?;
        std::fs::write(&svg_path, svg)
            .with_context(|| format!("writing {}", svg_path.display()))?;
        outputs.push(svg_path);
    }

    println!("{}", serde_json::to_string(&io::HullDoc::new(&hull))?);
    for p in &outputs {
        tracing::info!(path = %p.display(), "wrote");
    }
    Ok(outputs)
}

fn example(out: &Path) -> Result<()> {
    let points = example_points();
    io::write_points(out, &points)?;
    tracing::info!(n = points.len(), out = %out.display(), "example data");
    Ok(())
}

fn random(n: usize, seed: u64, shape: CloudShape, out: &Path) -> Result<()> {
    let cfg = CloudCfg {
        count: n,
        shape,
        ..CloudCfg::default()
    };
    let points = draw_cloud(cfg, ReplayToken::new(seed));
    io::write_points(out, &points)?;
    tracing::info!(n, seed, shape = ?shape, out = %out.display(), "random cloud");
    Ok(())
}
