//! SVG rendering: scatter of all points plus the closed hull outline.

use hullscan::Point;
use std::fmt::{self, Write as _};

/// Parameters for SVG export.
#[derive(Clone, Debug)]
pub struct RenderCfg {
    /// Image size in pixels.
    pub width: u32,
    pub height: u32,
    /// Margin around the plot area, in pixels.
    pub padding: u32,
    pub point_radius: f64,
    pub background: String,
    pub point_color: String,
    pub hull_color: String,
    pub grid_color: String,
    pub title: String,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            padding: 60,
            point_radius: 4.0,
            background: "#ffffff".to_string(),
            point_color: "blue".to_string(),
            hull_color: "red".to_string(),
            grid_color: "#dddddd".to_string(),
            title: "Convex Hull using Graham Scan".to_string(),
        }
    }
}

/// Data-space bounds, padded to a non-zero extent on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Bounds {
    fn of(points: &[Point]) -> Self {
        let mut b = Bounds {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for p in points {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_y = b.max_y.max(p.y);
        }
        if !b.min_x.is_finite() {
            return Bounds {
                min_x: -1.0,
                max_x: 1.0,
                min_y: -1.0,
                max_y: 1.0,
            };
        }
        let pad_x = ((b.max_x - b.min_x) * 0.05).max(0.5);
        let pad_y = ((b.max_y - b.min_y) * 0.05).max(0.5);
        Bounds {
            min_x: b.min_x - pad_x,
            max_x: b.max_x + pad_x,
            min_y: b.min_y - pad_y,
            max_y: b.max_y + pad_y,
        }
    }
}

/// Affine map from data space to pixels (y flipped).
struct Frame {
    bounds: Bounds,
    x0: f64,
    y0: f64,
    w: f64,
    h: f64,
}

impl Frame {
    fn new(bounds: Bounds, cfg: &RenderCfg) -> Self {
        let pad = cfg.padding as f64;
        Frame {
            bounds,
            x0: pad,
            y0: pad,
            w: (cfg.width as f64 - 2.0 * pad).max(1.0),
            h: (cfg.height as f64 - 2.0 * pad).max(1.0),
        }
    }

    fn px(&self, x: f64) -> f64 {
        self.x0 + (x - self.bounds.min_x) / (self.bounds.max_x - self.bounds.min_x) * self.w
    }

    fn py(&self, y: f64) -> f64 {
        self.y0 + (self.bounds.max_y - y) / (self.bounds.max_y - self.bounds.min_y) * self.h
    }
}

/// 1, 2 or 5 times a power of ten, close to `range / 8`.
fn tick_step(range: f64) -> f64 {
    let raw = (range / 8.0).max(f64::MIN_POSITIVE);
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

fn ticks(lo: f64, hi: f64) -> Vec<f64> {
    let step = tick_step(hi - lo);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).take(64).map(|k| k as f64 * step).collect()
}

/// Render `points` and `hull` as a standalone SVG document.
///
/// The hull outline is drawn only for more than two vertices; the polygon closes
/// from the last vertex back to the first.
pub fn render_svg(points: &[Point], hull: &[Point], cfg: &RenderCfg) -> Result<String, fmt::Error> {
    let mut svg = String::new();
    write_svg(&mut svg, points, hull, cfg)?;
    Ok(svg)
}

fn write_svg(svg: &mut String, points: &[Point], hull: &[Point], cfg: &RenderCfg) -> fmt::Result {
    let frame = Frame::new(Bounds::of(points), cfg);
    let b = frame.bounds;
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = cfg.width,
        h = cfg.height
    )?;
    writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        cfg.background
    )?;

    svg.push_str("  <g class=\"grid\">\n");
    for x in ticks(b.min_x, b.max_x) {
        let px = frame.px(x);
        writeln!(
            svg,
            r#"    <line x1="{px:.2}" y1="{:.2}" x2="{px:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
            frame.y0,
            frame.y0 + frame.h,
            cfg.grid_color
        )?;
        writeln!(
            svg,
            r#"    <text x="{px:.2}" y="{:.2}" font-size="11" text-anchor="middle">{}</text>"#,
            frame.y0 + frame.h + 16.0,
            fmt_tick(x)
        )?;
    }
    for y in ticks(b.min_y, b.max_y) {
        let py = frame.py(y);
        writeln!(
            svg,
            r#"    <line x1="{:.2}" y1="{py:.2}" x2="{:.2}" y2="{py:.2}" stroke="{}" stroke-width="1"/>"#,
            frame.x0,
            frame.x0 + frame.w,
            cfg.grid_color
        )?;
        writeln!(
            svg,
            r#"    <text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end">{}</text>"#,
            frame.x0 - 6.0,
            py + 4.0,
            fmt_tick(y)
        )?;
    }
    svg.push_str("  </g>\n");

    if hull.len() > 2 {
        let coords: Vec<String> = hull
            .iter()
            .map(|p| format!("{:.2},{:.2}", frame.px(p.x), frame.py(p.y)))
            .collect();
        writeln!(
            svg,
            r#"  <polygon class="hull" points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            coords.join(" "),
            cfg.hull_color
        )?;
    }

    svg.push_str("  <g class=\"points\">\n");
    for p in points {
        writeln!(
            svg,
            r#"    <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            frame.px(p.x),
            frame.py(p.y),
            cfg.point_radius,
            cfg.point_color
        )?;
    }
    svg.push_str("  </g>\n");

    let cx = cfg.width as f64 / 2.0;
    writeln!(
        svg,
        r#"  <text x="{cx:.2}" y="{:.2}" font-size="18" text-anchor="middle">{}</text>"#,
        frame.y0 / 2.0,
        cfg.title
    )?;
    writeln!(
        svg,
        r#"  <text x="{cx:.2}" y="{:.2}" font-size="14" text-anchor="middle">X</text>"#,
        cfg.height as f64 - 12.0
    )?;
    writeln!(
        svg,
        r#"  <text x="16" y="{:.2}" font-size="14" text-anchor="middle">Y</text>"#,
        cfg.height as f64 / 2.0
    )?;
    svg.push_str("</svg>\n");
    Ok(())
}

fn fmt_tick(v: f64) -> String {
    // k * step is inexact for decimal steps
    let r = (v * 1e9).round() / 1e9;
    if r == 0.0 {
        "0".to_string()
    } else {
        format!("{r}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hullscan::compute_hull;
    use hullscan::data::example_points;

    #[test]
    fn draws_every_point_and_a_closed_hull() {
        let pts = example_points();
        let hull = compute_hull(&pts).unwrap();
        let svg = render_svg(&pts, &hull, &RenderCfg::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), pts.len());
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert!(svg.contains("Convex Hull using Graham Scan"));
    }

    #[test]
    fn no_outline_for_degenerate_hulls() {
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        let hull = compute_hull(&pts).unwrap();
        assert_eq!(hull.len(), 2);
        let svg = render_svg(&pts, &hull, &RenderCfg::default()).unwrap();
        assert!(!svg.contains("<polygon"));
        assert_eq!(svg.matches("<circle").count(), 3);
    }

    #[test]
    fn writer_appends_to_an_existing_buffer() {
        let pts = example_points();
        let hull = compute_hull(&pts).unwrap();
        let mut buf = String::from("<?xml version=\"1.0\"?>\n");
        write_svg(&mut buf, &pts, &hull, &RenderCfg::default()).unwrap();
        assert!(buf.starts_with("<?xml"));
        assert_eq!(buf.matches("<svg").count(), 1);
        assert_eq!(buf, format!("<?xml version=\"1.0\"?>\n{}", render_svg(&pts, &hull, &RenderCfg::default()).unwrap()));
    }

    #[test]
    fn frame_flips_y_axis() {
        let cfg = RenderCfg::default();
        let pts = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let frame = Frame::new(Bounds::of(&pts), &cfg);
        assert!(frame.py(10.0) < frame.py(0.0));
        assert!(frame.px(10.0) > frame.px(0.0));
    }

    #[test]
    fn tick_steps_are_round() {
        assert_eq!(tick_step(8.0), 1.0);
        assert_eq!(tick_step(16.0), 2.0);
        assert_eq!(tick_step(40.0), 5.0);
        assert!(ticks(-1.0, 1.0).contains(&0.0));
    }
}
