// File: crates/demo/src/svg.rs
// Summary: Thin drawing-surface adapter serializing draw commands into an SVG document.

use plot_core::{Anchor, DrawCommand, Interpolation};
use std::fmt::Write;

const FONT: &str = "font-family=\"sans-serif\" font-size=\"12\"";

/// Serialize one chart's draw commands in paint order.
pub fn to_svg(width: f32, height: f32, commands: &[DrawCommand]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.0} {height:.0}\">"
    );
    for cmd in commands {
        match cmd {
            DrawCommand::Line { x1, y1, x2, y2, stroke } => {
                let _ = writeln!(
                    out,
                    "  <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    stroke.color, stroke.width
                );
            }
            DrawCommand::Rect { x, y, width, height, fill, stroke } => {
                let _ = write!(
                    out,
                    "  <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"{}\"",
                    fill.unwrap_or("none")
                );
                if let Some(s) = stroke {
                    let _ = write!(out, " stroke=\"{}\" stroke-width=\"{}\"", s.color, s.width);
                }
                let _ = writeln!(out, "/>");
            }
            DrawCommand::Path { points, interpolation, stroke } => {
                let d = match interpolation {
                    Interpolation::Linear => polyline_data(points),
                    Interpolation::Natural => natural_spline_data(points),
                };
                let _ = writeln!(
                    out,
                    "  <path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    stroke.color, stroke.width
                );
            }
            DrawCommand::Text { x, y, content, anchor, rotation } => {
                let anchor = match anchor {
                    Anchor::Start => "start",
                    Anchor::Middle => "middle",
                    Anchor::End => "end",
                };
                let _ = write!(
                    out,
                    "  <text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"{anchor}\" {FONT}"
                );
                if *rotation != 0.0 {
                    let _ = write!(out, " transform=\"rotate({rotation} {x:.2} {y:.2})\"");
                }
                let _ = writeln!(out, ">{}</text>", escape(content));
            }
        }
    }
    out.push_str("</svg>\n");
    out
}

fn polyline_data(points: &[(f32, f32)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{x:.2},{y:.2} ");
    }
    d.trim_end().to_string()
}

/// Natural cubic spline through the points, emitted as cubic Bezier
/// segments. Control points come from the standard tridiagonal solve over
/// each coordinate axis.
fn natural_spline_data(points: &[(f32, f32)]) -> String {
    if points.len() < 3 {
        return polyline_data(points);
    }
    let xs: Vec<f32> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f32> = points.iter().map(|p| p.1).collect();
    let (p1x, p2x) = control_points(&xs);
    let (p1y, p2y) = control_points(&ys);

    let mut d = String::new();
    let _ = write!(d, "M{:.2},{:.2}", xs[0], ys[0]);
    for i in 0..xs.len() - 1 {
        let _ = write!(
            d,
            " C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            p1x[i],
            p1y[i],
            p2x[i],
            p2y[i],
            xs[i + 1],
            ys[i + 1]
        );
    }
    d
}

/// First and second Bezier control points per segment for a natural cubic
/// spline over knots `k` (len >= 3), via the Thomas algorithm.
fn control_points(k: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let n = k.len() - 1;
    let mut a = vec![0.0f32; n];
    let mut b = vec![0.0f32; n];
    let mut c = vec![0.0f32; n];
    let mut r = vec![0.0f32; n];

    b[0] = 2.0;
    c[0] = 1.0;
    r[0] = k[0] + 2.0 * k[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        c[i] = 1.0;
        r[i] = 4.0 * k[i] + 2.0 * k[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * k[n - 1] + k[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m * c[i - 1];
        r[i] -= m * r[i - 1];
    }
    let mut p1 = vec![0.0f32; n];
    p1[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        p1[i] = (r[i] - c[i] * p1[i + 1]) / b[i];
    }

    let mut p2 = vec![0.0f32; n];
    for i in 0..n - 1 {
        p2[i] = 2.0 * k[i + 1] - p1[i + 1];
    }
    p2[n - 1] = 0.5 * (k[n] + p1[n - 1]);
    (p1, p2)
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use plot_core::Stroke;

    #[test]
    fn spline_interpolates_knots() {
        // Control points must bracket each knot: C end coordinates are the knots.
        let points = vec![(0.0, 0.0), (10.0, 5.0), (20.0, -5.0), (30.0, 0.0)];
        let d = natural_spline_data(&points);
        assert!(d.starts_with("M0.00,0.00"));
        assert_eq!(d.matches(" C").count(), 3);
        assert!(d.ends_with("30.00,0.00"));
    }

    #[test]
    fn two_points_fall_back_to_a_segment() {
        let d = natural_spline_data(&[(0.0, 0.0), (5.0, 5.0)]);
        assert_eq!(d, "M0.00,0.00 L5.00,5.00");
    }

    #[test]
    fn text_rotation_is_emitted() {
        let svg = to_svg(
            100.0,
            100.0,
            &[
                DrawCommand::Text {
                    x: 10.0,
                    y: 20.0,
                    content: "3/1".into(),
                    anchor: Anchor::End,
                    rotation: -25.0,
                },
                DrawCommand::Line {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 1.0,
                    y2: 1.0,
                    stroke: Stroke::new("black", 1.0),
                },
            ],
        );
        assert!(svg.contains("rotate(-25 10.00 20.00)"));
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains("<line"));
    }
}
