// File: crates/plot-core/src/axis.rs
// Summary: Axis line, tick, and title emission as draw commands.

use crate::command::{Anchor, DrawCommand, Stroke};
use crate::grid::{fmt_tick, linspace};
use crate::scale::{BandScale, LinearScale};
use crate::types::ChartConfig;

const TICK_LEN: f32 = 6.0;
const TICK_LABEL_PAD: f32 = 8.0;
const Y_TICK_COUNT: usize = 6;

/// Bottom axis for a categorical domain: baseline, one tick per category,
/// labels at slot centers. `label_rotation` (degrees, typically 0 or -25)
/// tilts the labels for dense domains; rotated labels are end-anchored.
pub fn x_axis_band(band: &BandScale, cfg: &ChartConfig, label_rotation: f32) -> Vec<DrawCommand> {
    let y = cfg.plot_bottom();
    let stroke = Stroke::new(cfg.theme.axis_line, 1.0);
    let mut out = vec![DrawCommand::Line {
        x1: cfg.plot_left(),
        y1: y,
        x2: cfg.plot_right(),
        y2: y,
        stroke,
    }];
    let anchor = if label_rotation == 0.0 { Anchor::Middle } else { Anchor::End };
    for cat in band.domain() {
        // Domain members always resolve; the scale was built from them.
        let Ok(cx) = band.center(cat) else { continue };
        out.push(DrawCommand::Line { x1: cx, y1: y, x2: cx, y2: y + TICK_LEN, stroke });
        out.push(DrawCommand::Text {
            x: cx,
            y: y + TICK_LEN + TICK_LABEL_PAD + 4.0,
            content: cat.clone(),
            anchor,
            rotation: label_rotation,
        });
    }
    out
}

/// Left axis for a numeric domain: baseline plus evenly spaced ticks with
/// end-anchored labels.
pub fn y_axis_linear(scale: &LinearScale, cfg: &ChartConfig) -> Vec<DrawCommand> {
    let x = cfg.plot_left();
    let stroke = Stroke::new(cfg.theme.axis_line, 1.0);
    let mut out = vec![DrawCommand::Line {
        x1: x,
        y1: cfg.plot_top(),
        x2: x,
        y2: cfg.plot_bottom(),
        stroke,
    }];
    let (vmin, vmax) = scale.domain();
    for v in linspace(vmin, vmax, Y_TICK_COUNT) {
        let py = scale.position(v);
        out.push(DrawCommand::Line { x1: x - TICK_LEN, y1: py, x2: x, y2: py, stroke });
        out.push(DrawCommand::Text {
            x: x - TICK_LEN - TICK_LABEL_PAD,
            y: py + 4.0,
            content: fmt_tick(v),
            anchor: Anchor::End,
            rotation: 0.0,
        });
    }
    out
}

/// Axis titles: x centered under the plot, y rotated -90 along the left edge.
pub fn axis_titles(cfg: &ChartConfig) -> Vec<DrawCommand> {
    let mut out = Vec::new();
    if !cfg.x_title.is_empty() {
        out.push(DrawCommand::Text {
            x: cfg.width / 2.0,
            y: cfg.height - 10.0,
            content: cfg.x_title.clone(),
            anchor: Anchor::Middle,
            rotation: 0.0,
        });
    }
    if !cfg.y_title.is_empty() {
        out.push(DrawCommand::Text {
            x: 25.0,
            y: cfg.height / 2.0,
            content: cfg.y_title.clone(),
            anchor: Anchor::Middle,
            rotation: -90.0,
        });
    }
    out
}
