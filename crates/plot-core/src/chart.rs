// File: crates/plot-core/src/chart.rs
// Summary: The three chart renderers; pure functions from records to draw-command sequences.

use crate::axis::{axis_titles, x_axis_band, y_axis_linear};
use crate::command::{Anchor, DrawCommand, Interpolation, Stroke};
use crate::error::ChartError;
use crate::group::{distinct, group_values};
use crate::record::{AggregatedObservation, Observation, SeriesPoint};
use crate::scale::{BandScale, LinearScale, OrdinalScale};
use crate::summary::summarize;
use crate::types::ChartConfig;

const BAND_PADDING: f32 = 0.5;
const INNER_PADDING: f32 = 0.2;
const BOX_WIDTH_FRACTION: f32 = 0.6;
const LEGEND_RIGHT_OFFSET: f32 = 80.0;
const LEGEND_ROW_PITCH: f32 = 20.0;
const LEGEND_SWATCH: f32 = 10.0;
const LINE_LABEL_ROTATION: f32 = -25.0;

/// Box plot: one five-number-summary glyph per category, categories in
/// first-seen order. Within each group the paint order is whisker line,
/// then box, then median line, so the box occludes the whisker.
pub fn render_box_plot(
    records: &[Observation],
    cfg: &ChartConfig,
) -> Result<Vec<DrawCommand>, ChartError> {
    let band = BandScale::new(
        records.iter().map(|r| r.category.as_str()),
        cfg.plot_left(),
        cfg.plot_right(),
        BAND_PADDING,
    );
    let y = value_scale(records.iter().map(|r| r.value), cfg);

    let mut out = frame(cfg);
    out.extend(y_axis_linear(&y, cfg));
    out.extend(x_axis_band(&band, cfg, 0.0));
    out.extend(axis_titles(cfg));

    let groups = group_values(records, |r| r.category.as_str(), |r| r.value);
    for (category, values) in &groups {
        let summary = match summarize(values) {
            Ok(s) => s,
            // Undefined summary: skip this group's shapes, keep the chart.
            Err(ChartError::InsufficientData) => continue,
            Err(e) => return Err(e),
        };
        let x = band.center(category)?;
        let box_width = band.bandwidth() * BOX_WIDTH_FRACTION;

        out.push(DrawCommand::Line {
            x1: x,
            y1: y.position(summary.lower_whisker),
            x2: x,
            y2: y.position(summary.upper_whisker),
            stroke: Stroke::new(cfg.theme.whisker, 2.0),
        });
        let y_q3 = y.position(summary.q3);
        let y_q1 = y.position(summary.q1);
        out.push(DrawCommand::Rect {
            x: x - box_width / 2.0,
            y: y_q3,
            width: box_width,
            height: (y_q1 - y_q3).abs(),
            fill: Some(cfg.theme.box_fill),
            stroke: Some(Stroke::new(cfg.theme.box_stroke, 1.0)),
        });
        let y_med = y.position(summary.median);
        out.push(DrawCommand::Line {
            x1: x - box_width / 2.0,
            y1: y_med,
            x2: x + box_width / 2.0,
            y2: y_med,
            stroke: Stroke::new(cfg.theme.median, 4.0),
        });
    }
    Ok(out)
}

/// Grouped bar chart: outer band by primary category, inner band by
/// secondary category within the outer bandwidth, bars colored from the
/// palette keyed on secondary, plus a vertically stacked legend.
pub fn render_grouped_bar(
    records: &[AggregatedObservation],
    cfg: &ChartConfig,
) -> Result<Vec<DrawCommand>, ChartError> {
    let outer = BandScale::new(
        records.iter().map(|r| r.primary.as_str()),
        cfg.plot_left(),
        cfg.plot_right(),
        BAND_PADDING,
    );
    let secondaries = distinct(records, |r| r.secondary.as_str());
    let inner = BandScale::new(secondaries.iter(), 0.0, outer.bandwidth(), INNER_PADDING);
    let color = OrdinalScale::new(secondaries.iter(), cfg.theme.palette);
    let y = value_scale(records.iter().map(|r| r.value), cfg);

    let mut out = frame(cfg);
    out.extend(y_axis_linear(&y, cfg));
    out.extend(x_axis_band(&outer, cfg, 0.0));
    out.extend(axis_titles(cfg));

    for r in records {
        let x = outer.position(&r.primary)? + inner.position(&r.secondary)?;
        let top = y.position(r.value);
        out.push(DrawCommand::Rect {
            x,
            y: top,
            width: inner.bandwidth(),
            height: cfg.plot_bottom() - top,
            fill: Some(color.color(&r.secondary)?),
            stroke: None,
        });
    }

    // Legend: one swatch + label per secondary category, first-seen order.
    let lx = cfg.width - LEGEND_RIGHT_OFFSET;
    let ly = cfg.plot_top();
    for (i, secondary) in secondaries.iter().enumerate() {
        let row = ly + i as f32 * LEGEND_ROW_PITCH;
        out.push(DrawCommand::Rect {
            x: lx,
            y: row,
            width: LEGEND_SWATCH,
            height: LEGEND_SWATCH,
            fill: Some(color.color(secondary)?),
            stroke: None,
        });
        out.push(DrawCommand::Text {
            x: lx + 2.0 * LEGEND_SWATCH,
            y: row + 12.0,
            content: secondary.clone(),
            anchor: Anchor::Start,
            rotation: 0.0,
        });
    }
    Ok(out)
}

/// Line chart: one natural-spline path through the points in their given
/// (chronological) order, x at band-slot centers. Tick labels are rotated
/// since date domains are dense.
pub fn render_line_chart(
    points: &[SeriesPoint],
    cfg: &ChartConfig,
) -> Result<Vec<DrawCommand>, ChartError> {
    let band = BandScale::new(
        points.iter().map(|p| p.key.as_str()),
        cfg.plot_left(),
        cfg.plot_right(),
        BAND_PADDING,
    );
    let y = value_scale(points.iter().map(|p| p.value), cfg);

    let mut out = frame(cfg);
    out.extend(y_axis_linear(&y, cfg));
    out.extend(x_axis_band(&band, cfg, LINE_LABEL_ROTATION));
    out.extend(axis_titles(cfg));

    let mut path = Vec::with_capacity(points.len());
    for p in points {
        path.push((band.center(&p.key)?, y.position(p.value)));
    }
    if !path.is_empty() {
        out.push(DrawCommand::Path {
            points: path,
            interpolation: Interpolation::Natural,
            stroke: Stroke::new(cfg.theme.line_stroke, 2.0),
        });
    }
    Ok(out)
}

// ---- helpers ----------------------------------------------------------------

/// Background fill covering the whole canvas; always the first command.
fn frame(cfg: &ChartConfig) -> Vec<DrawCommand> {
    vec![DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        width: cfg.width,
        height: cfg.height,
        fill: Some(cfg.theme.background),
        stroke: None,
    }]
}

/// Value axis over `[0, max(values)]`, inverted so larger values sit higher
/// on screen.
fn value_scale(values: impl Iterator<Item = f64>, cfg: &ChartConfig) -> LinearScale {
    let vmax = values.fold(0.0_f64, f64::max);
    LinearScale::new(0.0, vmax, cfg.plot_bottom(), cfg.plot_top())
}
