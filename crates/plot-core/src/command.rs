// File: crates/plot-core/src/command.rs
// Summary: Surface-independent draw commands (geometric primitives with style attributes).

use crate::theme::ColorToken;

/// Stroke style for lines, paths, and rect outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: ColorToken,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: ColorToken, width: f32) -> Self {
        Self { color, width }
    }
}

/// Curve interpolation for `Path` commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    /// Straight segments between consecutive points.
    Linear,
    /// Natural cubic spline through all points.
    Natural,
}

/// Horizontal text anchoring relative to the given x position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// One abstract rendering instruction, independent of any drawing-surface
/// API. A chart render emits an ordered sequence of these; the order is the
/// paint order (later commands occlude earlier ones).
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Stroke,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<ColorToken>,
        stroke: Option<Stroke>,
    },
    Path {
        points: Vec<(f32, f32)>,
        interpolation: Interpolation,
        stroke: Stroke,
    },
    Text {
        x: f32,
        y: f32,
        content: String,
        anchor: Anchor,
        /// Rotation in degrees about (x, y); 0 for horizontal text.
        rotation: f32,
    },
}
