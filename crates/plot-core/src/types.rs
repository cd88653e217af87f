// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, margins, chart configuration).

use crate::theme::Theme;

/// Default canvas width/height for the box and grouped-bar charts, in pixels.
pub const WIDTH: f32 = 600.0;
pub const HEIGHT: f32 = 400.0;

/// Canvas width/height for the line chart, in pixels.
pub const LINE_WIDTH: f32 = 1000.0;
pub const LINE_HEIGHT: f32 = 600.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60.0, 50.0, 50.0, 50.0)
    }
}

/// Explicit per-chart configuration: dimensions, margin frame, axis titles
/// and theme. Renderers take this by reference and keep no other state.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub width: f32,
    pub height: f32,
    pub insets: Insets,
    pub x_title: String,
    pub y_title: String,
    pub theme: Theme,
}

impl ChartConfig {
    fn new(width: f32, height: f32, insets: Insets) -> Self {
        Self {
            width,
            height,
            insets,
            x_title: String::new(),
            y_title: String::new(),
            theme: Theme::classic(),
        }
    }

    /// 600x400 canvas with the uniform margin frame.
    pub fn box_plot() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }

    /// Same canvas as the box plot; the legend lives inside the right margin.
    pub fn grouped_bar() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }

    /// 1000x600 canvas with extra bottom room for rotated tick labels.
    pub fn line_chart() -> Self {
        Self::new(LINE_WIDTH, LINE_HEIGHT, Insets::new(60.0, 50.0, 50.0, 80.0))
    }

    pub fn with_titles(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_title = x_title.into();
        self.y_title = y_title.into();
        self
    }

    /// Left edge of the plot rectangle.
    pub fn plot_left(&self) -> f32 {
        self.insets.left
    }

    /// Right edge of the plot rectangle.
    pub fn plot_right(&self) -> f32 {
        self.width - self.insets.right
    }

    /// Top edge of the plot rectangle.
    pub fn plot_top(&self) -> f32 {
        self.insets.top
    }

    /// Bottom edge of the plot rectangle.
    pub fn plot_bottom(&self) -> f32 {
        self.height - self.insets.bottom
    }
}
