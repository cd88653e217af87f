// File: crates/plot-core/src/theme.rs
// Summary: Fixed visual styling as CSS color tokens and the categorical palette.

/// A CSS color token understood by the drawing surface
/// (named color or `#rrggbb`).
pub type ColorToken = &'static str;

/// Categorical palette for secondary-category coloring.
pub const PALETTE: [ColorToken; 3] = ["#1f77b4", "#ff7f0e", "#2ca02c"];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: ColorToken,
    pub axis_line: ColorToken,
    pub axis_label: ColorToken,
    pub box_fill: ColorToken,
    pub box_stroke: ColorToken,
    pub whisker: ColorToken,
    pub median: ColorToken,
    pub line_stroke: ColorToken,
    pub palette: &'static [ColorToken],
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: "lightyellow",
            axis_line: "black",
            axis_label: "black",
            box_fill: "lightblue",
            box_stroke: "black",
            whisker: "black",
            median: "black",
            line_stroke: "goldenrod",
            palette: &PALETTE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
