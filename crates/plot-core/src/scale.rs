// File: crates/plot-core/src/scale.rs
// Summary: Band, linear, and ordinal-color scale transforms from data domains to pixel ranges.

use crate::error::ChartError;
use crate::theme::ColorToken;

/// Numeric data value (e.g. like count).
pub type Value = f64;

/// Categorical scale mapping an ordered set of unique labels to equal-width
/// pixel slots with a padding fraction applied between and around slots.
///
/// Domain and range are fixed at construction; the value is reused across
/// all draw calls within one chart.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: Vec<String>,
    lo: f32,
    hi: f32,
    padding: f32,
    step: f32,
    start: f32,
}

impl BandScale {
    /// Build from category labels in first-seen order (duplicates dropped)
    /// over pixel range `[lo, hi]` with padding fraction `p` in `[0, 1)`.
    pub fn new<I, S>(categories: I, lo: f32, hi: f32, padding: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domain: Vec<String> = Vec::new();
        for c in categories {
            let c = c.as_ref();
            if !domain.iter().any(|d| d == c) {
                domain.push(c.to_string());
            }
        }
        let p = padding.clamp(0.0, 0.999);
        let n = domain.len() as f32;
        // Equal inner and outer padding, slots centered in the range.
        let step = (hi - lo) / (n - p + 2.0 * p).max(1.0);
        let start = lo + (hi - lo - step * (n - p)) * 0.5;
        Self { domain, lo, hi, padding: p, step, start }
    }

    /// Slot start pixel for `category`, or `ChartError::Domain` if the
    /// label was not part of the constructed domain.
    pub fn position(&self, category: &str) -> Result<f32, ChartError> {
        let i = self
            .domain
            .iter()
            .position(|d| d == category)
            .ok_or_else(|| ChartError::Domain { category: category.to_string() })?;
        Ok(self.start + self.step * i as f32)
    }

    /// Slot width after padding.
    #[inline]
    pub fn bandwidth(&self) -> f32 {
        self.step * (1.0 - self.padding)
    }

    /// Horizontal center of a category's slot.
    pub fn center(&self, category: &str) -> Result<f32, ChartError> {
        Ok(self.position(category)? + self.bandwidth() / 2.0)
    }

    /// Distance between consecutive slot starts.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        (self.lo, self.hi)
    }
}

/// Continuous scale mapping a numeric interval to a pixel interval by
/// linear interpolation. Construct with a descending pixel range
/// (`lo > hi`) for y axes, where data-space increasing maps to
/// pixel-space decreasing.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    vmin: Value,
    vmax: Value,
    lo: f32,
    hi: f32,
}

impl LinearScale {
    pub fn new(vmin: Value, vmax: Value, lo: f32, hi: f32) -> Self {
        Self { vmin, vmax, lo, hi }
    }

    #[inline]
    pub fn position(&self, v: Value) -> f32 {
        let span = self.vmax - self.vmin;
        if span.abs() < 1e-12 {
            // Degenerate domain: everything maps to the range end.
            return self.hi;
        }
        self.lo + ((v - self.vmin) / span) as f32 * (self.hi - self.lo)
    }

    pub fn domain(&self) -> (Value, Value) {
        (self.vmin, self.vmax)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.lo, self.hi)
    }
}

/// Categorical scale mapping labels to a fixed palette of color tokens,
/// cycling when categories outnumber palette entries.
#[derive(Clone, Debug)]
pub struct OrdinalScale {
    domain: Vec<String>,
    palette: &'static [ColorToken],
}

impl OrdinalScale {
    pub fn new<I, S>(categories: I, palette: &'static [ColorToken]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut domain: Vec<String> = Vec::new();
        for c in categories {
            let c = c.as_ref();
            if !domain.iter().any(|d| d == c) {
                domain.push(c.to_string());
            }
        }
        Self { domain, palette }
    }

    pub fn color(&self, category: &str) -> Result<ColorToken, ChartError> {
        let i = self
            .domain
            .iter()
            .position(|d| d == category)
            .ok_or_else(|| ChartError::Domain { category: category.to_string() })?;
        Ok(self.palette[i % self.palette.len()])
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}
