// File: crates/plot-core/src/record.rs
// Summary: Record model for raw, pre-aggregated, and ordered-series observations.

/// One raw data point: a categorical label and a numeric value
/// (e.g. a post's platform and like count). Immutable once loaded;
/// lives for one rendering pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub category: String,
    pub value: f64,
}

impl Observation {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self { category: category.into(), value }
    }
}

/// A pre-aggregated record keyed by two categories
/// (e.g. platform, post type, average likes).
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedObservation {
    pub primary: String,
    pub secondary: String,
    pub value: f64,
}

impl AggregatedObservation {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>, value: f64) -> Self {
        Self { primary: primary.into(), secondary: secondary.into(), value }
    }
}

/// An ordered-domain point (e.g. date, average likes). Unlike the other
/// record types, sequence order is significant: row order is chronological
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub key: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self { key: key.into(), value }
    }
}
