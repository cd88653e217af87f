// File: crates/plot-core/src/error.rs
// Summary: Library error type for scale lookups and statistical summarization.

use thiserror::Error;

/// Errors surfaced by the data-to-geometry pipeline.
///
/// Charts are rendered independently; an error aborts the failing chart's
/// render only and carries no shared state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A scale was queried for a value outside its constructed domain.
    /// Indicates malformed or unanticipated input; not recoverable.
    #[error("category '{category}' is not in the scale domain")]
    Domain { category: String },

    /// A category group had zero observations, so the five-number summary
    /// is undefined. Renderers recover locally by skipping the group.
    #[error("cannot summarize an empty set of observations")]
    InsufficientData,
}
