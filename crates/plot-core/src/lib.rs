// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart geometry and rendering.

pub mod axis;
pub mod chart;
pub mod command;
pub mod error;
pub mod grid;
pub mod group;
pub mod record;
pub mod scale;
pub mod summary;
pub mod theme;
pub mod types;

pub use chart::{render_box_plot, render_grouped_bar, render_line_chart};
pub use command::{Anchor, DrawCommand, Interpolation, Stroke};
pub use error::ChartError;
pub use record::{AggregatedObservation, Observation, SeriesPoint};
pub use scale::{BandScale, LinearScale, OrdinalScale};
pub use summary::{summarize, FiveNumberSummary};
pub use theme::Theme;
pub use types::{ChartConfig, Insets};
