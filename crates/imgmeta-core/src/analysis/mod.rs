//! Pixel analysis pipelines.
//!
//! Two independent, stateless passes over the same pixel buffer: histogram
//! building and color summarization. Neither holds state between calls and
//! neither depends on the other's output.

mod color_summary;
mod histogram;

pub use color_summary::{
    sample_stride, AverageColor, ColorSummary, DominantColor, PaletteConfig, SAMPLE_BUDGET,
};
pub use histogram::{luminosity, HistogramSet};
