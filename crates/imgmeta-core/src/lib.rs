//! imgmeta core - Domain types and pixel analysis
//!
//! This crate contains the core domain types, the pixel analysis pipelines
//! (per-channel histograms and color summarization), and the port traits
//! that bound the core against image decoding and report output.

pub mod analysis;
pub mod domain;
pub mod ports;

pub use analysis::{
    luminosity, AverageColor, ColorSummary, DominantColor, HistogramSet, PaletteConfig,
};
pub use domain::{
    ColorSample, GpsInfo, ImageDimensions, ImageInfo, InvalidBufferError, MetadataReport,
    PixelBuffer, TechnicalInfo,
};
pub use ports::{ImageSource, ProgressEvent, ProgressSink, ResultOutput};
