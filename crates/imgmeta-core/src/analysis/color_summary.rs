//! Average and dominant color analysis.
//!
//! The average color is an exact full-traversal mean. Dominant colors use a
//! bounded sampling strategy: a fixed stride over pixel indices keeps the
//! number of examined pixels near [`SAMPLE_BUDGET`] regardless of image
//! size, trading exactness for bounded work on large images.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{ColorSample, InvalidBufferError, PixelBuffer};

/// Upper bound on the number of pixels examined for dominant colors.
pub const SAMPLE_BUDGET: usize = 10_000;

const COLOR_SPACE: &str = "RGB";

/// Configuration for the dominant-color palette.
#[derive(Debug, Clone)]
pub struct PaletteConfig {
    /// Maximum number of dominant colors reported.
    pub palette_size: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self { palette_size: 10 }
    }
}

/// One entry of the ranked dominant-color palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantColor {
    /// The color value.
    pub rgb: ColorSample,
    /// Lowercase `#rrggbb` encoding of the color.
    pub hex: String,
    /// Share of sampled pixels with this exact color, in percent, rounded
    /// to two decimals.
    pub percentage: f64,
}

/// Average color over all pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageColor {
    /// Per-channel rounded mean.
    pub rgb: ColorSample,
    /// Lowercase `#rrggbb` encoding of the mean.
    pub hex: String,
}

/// Color summary for a pixel buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSummary {
    /// Dominant colors, descending by sampled frequency. Colors with equal
    /// counts keep the order in which they were first encountered.
    pub dominant_colors: Vec<DominantColor>,
    /// Arithmetic mean of each channel over all pixels.
    pub average_color: AverageColor,
    /// Color space of the analysis, always `"RGB"`.
    pub color_space: &'static str,
    /// Number of distinct colors among the sampled pixels. This is an
    /// approximation of the true distinct-color count: pixels skipped by the
    /// sampling stride are not observed.
    pub total_distinct_colors: usize,
}

struct SampleCount {
    count: u64,
    order: u32,
}

impl ColorSummary {
    /// Analyzes the buffer with the default palette size.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBufferError`] if the buffer does not satisfy the
    /// RGBA layout invariant.
    pub fn analyze(buffer: &PixelBuffer<'_>) -> Result<Self, InvalidBufferError> {
        Self::analyze_with(buffer, &PaletteConfig::default())
    }

    /// Analyzes the buffer with an explicit palette configuration.
    ///
    /// A zero-area buffer yields an empty palette, a `#000000` average and
    /// zero distinct colors.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBufferError`] if the buffer does not satisfy the
    /// RGBA layout invariant.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn analyze_with(
        buffer: &PixelBuffer<'_>,
        config: &PaletteConfig,
    ) -> Result<Self, InvalidBufferError> {
        buffer.validate()?;

        let pixel_count = buffer.pixel_count();
        let stride = sample_stride(pixel_count);

        let mut counts: HashMap<u32, SampleCount> = HashMap::new();
        let mut sampled = 0u64;
        let mut index = 0;
        while index < pixel_count {
            let key = buffer.sample(index).packed();
            let next_order = counts.len() as u32;
            counts
                .entry(key)
                .or_insert(SampleCount {
                    count: 0,
                    order: next_order,
                })
                .count += 1;
            sampled += 1;
            index += stride;
        }

        let total_distinct_colors = counts.len();

        let mut entries: Vec<(u32, SampleCount)> = counts.into_iter().collect();
        entries.sort_by_key(|&(_, ref c)| (Reverse(c.count), c.order));
        entries.truncate(config.palette_size);

        let dominant_colors = entries
            .into_iter()
            .map(|(key, c)| {
                let rgb = ColorSample::from_packed(key);
                DominantColor {
                    rgb,
                    hex: rgb.to_hex(),
                    percentage: round2(100.0 * c.count as f64 / sampled as f64),
                }
            })
            .collect();

        Ok(Self {
            dominant_colors,
            average_color: average_color(buffer),
            color_space: COLOR_SPACE,
            total_distinct_colors,
        })
    }
}

/// Pixel-index stride that keeps the sampled pixel count near the budget.
#[must_use]
pub const fn sample_stride(pixel_count: usize) -> usize {
    let stride = pixel_count / SAMPLE_BUDGET;
    if stride == 0 {
        1
    } else {
        stride
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn average_color(buffer: &PixelBuffer<'_>) -> AverageColor {
    let mut r = 0u64;
    let mut g = 0u64;
    let mut b = 0u64;
    for color in buffer.pixels() {
        r += u64::from(color.r);
        g += u64::from(color.g);
        b += u64::from(color.b);
    }

    let count = buffer.pixel_count() as u64;
    let rgb = if count == 0 {
        ColorSample::new(0, 0, 0)
    } else {
        // Precision loss acceptable, channel sums stay far below 2^53
        ColorSample::new(
            (r as f64 / count as f64).round() as u8,
            (g as f64 / count as f64).round() as u8,
            (b as f64 / count as f64).round() as u8,
        )
    };

    AverageColor {
        rgb,
        hex: rgb.to_hex(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
