//! Per-channel intensity histograms.
//!
//! Builds 256-bin frequency tables for the red, green, and blue channels
//! plus a perceptual luminosity channel, over every pixel of the buffer.

use serde::Serialize;

use crate::domain::{ColorSample, InvalidBufferError, PixelBuffer};

const BINS: usize = 256;

/// Perceptual luminosity of a color, ITU-R weighted and rounded to the
/// nearest integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn luminosity(color: ColorSample) -> u8 {
    let lum = 0.299 * f64::from(color.r) + 0.587 * f64::from(color.g) + 0.114 * f64::from(color.b);
    lum.round().min(255.0) as u8
}

/// 256-bin histograms for the red, green, blue, and luminosity channels.
///
/// Each bin holds the number of pixels at that intensity level; the sum over
/// any one channel equals the pixel count of the source buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramSet {
    #[serde(serialize_with = "serialize_bins")]
    red: [u64; BINS],
    #[serde(serialize_with = "serialize_bins")]
    green: [u64; BINS],
    #[serde(serialize_with = "serialize_bins")]
    blue: [u64; BINS],
    #[serde(serialize_with = "serialize_bins")]
    luminosity: [u64; BINS],
}

fn serialize_bins<S>(bins: &[u64; BINS], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(bins.iter())
}

impl HistogramSet {
    /// Computes the four channel histograms over every pixel of the buffer.
    ///
    /// A zero-area buffer yields four all-zero histograms.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBufferError`] if the buffer does not satisfy the
    /// RGBA layout invariant.
    pub fn from_buffer(buffer: &PixelBuffer<'_>) -> Result<Self, InvalidBufferError> {
        buffer.validate()?;

        let mut red = [0u64; BINS];
        let mut green = [0u64; BINS];
        let mut blue = [0u64; BINS];
        let mut lum = [0u64; BINS];

        for color in buffer.pixels() {
            red[usize::from(color.r)] += 1;
            green[usize::from(color.g)] += 1;
            blue[usize::from(color.b)] += 1;
            lum[usize::from(luminosity(color))] += 1;
        }

        Ok(Self {
            red,
            green,
            blue,
            luminosity: lum,
        })
    }

    /// Returns the red channel bins.
    #[must_use]
    pub const fn red(&self) -> &[u64; BINS] {
        &self.red
    }

    /// Returns the green channel bins.
    #[must_use]
    pub const fn green(&self) -> &[u64; BINS] {
        &self.green
    }

    /// Returns the blue channel bins.
    #[must_use]
    pub const fn blue(&self) -> &[u64; BINS] {
        &self.blue
    }

    /// Returns the luminosity channel bins.
    #[must_use]
    pub const fn luminosity(&self) -> &[u64; BINS] {
        &self.luminosity
    }

    /// Returns the total pixel count, which is identical across channels.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.red.iter().sum()
    }
}
