//! Decoded pixel buffer view and its shape validation.

use thiserror::Error;

use super::ColorSample;

/// Bytes per pixel in the interleaved RGBA layout.
pub const BYTES_PER_PIXEL: usize = 4;

/// Error raised when a buffer's sample data does not match its declared
/// dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBufferError {
    /// Sample length is not a multiple of the RGBA stride.
    #[error("sample length {len} is not a multiple of 4")]
    UnalignedSamples {
        /// Actual sample length in bytes.
        len: usize,
    },
    /// Sample length does not match `width * height * 4`.
    #[error("sample length {actual} does not match {width}x{height} RGBA layout (expected {expected})")]
    LengthMismatch {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
        /// Expected sample length in bytes.
        expected: usize,
        /// Actual sample length in bytes.
        actual: usize,
    },
}

/// Immutable view over a decoded image: dimensions plus interleaved 8-bit
/// RGBA samples, row-major with no padding.
///
/// Construction performs no validation; each analysis entry point checks the
/// layout invariant (`samples.len() == width * height * 4`) and reports
/// [`InvalidBufferError`] itself. Alpha is carried but never analyzed.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    samples: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Creates a view over raw RGBA samples.
    #[must_use]
    pub const fn new(width: u32, height: u32, samples: &'a [u8]) -> Self {
        Self {
            width,
            height,
            samples,
        }
    }

    /// Returns the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw interleaved samples.
    #[must_use]
    pub const fn samples(&self) -> &'a [u8] {
        self.samples
    }

    /// Returns the number of pixels declared by the dimensions.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Checks the layout invariant.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBufferError`] if the sample length is not a multiple
    /// of 4 or does not equal `width * height * 4`.
    pub fn validate(&self) -> Result<(), InvalidBufferError> {
        let len = self.samples.len();
        if len % BYTES_PER_PIXEL != 0 {
            return Err(InvalidBufferError::UnalignedSamples { len });
        }
        let expected = self.pixel_count() * BYTES_PER_PIXEL;
        if len != expected {
            return Err(InvalidBufferError::LengthMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual: len,
            });
        }
        Ok(())
    }

    /// Returns the color of the pixel at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= pixel_count()` on a buffer that does not satisfy
    /// the layout invariant. Callers go through [`Self::validate`] first.
    #[must_use]
    pub fn sample(&self, index: usize) -> ColorSample {
        let offset = index * BYTES_PER_PIXEL;
        ColorSample::new(
            self.samples[offset],
            self.samples[offset + 1],
            self.samples[offset + 2],
        )
    }

    /// Iterates over all pixel colors in row-major order, ignoring alpha.
    pub fn pixels(&self) -> impl Iterator<Item = ColorSample> + 'a {
        self.samples
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| ColorSample::new(px[0], px[1], px[2]))
    }
}
