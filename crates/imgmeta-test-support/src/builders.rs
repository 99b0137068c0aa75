//! Synthetic image builders for testing.

use image::{DynamicImage, Rgba, RgbaImage};
use imgmeta_core::domain::ImageInfo;

/// Builder for creating synthetic RGBA test images.
///
/// Provides convenience methods for generating images with known color
/// content (solid fills, splits, gradients, outlier pixels).
pub struct SyntheticImageBuilder;

impl SyntheticImageBuilder {
    /// Creates an image filled with a single color.
    #[must_use]
    pub fn solid(width: u32, height: u32, r: u8, g: u8, b: u8) -> ImageInfo {
        let img = RgbaImage::from_fn(width, height, |_, _| Rgba([r, g, b, 255]));
        ImageInfo::new("synthetic://solid", DynamicImage::ImageRgba8(img))
    }

    /// Creates an image whose left half is one color and right half another.
    #[must_use]
    pub fn two_tone(width: u32, height: u32, left: (u8, u8, u8), right: (u8, u8, u8)) -> ImageInfo {
        let img = RgbaImage::from_fn(width, height, |x, _| {
            let (r, g, b) = if x < width / 2 { left } else { right };
            Rgba([r, g, b, 255])
        });
        ImageInfo::new("synthetic://two_tone", DynamicImage::ImageRgba8(img))
    }

    /// Creates a two-color checkerboard.
    #[must_use]
    pub fn checkerboard(
        width: u32,
        height: u32,
        cell_size: u32,
        light: (u8, u8, u8),
        dark: (u8, u8, u8),
    ) -> ImageInfo {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            let (r, g, b) = if (x / cell_size + y / cell_size) % 2 == 0 {
                light
            } else {
                dark
            };
            Rgba([r, g, b, 255])
        });
        ImageInfo::new("synthetic://checkerboard", DynamicImage::ImageRgba8(img))
    }

    /// Creates a smooth horizontal gray gradient.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn horizontal_gradient(width: u32, height: u32) -> ImageInfo {
        let img = RgbaImage::from_fn(width, height, |x, _| {
            let val = ((u32::from(u8::MAX) * x) / width.max(1)) as u8;
            Rgba([val, val, val, 255])
        });
        ImageInfo::new(
            "synthetic://horizontal_gradient",
            DynamicImage::ImageRgba8(img),
        )
    }

    /// Creates a solid image with a single pixel of a different color in the
    /// bottom-right corner.
    #[must_use]
    pub fn solid_with_outlier(
        width: u32,
        height: u32,
        fill: (u8, u8, u8),
        outlier: (u8, u8, u8),
    ) -> ImageInfo {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            let (r, g, b) = if x == width - 1 && y == height - 1 {
                outlier
            } else {
                fill
            };
            Rgba([r, g, b, 255])
        });
        ImageInfo::new("synthetic://solid_with_outlier", DynamicImage::ImageRgba8(img))
    }

    /// Creates a 1x1 pixel image (edge case).
    #[must_use]
    pub fn single_pixel(r: u8, g: u8, b: u8) -> ImageInfo {
        Self::solid(1, 1, r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_dimensions_and_color() {
        let info = SyntheticImageBuilder::solid(10, 8, 60, 100, 200);
        assert_eq!(info.width, 10);
        assert_eq!(info.height, 8);
        assert_eq!(info.path, "synthetic://solid");

        let rgba = info.to_rgba8();
        for pixel in rgba.pixels() {
            assert_eq!(pixel.0, [60, 100, 200, 255]);
        }
    }

    #[test]
    fn test_two_tone_halves() {
        let info = SyntheticImageBuilder::two_tone(8, 2, (255, 0, 0), (0, 0, 255));
        let rgba = info.to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(rgba.get_pixel(3, 1).0, [255, 0, 0, 255]);
        assert_eq!(rgba.get_pixel(4, 0).0, [0, 0, 255, 255]);
        assert_eq!(rgba.get_pixel(7, 1).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_checkerboard_alternates() {
        let info = SyntheticImageBuilder::checkerboard(4, 4, 2, (255, 255, 255), (0, 0, 0));
        let rgba = info.to_rgba8();
        assert_eq!(rgba.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(rgba.get_pixel(2, 0).0, [0, 0, 0, 255]);
        assert_eq!(rgba.get_pixel(0, 2).0, [0, 0, 0, 255]);
        assert_eq!(rgba.get_pixel(2, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_gradient_range() {
        let info = SyntheticImageBuilder::horizontal_gradient(256, 4);
        let rgba = info.to_rgba8();
        assert!(rgba.get_pixel(0, 0).0[0] < 5);
        assert!(rgba.get_pixel(255, 0).0[0] > 250);
    }

    #[test]
    fn test_solid_with_outlier_places_one_pixel() {
        let info = SyntheticImageBuilder::solid_with_outlier(4, 4, (255, 0, 0), (0, 0, 255));
        let rgba = info.to_rgba8();

        let blue = rgba
            .pixels()
            .filter(|p| p.0 == [0, 0, 255, 255])
            .count();
        assert_eq!(blue, 1);
        assert_eq!(rgba.get_pixel(3, 3).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_single_pixel() {
        let info = SyntheticImageBuilder::single_pixel(42, 43, 44);
        assert_eq!(info.width, 1);
        assert_eq!(info.height, 1);
        assert_eq!(info.to_rgba8().get_pixel(0, 0).0, [42, 43, 44, 255]);
    }
}
