//! Assembled metadata report types.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::{ColorSummary, HistogramSet};

/// Complete metadata report for a single image.
///
/// Combines pixel-derived statistics (histogram, color summary) with the tag
/// categories and file information supplied by the surrounding adapters.
/// Field names follow the exported JSON shape; absent categories are omitted
/// from serialization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataReport {
    /// Path to the analyzed image.
    pub path: String,
    /// Timestamp of analysis (RFC 3339).
    pub timestamp: String,
    /// Image dimensions.
    pub dimensions: ImageDimensions,
    /// File-level technical information.
    pub technical: TechnicalInfo,
    /// Per-channel intensity histograms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<HistogramSet>,
    /// Average and dominant color summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSummary>,
    /// Embedded EXIF tags (display name to display value).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exif: Option<BTreeMap<String, String>>,
    /// IPTC-style descriptive tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iptc: Option<BTreeMap<String, String>>,
    /// XMP-style document tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xmp: Option<BTreeMap<String, String>>,
    /// GPS position, when the image carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps: Option<GpsInfo>,
}

/// Image dimensions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Creates dimensions from width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// File-level technical information.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalInfo {
    /// File name without directories.
    pub file_name: String,
    /// File size in bytes.
    pub file_size: u64,
    /// Human-readable file size.
    pub file_size_display: String,
    /// MIME type derived from the file extension.
    pub file_type: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Width/height ratio, rounded to two decimals.
    pub aspect_ratio: f64,
    /// Pixel count in millions, rounded to two decimals.
    pub megapixels: f64,
    /// Bits per pixel of the decoded image.
    pub color_depth: String,
    /// Compression description for the container format.
    pub compression: String,
    /// Last-modified timestamp (RFC 3339), when the filesystem provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

/// GPS position extracted from embedded tags.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsInfo {
    /// Decimal latitude, positive north.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Decimal longitude, positive east.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Altitude in meters, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Whether both latitude and longitude were found.
    pub has_location: bool,
}

/// Basic image information produced by an image source.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Path to the image file.
    pub path: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Decoded image data.
    pub image: image::DynamicImage,
}

impl ImageInfo {
    /// Creates image info from a path and a decoded image.
    #[must_use]
    pub fn new(path: impl Into<String>, image: image::DynamicImage) -> Self {
        use image::GenericImageView;
        let (width, height) = image.dimensions();
        Self {
            path: path.into(),
            width,
            height,
            image,
        }
    }

    /// Converts the decoded image to an interleaved RGBA8 buffer.
    #[must_use]
    pub fn to_rgba8(&self) -> image::RgbaImage {
        self.image.to_rgba8()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_image_info_captures_dimensions() {
        let img = image::DynamicImage::new_rgba8(12, 7);
        let info = ImageInfo::new("test.png", img);
        assert_eq!(info.width, 12);
        assert_eq!(info.height, 7);
        assert_eq!(info.path, "test.png");
    }

    #[test]
    fn test_report_omits_absent_categories() {
        let report = MetadataReport {
            path: "x.png".into(),
            timestamp: "2024-01-01T00:00:00Z".into(),
            dimensions: ImageDimensions::new(1, 1),
            technical: TechnicalInfo {
                file_name: "x.png".into(),
                file_size: 10,
                file_size_display: "10 Bytes".into(),
                file_type: "image/png".into(),
                width: 1,
                height: 1,
                aspect_ratio: 1.0,
                megapixels: 0.0,
                color_depth: "32-bit".into(),
                compression: "PNG (Lossless)".into(),
                last_modified: None,
            },
            histogram: None,
            color: None,
            exif: None,
            iptc: None,
            xmp: None,
            gps: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("technical"));
        assert!(!obj.contains_key("histogram"));
        assert!(!obj.contains_key("exif"));
        assert!(!obj.contains_key("gps"));
        assert!(!obj["technical"]
            .as_object()
            .unwrap()
            .contains_key("lastModified"));
    }

    #[test]
    fn test_report_field_names_are_camel_case() {
        let gps = GpsInfo {
            latitude: Some(48.1),
            longitude: Some(11.5),
            altitude: None,
            has_location: true,
        };
        let json = serde_json::to_value(gps).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("hasLocation"));
        assert!(!obj.contains_key("has_location"));
    }
}
