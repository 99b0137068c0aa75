//! File-level technical information.

use std::path::Path;

use imgmeta_core::{ImageInfo, TechnicalInfo};
use tracing::debug;

/// MIME type and compression description per supported extension.
const FORMAT_TABLE: &[(&str, &str, &str)] = &[
    ("jpg", "image/jpeg", "JPEG (Lossy)"),
    ("jpeg", "image/jpeg", "JPEG (Lossy)"),
    ("png", "image/png", "PNG (Lossless)"),
    ("gif", "image/gif", "GIF (Lossless)"),
    ("webp", "image/webp", "WebP (Variable)"),
    ("bmp", "image/bmp", "BMP (Uncompressed)"),
    ("tif", "image/tiff", "TIFF (Variable)"),
    ("tiff", "image/tiff", "TIFF (Variable)"),
];

/// Builds the technical category for a decoded image.
///
/// Filesystem details (byte size, modification time) degrade gracefully when
/// the path does not resolve to a real file, e.g. for synthetic sources.
#[must_use]
pub fn technical_info(info: &ImageInfo) -> TechnicalInfo {
    let path = Path::new(&info.path);
    let metadata = std::fs::metadata(path).ok();

    let file_size = metadata.as_ref().map_or(0, std::fs::Metadata::len);
    let last_modified = metadata
        .as_ref()
        .and_then(|m| m.modified().ok())
        .and_then(|modified| {
            time::OffsetDateTime::from(modified)
                .format(&time::format_description::well_known::Rfc3339)
                .map_err(|e| debug!("Timestamp format failed: {e}"))
                .ok()
        });

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    let (file_type, compression) = FORMAT_TABLE
        .iter()
        .find(|(ext, _, _)| *ext == extension)
        .map_or(("application/octet-stream", "Unknown"), |(_, mime, comp)| {
            (*mime, *comp)
        });

    let pixel_count = f64::from(info.width) * f64::from(info.height);
    let aspect_ratio = if info.height == 0 {
        0.0
    } else {
        round2(f64::from(info.width) / f64::from(info.height))
    };

    TechnicalInfo {
        file_name: path
            .file_name()
            .map_or_else(|| info.path.clone(), |n| n.to_string_lossy().into_owned()),
        file_size,
        file_size_display: format_bytes(file_size),
        file_type: file_type.to_string(),
        width: info.width,
        height: info.height,
        aspect_ratio,
        megapixels: round2(pixel_count / 1_000_000.0),
        color_depth: format!("{}-bit", info.image.color().bits_per_pixel()),
        compression: compression.to_string(),
        last_modified,
    }
}

/// Formats a byte count with 1024-based units and up to two decimals.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
