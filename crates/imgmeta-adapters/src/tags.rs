//! Embedded tag extraction.
//!
//! Parses the EXIF block of an image file and derives the tag categories of
//! the metadata report: the full EXIF map, IPTC-style and XMP-style
//! name-filtered views, and a decoded GPS position. Tag values pass through
//! as display strings; no semantic validation is applied.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{In, Tag, Value};
use imgmeta_core::GpsInfo;
use tracing::debug;

/// Descriptive fields surfaced under the IPTC category.
const IPTC_FIELDS: &[&str] = &[
    "ObjectName",
    "Caption",
    "Writer",
    "Headline",
    "Instructions",
    "Artist",
    "Creator",
    "Credit",
    "Source",
    "Copyright",
    "City",
    "State",
    "Country",
    "Category",
    "Keywords",
    "ImageDescription",
];

/// Document fields surfaced under the XMP category.
const XMP_FIELDS: &[&str] = &[
    "Rating",
    "Label",
    "Title",
    "Description",
    "Subject",
    "CreatorTool",
    "Software",
    "CreateDate",
    "DateTime",
    "DateTimeOriginal",
    "DateTimeDigitized",
    "ModifyDate",
    "Format",
    "DocumentID",
    "InstanceID",
    "OriginalDocumentID",
];

/// Tag categories extracted from a single image file.
#[derive(Debug, Clone)]
pub struct TagBundle {
    /// Full parsed tag map (display name to display value with unit).
    pub exif: BTreeMap<String, String>,
    /// IPTC-style descriptive subset of the tag map.
    pub iptc: BTreeMap<String, String>,
    /// XMP-style document subset of the tag map.
    pub xmp: BTreeMap<String, String>,
    /// Decoded GPS position.
    pub gps: GpsInfo,
}

/// Reads the embedded tags of an image file.
///
/// Returns `None` when the file cannot be opened, carries no tag block, or
/// the block yields no fields. Parsing problems are logged, never surfaced
/// as errors.
#[must_use]
pub fn read_tags(path: &Path) -> Option<TagBundle> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let parsed = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("No tag data in {}: {e}", path.display());
            return None;
        }
    };

    let mut map = BTreeMap::new();
    for field in parsed.fields() {
        let tag_name = field.tag.to_string();
        let value = field.display_value().with_unit(&parsed).to_string();
        map.insert(tag_name, value);
    }

    if map.is_empty() {
        return None;
    }

    let gps = extract_gps(&parsed);

    Some(TagBundle {
        iptc: filter_fields(&map, IPTC_FIELDS),
        xmp: filter_fields(&map, XMP_FIELDS),
        exif: map,
        gps,
    })
}

/// Selects the entries of `map` whose tag name appears in `fields`.
fn filter_fields(map: &BTreeMap<String, String>, fields: &[&str]) -> BTreeMap<String, String> {
    map.iter()
        .filter(|(name, _)| fields.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Decodes the GPS position from parsed tags.
fn extract_gps(parsed: &exif::Exif) -> GpsInfo {
    let latitude = coordinate(parsed, Tag::GPSLatitude, Tag::GPSLatitudeRef, b'S');
    let longitude = coordinate(parsed, Tag::GPSLongitude, Tag::GPSLongitudeRef, b'W');
    let altitude = parsed
        .get_field(Tag::GPSAltitude, In::PRIMARY)
        .and_then(|field| match field.value {
            Value::Rational(ref v) => v.first().map(exif::Rational::to_f64),
            _ => None,
        });

    GpsInfo {
        latitude,
        longitude,
        altitude,
        has_location: latitude.is_some() && longitude.is_some(),
    }
}

/// Converts a degrees/minutes/seconds rational triple into a signed decimal
/// coordinate.
fn coordinate(parsed: &exif::Exif, value_tag: Tag, ref_tag: Tag, negative_ref: u8) -> Option<f64> {
    let field = parsed.get_field(value_tag, In::PRIMARY)?;
    let dms = match field.value {
        Value::Rational(ref v) if !v.is_empty() => v,
        _ => return None,
    };

    let decimal = dms[0].to_f64()
        + dms.get(1).map_or(0.0, |m| m.to_f64() / 60.0)
        + dms.get(2).map_or(0.0, |s| s.to_f64() / 3600.0);

    let negative = parsed
        .get_field(ref_tag, In::PRIMARY)
        .is_some_and(|field| match field.value {
            Value::Ascii(ref s) => s
                .first()
                .and_then(|bytes| bytes.first())
                .is_some_and(|c| c.eq_ignore_ascii_case(&negative_ref)),
            _ => false,
        });

    Some(if negative { -decimal } else { decimal })
}
