//! imgmeta adapters - External adapters for imgmeta.
//!
//! This crate provides adapters for:
//! - Filesystem image source (decoding through the `image` codec crate)
//! - Embedded tag extraction (EXIF/IPTC/XMP/GPS)
//! - File-level technical information

pub mod fs;
pub mod tags;
pub mod technical;

pub use fs::FsImageSource;
pub use tags::{read_tags, TagBundle};
pub use technical::{format_bytes, technical_info};
