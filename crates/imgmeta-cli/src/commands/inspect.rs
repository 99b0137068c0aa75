//! Inspect command - assemble metadata reports for images.

use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, ValueEnum};
use imgmeta_adapters::{read_tags, technical_info, FsImageSource};
use imgmeta_core::{
    ColorSummary, HistogramSet, ImageDimensions, ImageInfo, ImageSource, MetadataReport,
    PaletteConfig, PixelBuffer, ProgressEvent, ProgressSink, ResultOutput,
};
use tracing::{debug, info, warn};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{CsvOutput, JsonOutput, ProgressBar};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one report per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
    /// Flattened CSV (one row per image)
    Csv,
}

/// Hardcoded default values.
mod defaults {
    pub const PALETTE_SIZE: usize = 10;
}

/// Parse and validate a palette size (at least 1).
fn parse_palette_size(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if value >= 1 {
        Ok(value)
    } else {
        Err(format!("{value} is not at least 1"))
    }
}

/// Shared arguments for image inspection.
#[derive(Args, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct InspectArgs {
    /// Files or directories to inspect
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Disable embedded tag extraction
    #[arg(long)]
    pub no_tags: bool,

    /// Disable the color summary
    #[arg(long)]
    pub no_color: bool,

    /// Disable histogram building
    #[arg(long)]
    pub no_histogram: bool,

    /// Maximum number of dominant colors reported
    #[arg(long, value_parser = parse_palette_size)]
    pub palette_size: Option<usize>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,
}

impl InspectArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    ///
    /// For boolean flags: CLI `--no-*` always wins. Config can enable/disable
    /// only when the CLI flag wasn't explicitly set.
    #[must_use]
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        // Recursive: config applies only if CLI --recursive not passed
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        // Category toggles: CLI --no-* takes precedence, then config,
        // then default (enabled)
        if !args.no_tags {
            if let Some(enabled) = config.tags.enabled {
                args.no_tags = !enabled;
            }
        }
        if !args.no_color {
            if let Some(enabled) = config.color.enabled {
                args.no_color = !enabled;
            }
        }
        if !args.no_histogram {
            if let Some(enabled) = config.histogram.enabled {
                args.no_histogram = !enabled;
            }
        }

        // Palette size: CLI > config (accessor provides hardcoded fallback)
        args.palette_size = args.palette_size.or(config.color.palette_size);

        // Output format: CLI > config (accessor provides fallback)
        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    "csv" => Some(OutputFormat::Csv),
                    _ => None,
                });
        }

        // Boolean output options: CLI flag wins, then config
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        args
    }

    /// Get palette size with fallback to hardcoded default.
    fn palette_size(&self) -> usize {
        self.palette_size.unwrap_or(defaults::PALETTE_SIZE)
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Jsonl)
    }
}

/// Result of running the inspect command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct InspectResult {
    /// Number of images processed.
    pub processed: usize,
    /// Number of images skipped.
    pub skipped: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the inspect command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &InspectArgs) -> Result<InspectResult> {
    info!("Running inspect command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    // Initialize image source
    let source = FsImageSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    // Determine if we should show progress
    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());

    // Initialize progress bar
    #[allow(clippy::cast_possible_truncation)]
    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    process_images(&source, &progress_bar, args)
}

/// Process images into metadata reports.
fn process_images(
    source: &FsImageSource,
    progress: &ProgressBar,
    args: &InspectArgs,
) -> Result<InspectResult> {
    let total = source.count_hint();
    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut all_reports: Vec<MetadataReport> = Vec::new();

    let output = JsonOutput::stdout();

    for (index, image_result) in source.images().enumerate() {
        let image = match image_result {
            Ok(img) => img,
            Err(e) => {
                // Note: error message contains the path via anyhow context
                progress.on_event(ProgressEvent::Skipped {
                    path: format!("image {index}"),
                    reason: e.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        let path = image.path.clone();

        progress.on_event(ProgressEvent::Started {
            path: path.clone(),
            index,
            total,
        });

        let report = match assemble_report(&image, args) {
            Ok(report) => report,
            Err(e) => {
                warn!("Inspection failed for {path}: {e}");
                progress.on_event(ProgressEvent::Skipped {
                    path,
                    reason: e.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        progress.on_event(ProgressEvent::Completed {
            report: report.clone(),
        });

        // Output based on format
        match args.format() {
            OutputFormat::Jsonl => {
                output.write(&report)?;
            }
            OutputFormat::Json | OutputFormat::Csv => {
                all_reports.push(report);
            }
        }

        processed += 1;
    }

    // Batched formats emit once at the end
    match args.format() {
        OutputFormat::Jsonl => {}
        OutputFormat::Json => {
            output.write_array(&all_reports, args.pretty)?;
        }
        OutputFormat::Csv => {
            CsvOutput::stdout().write_all(&all_reports)?;
        }
    }

    output.flush()?;

    progress.on_event(ProgressEvent::Finished { processed, skipped });

    let exit_code = if skipped > 0 {
        ExitCode::SkippedSome
    } else {
        ExitCode::Success
    };

    Ok(InspectResult {
        processed,
        skipped,
        exit_code,
    })
}

/// Assemble the full metadata report for a decoded image.
fn assemble_report(image: &ImageInfo, args: &InspectArgs) -> Result<MetadataReport> {
    let rgba = image.to_rgba8();
    let buffer = PixelBuffer::new(image.width, image.height, rgba.as_raw());

    let histogram = if args.no_histogram {
        None
    } else {
        Some(HistogramSet::from_buffer(&buffer)?)
    };

    let color = if args.no_color {
        None
    } else {
        let palette = PaletteConfig {
            palette_size: args.palette_size(),
        };
        Some(ColorSummary::analyze_with(&buffer, &palette)?)
    };

    let mut exif = None;
    let mut iptc = None;
    let mut xmp = None;
    let mut gps = None;
    if !args.no_tags {
        if let Some(bundle) = read_tags(Path::new(&image.path)) {
            exif = non_empty(bundle.exif);
            iptc = non_empty(bundle.iptc);
            xmp = non_empty(bundle.xmp);
            gps = Some(bundle.gps);
        } else {
            debug!("No embedded tags for {}", image.path);
        }
    }

    Ok(MetadataReport {
        path: image.path.clone(),
        timestamp: iso_timestamp(),
        dimensions: ImageDimensions::new(image.width, image.height),
        technical: technical_info(image),
        histogram,
        color,
        exif,
        iptc,
        xmp,
        gps,
    })
}

fn non_empty(map: BTreeMap<String, String>) -> Option<BTreeMap<String, String>> {
    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
