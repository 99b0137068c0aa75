//! CSV output adapter.
//!
//! Flattens each report into `category_key` columns, one row per image.
//! Nested objects flatten recursively, arrays are JSON-stringified, and the
//! histogram bins are left out of the flat rows (256-element columns are not
//! useful in tabular form). The header is the sorted union of the columns of
//! all rows.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::Result;
use imgmeta_core::MetadataReport;
use serde_json::Value;

/// Flattened CSV output adapter.
pub struct CsvOutput {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl CsvOutput {
    /// Creates a new CSV output writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Creates a new CSV output writing to the given writer.
    #[allow(dead_code)] // API for programmatic use
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Writes a batch of reports as CSV, one row per image.
    #[allow(clippy::significant_drop_tightening)]
    pub fn write_all(&self, reports: &[MetadataReport]) -> Result<()> {
        let data = render(reports)?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.write_all(&data)?;
        writer.flush()?;
        Ok(())
    }
}

/// Renders a batch of reports into CSV bytes.
fn render(reports: &[MetadataReport]) -> Result<Vec<u8>> {
    if reports.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<BTreeMap<String, String>> = reports
        .iter()
        .map(flatten_report)
        .collect::<Result<_>>()?;

    let columns: BTreeSet<&String> = rows.iter().flat_map(BTreeMap::keys).collect();

    let mut csv_writer = csv::Writer::from_writer(Vec::new());
    csv_writer.write_record(columns.iter().map(|column| column.as_str()))?;
    for row in &rows {
        csv_writer.write_record(
            columns
                .iter()
                .map(|column| row.get(*column).map_or("", String::as_str)),
        )?;
    }

    csv_writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {e}"))
}

/// Flattens a report into underscore-joined column/value pairs.
fn flatten_report(report: &MetadataReport) -> Result<BTreeMap<String, String>> {
    let mut value = serde_json::to_value(report)?;

    // Histogram bins do not belong in tabular output
    if let Value::Object(ref mut map) = value {
        map.remove("histogram");
    }

    let mut flat = BTreeMap::new();
    flatten_value("", &value, &mut flat);
    Ok(flat)
}

fn flatten_value(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let column = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}_{key}")
                };
                flatten_value(&column, child, out);
            }
        }
        Value::Array(_) => {
            out.insert(prefix.to_string(), value.to_string());
        }
        Value::Null => {
            out.insert(prefix.to_string(), String::new());
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
