//! Report output port for writing assembled metadata reports.

use crate::domain::MetadataReport;

/// Port for outputting metadata reports.
pub trait ResultOutput: Send + Sync {
    /// Writes a single metadata report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, report: &MetadataReport) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
