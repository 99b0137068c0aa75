//! Progress reporting port for UI integration.

use crate::domain::MetadataReport;

/// Events emitted during batch inspection for progress tracking.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Inspection started for an image.
    Started {
        /// Path to the image.
        path: String,
        /// Index in the batch (0-based).
        index: usize,
        /// Total images in batch, if known.
        total: Option<usize>,
    },
    /// Inspection completed for an image.
    Completed {
        /// The assembled report.
        report: MetadataReport,
    },
    /// An image was skipped due to an error.
    Skipped {
        /// Path to the image.
        path: String,
        /// Reason for skipping.
        reason: String,
    },
    /// All images have been processed.
    Finished {
        /// Total images processed successfully.
        processed: usize,
        /// Total images skipped.
        skipped: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
