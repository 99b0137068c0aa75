//! Test support utilities for imgmeta.
//!
//! Provides mocks, synthetic image builders, and utilities for testing the
//! imgmeta inspection pipeline.
//!
//! # Example
//!
//! ```
//! use imgmeta_test_support::{MockImageSource, SyntheticImageBuilder};
//!
//! // Create synthetic test images
//! let red = SyntheticImageBuilder::solid(16, 16, 255, 0, 0);
//! let split = SyntheticImageBuilder::two_tone(16, 16, (255, 0, 0), (0, 0, 255));
//!
//! // Create mock image source
//! let source = MockImageSource::new(vec![red, split]);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticImageBuilder;
pub use mocks::{MockImageSource, MockProgressSink, MockResultOutput};
