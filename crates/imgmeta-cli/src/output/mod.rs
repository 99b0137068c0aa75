//! Output adapters for the CLI.

mod csv;
mod json;
mod progress;

pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;
pub use self::progress::ProgressBar;
