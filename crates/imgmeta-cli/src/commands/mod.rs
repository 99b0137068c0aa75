//! CLI command definitions and handlers.

pub mod inspect;

use clap::{Parser, Subcommand};

/// imgmeta - Image metadata inspection
#[derive(Parser)]
#[command(name = "imgmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared inspect arguments (paths, toggles, output options).
    #[command(flatten)]
    pub inspect: inspect::InspectArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect images and emit metadata reports
    Inspect(inspect::InspectArgs),
}

/// Process exit codes of the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All images were processed.
    Success,
    /// Some images were skipped.
    SkippedSome,
    /// A fatal error occurred.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::from(0),
            ExitCode::SkippedSome => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}
