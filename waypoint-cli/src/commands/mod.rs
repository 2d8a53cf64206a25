//! CLI command implementations.
//!
//! Each command lives in its own module and exposes an `execute` method
//! taking the shared [`GlobalOptions`](crate::utils::GlobalOptions).

mod check;
mod completions;
mod replay;
mod trail;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use replay::ReplayCommand;
pub use trail::TrailCommand;

use clap::ValueEnum;

/// Output format shared by the trail and replay commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}
