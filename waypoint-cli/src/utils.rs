//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands:
//! configuration loading and breadcrumb-trail output formatting.

use crate::error::CliError;
use std::io::Write;
use std::path::PathBuf;
use waypoint::{BreadcrumbItem, Config};

/// Column headers for the breadcrumb table output.
const TRAIL_HEADERS: [&str; 3] = ["label", "href", "active"];

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the configuration file location.
    pub config: Option<PathBuf>,
}

/// Load configuration.
///
/// An explicit `--config` path (or `WAYPOINT_CONFIG`) must exist and parse;
/// otherwise discovery falls back to `~/.waypoint/config.yaml` and finally
/// the built-in defaults.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let config = match &global.config {
        Some(path) => Config::load(path).map_err(|e| CliError::Config(e.to_string()))?,
        None => Config::discover().map_err(|e| CliError::Config(e.to_string()))?,
    };
    Ok(config)
}

/// Print a breadcrumb trail as a tab-separated table.
pub fn print_trail_table(trail: &[BreadcrumbItem]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = TRAIL_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for item in trail {
        let marker = if item.is_active { "*" } else { "" };
        writeln!(handle, "{}\t{}\t{marker}", item.label, item.href)?;
    }

    Ok(())
}

/// Print a breadcrumb trail as pretty JSON.
pub fn print_trail_json(trail: &[BreadcrumbItem]) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(trail)
        .map_err(|e| CliError::InvalidArguments(format!("JSON serialization failed: {e}")))?;
    println!("{json}");
    Ok(())
}
