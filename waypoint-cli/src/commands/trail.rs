//! Trail command implementation.
//!
//! This module implements the `trail` command, which prints the breadcrumb
//! trail derived from a path, as a table or as JSON.

use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::utils::{print_trail_json, print_trail_table, GlobalOptions};
use clap::Args;
use waypoint::generate_breadcrumbs;

/// Print the breadcrumb trail for a path.
#[derive(Args)]
pub struct TrailCommand {
    /// Route path to derive the trail from
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl TrailCommand {
    /// Execute the trail command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let trail = generate_breadcrumbs(&self.path);

        match self.format {
            OutputFormat::Table => print_trail_table(&trail)?,
            OutputFormat::Json => print_trail_json(&trail)?,
        }

        Ok(())
    }
}
