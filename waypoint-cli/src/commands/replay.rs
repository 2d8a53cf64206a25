//! Replay command implementation.
//!
//! This module implements the `replay` command, which feeds a recorded
//! navigation session through a [`NavigationState`] wired to a
//! [`MemoryRouter`] and prints the resulting state.
//!
//! Session files are newline-separated entries: a route path per line, or
//! the literal `back` for a soft back. Blank lines and `#` comments are
//! skipped.

use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::utils::{load_configuration, print_trail_table, GlobalOptions};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use waypoint::{BreadcrumbItem, MemoryRouter, NavigationState};

/// Replay a navigation session and print the final state.
#[derive(Args)]
pub struct ReplayCommand {
    /// Session file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Path the session starts at
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub start: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

/// Final session state, for JSON output.
#[derive(Serialize)]
struct SessionReport {
    current_path: String,
    breadcrumbs: Vec<BreadcrumbItem>,
    history: Vec<String>,
}

impl ReplayCommand {
    /// Execute the replay command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = waypoint::init_logger(global.verbose, global.quiet);

        let input = self.read_session()?;

        let mut router = MemoryRouter::new(self.start.as_str());
        let mut state = NavigationState::new(&self.start, &config);

        for (lineno, line) in input.lines().enumerate() {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }

            if entry == "back" {
                state.navigate_back(&mut router);
            } else {
                state.navigate_to(&mut router, entry);
            }

            while let Some(path) = router.poll_change() {
                logger.debug(&format!("line {}: -> {path}", lineno + 1));
                state.on_route_change(&path);
            }
        }

        match self.format {
            OutputFormat::Table => {
                println!("current: {}", state.current_path());
                println!();
                print_trail_table(state.breadcrumbs())?;
                println!();
                println!("history (oldest first):");
                for path in state.history() {
                    println!("  {path}");
                }
            }
            OutputFormat::Json => {
                let report = SessionReport {
                    current_path: state.current_path().to_string(),
                    breadcrumbs: state.breadcrumbs().to_vec(),
                    history: state.history().iter().cloned().collect(),
                };
                let json = serde_json::to_string_pretty(&report).map_err(|e| {
                    CliError::InvalidArguments(format!("JSON serialization failed: {e}"))
                })?;
                println!("{json}");
            }
        }

        Ok(())
    }

    /// Read the session entries from the file argument or stdin.
    fn read_session(&self) -> Result<String, CliError> {
        match &self.file {
            Some(path) => Ok(fs::read_to_string(path)?),
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}
