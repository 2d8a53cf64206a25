//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CheckCommand, CompletionsCommand, ReplayCommand, TrailCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for breadcrumb trails and navigation sessions.
#[derive(Parser)]
#[command(name = "waypoint")]
#[command(version, about = "Inspect breadcrumb trails and replay navigation sessions", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the configuration file location
    #[arg(long, value_name = "PATH", global = true, env = "WAYPOINT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the breadcrumb trail for a path
    Trail(TrailCommand),

    /// Replay a navigation session and print the final state
    Replay(ReplayCommand),

    /// Check whether a route is active for a given path
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
