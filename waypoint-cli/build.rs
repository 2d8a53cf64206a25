//! Build script for waypoint-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("waypoint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect breadcrumb trails and replay navigation sessions")
        .long_about(
            "Command-line tool for deriving breadcrumb trails and replaying recorded navigation sessions",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Override the configuration file location")
                .value_name("PATH")
                .global(true)
                .env("WAYPOINT_CONFIG"),
        )
        .subcommands(vec![
            Command::new("trail")
                .about("Print the breadcrumb trail for a path")
                .long_about("Derive and print the breadcrumb trail for a route path"),
            Command::new("replay")
                .about("Replay a navigation session and print the final state")
                .long_about(
                    "Feed recorded navigation entries through the state manager and print \
                     the resulting path, breadcrumbs, and history window",
                ),
            Command::new("check")
                .about("Check whether a route is active for a given path")
                .long_about("Exit 0 when the route matches (prefix or exact), 1 otherwise"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main waypoint.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("waypoint.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
