//! Command to check whether a route is active for a given path.
//!
//! Mirrors the navigation state's menu-highlighting queries so shell
//! scripts can test them: prefix match by default, exact match with
//! `--exact`. Exits 0 when the check passes and 1 when it fails.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use waypoint::NavigationState;

/// Check whether a route is active for a given path.
#[derive(Args)]
pub struct CheckCommand {
    /// Route href to test
    #[arg(value_name = "HREF")]
    pub href: String,

    /// Current path to test against
    #[arg(long, value_name = "PATH")]
    pub path: String,

    /// Require an exact path match instead of a prefix match
    #[arg(long)]
    pub exact: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let state = NavigationState::with_capacity(&self.path, 1);

        let matched = if self.exact {
            state.is_current_path(&self.href)
        } else {
            state.is_active_route(&self.href)
        };

        let kind = if self.exact { "current" } else { "active" };
        if matched {
            if !global.quiet {
                println!("{} is {kind} for {}", self.href, self.path);
            }
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Check failed: {} is not {kind} for {}",
                self.href, self.path
            )))
        }
    }
}
