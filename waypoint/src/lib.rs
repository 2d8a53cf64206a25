#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # waypoint
//!
//! A library for deriving breadcrumb trails and maintaining bounded
//! client-side navigation history.
//!
//! The centerpiece is [`NavigationState`]: it observes a path owned by an
//! external [`Router`] collaborator, derives the breadcrumb trail for it,
//! keeps a sliding window of visited paths, and answers route-comparison
//! queries for menu highlighting. Every operation is synchronous and total
//! — the manager performs no I/O and cannot fail.
//!
//! ## Core Types
//!
//! - [`NavigationState`]: per-view navigation state manager
//! - [`BreadcrumbItem`] and [`generate_breadcrumbs`]: pure trail derivation
//! - [`Router`] and [`MemoryRouter`]: the external router seam
//! - [`Config`]: history window size and log level
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use waypoint::{Config, MemoryRouter, NavigationState};
//!
//! let mut router = MemoryRouter::new("/dashboard/leads");
//! let mut state = NavigationState::new("/dashboard/leads", &Config::default());
//!
//! // a navigation intent goes to the router, whose echo updates state
//! state.navigate_to(&mut router, "/dashboard/buyers");
//! while let Some(path) = router.poll_change() {
//!     state.on_route_change(&path);
//! }
//!
//! assert_eq!(state.current_path(), "/dashboard/buyers");
//! assert!(state.is_active_route("/dashboard"));
//! assert_eq!(state.breadcrumbs().last().unwrap().label, "buyers");
//! ```

pub mod breadcrumb;
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
pub mod state;

// Re-export key types at crate root for convenience
pub use breadcrumb::{generate_breadcrumbs, path_segments, BreadcrumbItem};
pub use config::{Config, CONFIG_PATH_ENV, DEFAULT_HISTORY_CAPACITY};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use router::{MemoryRouter, Router};
pub use state::NavigationState;
