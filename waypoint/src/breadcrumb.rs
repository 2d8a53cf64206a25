//! Breadcrumb trail derivation.
//!
//! This module turns a route path string into an ordered breadcrumb trail:
//! a leading "Home" item followed by one item per path segment, each
//! carrying the absolute href up to and including that segment. Derivation
//! is a pure, total function — any string input (including the empty
//! string) produces a valid trail.

use serde::{Deserialize, Serialize};

/// A single entry in a breadcrumb trail.
///
/// # Examples
///
/// ```
/// use waypoint::generate_breadcrumbs;
///
/// let trail = generate_breadcrumbs("/dashboard/leads");
/// assert_eq!(trail[2].label, "leads");
/// assert_eq!(trail[2].href, "/dashboard/leads");
/// assert!(trail[2].is_active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Human-readable segment name.
    pub label: String,
    /// Absolute path from the root up to and including this segment.
    pub href: String,
    /// Whether this item corresponds to the full current path. Exactly the
    /// last item of a trail is active.
    pub is_active: bool,
}

/// Split a route path into its non-empty segments.
///
/// Any query (`?`) or fragment (`#`) suffix is stripped first; only the
/// path component is considered. Empty segments are discarded, which
/// collapses leading, trailing, and repeated slashes.
///
/// # Examples
///
/// ```
/// use waypoint::path_segments;
///
/// assert_eq!(path_segments("/dashboard/leads"), vec!["dashboard", "leads"]);
/// assert_eq!(path_segments("///dashboard///leads///"), vec!["dashboard", "leads"]);
/// assert_eq!(path_segments("/search?q=loft#results"), vec!["search"]);
/// assert!(path_segments("/").is_empty());
/// ```
#[must_use]
pub fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

/// Derive the breadcrumb trail for a route path.
///
/// The trail always starts with a "Home" item (`href = "/"`); for a path
/// with `n` non-empty segments the result has exactly `n + 1` items, and
/// exactly the last item is active. Labels are the raw segments with every
/// `-` and `_` replaced by a single space — casing, `@`, and
/// percent-encoding are preserved verbatim.
///
/// # Examples
///
/// ```
/// use waypoint::generate_breadcrumbs;
///
/// let trail = generate_breadcrumbs("/user-profile/settings_page");
/// assert_eq!(trail.len(), 3);
/// assert_eq!(trail[0].label, "Home");
/// assert_eq!(trail[1].label, "user profile");
/// assert_eq!(trail[2].label, "settings page");
/// ```
#[must_use]
pub fn generate_breadcrumbs(path: &str) -> Vec<BreadcrumbItem> {
    let segments = path_segments(path);

    let mut trail = Vec::with_capacity(segments.len() + 1);
    trail.push(BreadcrumbItem {
        label: "Home".to_string(),
        href: "/".to_string(),
        is_active: segments.is_empty(),
    });

    let mut href = String::new();
    for (i, segment) in segments.iter().enumerate() {
        href.push('/');
        href.push_str(segment);
        trail.push(BreadcrumbItem {
            label: humanize_segment(segment),
            href: href.clone(),
            is_active: i == segments.len() - 1,
        });
    }

    trail
}

/// Turn a raw path segment into a display label.
///
/// Only `-` and `_` are replaced (each with a single space); everything
/// else passes through unchanged.
fn humanize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect()
}
