//! Route pattern matching.
//!
//! # Responsibilities
//! - Compare a request path against a registered pattern
//! - Capture `:name` segments into [`Params`]
//!
//! # Design Decisions
//! - Identical strings match without splitting
//! - Segment counts must agree (no globs, no optional segments)
//! - Captured values are verbatim path segments (no percent-decoding)
//! - No regex to guarantee O(n) matching

use crate::routing::params::Params;

/// Marks a pattern segment as a named capture.
pub const PARAM_MARKER: char = ':';

/// Match `path` against `pattern`.
///
/// Returns the captured parameters on success, `None` otherwise. A capture
/// may bind an empty value (trailing slash) and a bare `:` segment binds
/// under the empty name.
pub fn match_path(pattern: &str, path: &str) -> Option<Params> {
    if pattern == path {
        return Some(Params::new());
    }

    let patterns: Vec<&str> = pattern.split('/').collect();
    let paths: Vec<&str> = path.split('/').collect();

    if patterns.len() != paths.len() {
        return None;
    }

    let mut params = Params::new();
    for (expected, actual) in patterns.iter().zip(paths.iter()) {
        if expected == actual {
            continue;
        }
        match expected.strip_prefix(PARAM_MARKER) {
            Some(name) => params.insert(name, *actual),
            None => return None,
        }
    }

    Some(params)
}
