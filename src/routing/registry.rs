//! Route table.
//!
//! # Responsibilities
//! - Store handlers keyed by (method, pattern)
//! - Hand the dispatcher every pattern registered under a method
//!
//! # Design Decisions
//! - Two-level map: method → pattern → handler
//! - Re-registering a (method, pattern) pair silently replaces the handler
//! - Candidate order is unspecified (HashMap iteration)
//! - Patterns are stored as given; malformed ones simply never match

use std::collections::HashMap;
use std::fmt;

use crate::routing::context::Context;

/// Handler signature: produces its output through the context.
pub type HandlerFn = dyn Fn(&mut Context<'_>) + Send + Sync;

/// Mapping from HTTP method to pattern to handler.
#[derive(Default)]
pub struct RouteTable {
    handlers: HashMap<String, HashMap<String, Box<HandlerFn>>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method` and `pattern`, replacing any previous one.
    pub fn register<H>(&mut self, method: &str, pattern: &str, handler: H)
    where
        H: Fn(&mut Context<'_>) + Send + Sync + 'static,
    {
        let replaced = self
            .handlers
            .entry(method.to_string())
            .or_default()
            .insert(pattern.to_string(), Box::new(handler))
            .is_some();

        if replaced {
            tracing::debug!(method = %method, pattern = %pattern, "Route handler replaced");
        }
    }

    /// All (pattern, handler) pairs registered under `method`.
    ///
    /// Empty when nothing is registered for the method.
    pub fn candidates<'t>(&'t self, method: &str) -> impl Iterator<Item = (&'t str, &'t HandlerFn)> + 't {
        self.handlers
            .get(method)
            .into_iter()
            .flat_map(|patterns| patterns.iter())
            .map(|(pattern, handler)| (pattern.as_str(), handler.as_ref()))
    }

    /// Every registered (method, pattern) pair.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.handlers.iter().flat_map(|(method, patterns)| {
            patterns
                .keys()
                .map(move |pattern| (method.as_str(), pattern.as_str()))
        })
    }

    /// Number of registered (method, pattern) pairs.
    pub fn len(&self) -> usize {
        self.handlers.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut routes: Vec<_> = self.routes().collect();
        routes.sort_unstable();
        f.debug_struct("RouteTable").field("routes", &routes).finish()
    }
}
