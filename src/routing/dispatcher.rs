//! Request dispatch.
//!
//! # Responsibilities
//! - Scan the candidates registered for a method
//! - Build a fresh [`Context`] for the first matching pattern
//! - Invoke exactly one handler, or report `NotFound`
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over the method's patterns
//! - An unknown method and an unmatched path are the same outcome

use axum::http::request::Parts;

use crate::http::response::ResponseWriter;
use crate::routing::context::Context;
use crate::routing::matcher::match_path;
use crate::routing::registry::RouteTable;

/// Result of dispatching one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler ran and wrote the response.
    Handled,
    /// Nothing matched; no handler ran.
    NotFound,
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::Handled => "handled",
            DispatchOutcome::NotFound => "not_found",
        }
    }
}

/// Selects and runs the handler for each request.
///
/// Owns the route table, so registration is over once a dispatcher exists.
#[derive(Debug)]
pub struct Dispatcher {
    table: RouteTable,
}

impl Dispatcher {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Dispatch a request to the first registered pattern that matches `path`.
    pub fn dispatch(
        &self,
        method: &str,
        path: &str,
        request: &Parts,
        response: &mut ResponseWriter,
    ) -> DispatchOutcome {
        for (pattern, handler) in self.table.candidates(method) {
            if let Some(params) = match_path(pattern, path) {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    pattern = %pattern,
                    params = params.len(),
                    "Route matched"
                );
                let mut ctx = Context::new(params, request, response);
                handler(&mut ctx);
                return DispatchOutcome::Handled;
            }
        }

        DispatchOutcome::NotFound
    }
}

impl From<RouteTable> for Dispatcher {
    fn from(table: RouteTable) -> Self {
        Self::new(table)
    }
}
