//! Per-request handler context.

use axum::http::request::Parts;
use axum::http::Method;

use crate::http::response::ResponseWriter;
use crate::routing::params::Params;

/// State handed to a single handler invocation.
///
/// Built by the dispatcher for every matched request and dropped when the
/// handler returns. Nothing else holds it while the handler runs.
pub struct Context<'a> {
    params: Params,
    request: &'a Parts,
    response: &'a mut ResponseWriter,
}

impl<'a> Context<'a> {
    pub fn new(params: Params, request: &'a Parts, response: &'a mut ResponseWriter) -> Self {
        Self {
            params,
            request,
            response,
        }
    }

    /// Parameters captured from the path.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Shortcut for `self.params().get(name)`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// The incoming request head.
    pub fn request(&self) -> &Parts {
        self.request
    }

    pub fn method(&self) -> &Method {
        &self.request.method
    }

    pub fn path(&self) -> &str {
        self.request.uri.path()
    }

    /// Response under construction.
    pub fn response(&mut self) -> &mut ResponseWriter {
        self.response
    }
}
