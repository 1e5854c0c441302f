//! Minimal HTTP request router with named path parameters.
//!
//! Routes are registered per HTTP method as `/`-separated patterns whose
//! `:name` segments capture one path segment each. The [`Dispatcher`] picks
//! the first matching pattern for a request and runs its handler with a
//! fresh [`Context`].
//!
//! ```no_run
//! use std::fmt::Write;
//! use param_router::{Context, Dispatcher, RouteTable};
//!
//! let mut table = RouteTable::new();
//! table.register("GET", "/hello/:name", |ctx: &mut Context<'_>| {
//!     let name = ctx.param("name").unwrap_or_default().to_string();
//!     let _ = write!(ctx.response(), "hello {name}");
//! });
//! let dispatcher = Dispatcher::new(table);
//! ```

// Core
pub mod routing;

// Transport and example application
pub mod handlers;
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::RouterConfig;
pub use http::{HttpServer, ResponseWriter};
pub use lifecycle::Shutdown;
pub use routing::{Context, DispatchOutcome, Dispatcher, Params, RouteTable};
