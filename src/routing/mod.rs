//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RouteTable::register(method, pattern, handler)  (registry.rs)
//!     → Dispatcher::new(table)  (frozen, shared via Arc)
//!
//! Per request (method, path):
//!     → dispatcher.rs (scan candidates for the method)
//!     → matcher.rs (segment comparison, `:name` captures)
//!     → context.rs (fresh Context with captured params)
//!     → handler runs → Handled
//!     or nothing matched → NotFound
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable at runtime
//! - No regex, no globs: one `:name` consumes one segment
//! - Ambiguous patterns resolve in unspecified order
//! - No method-not-allowed: unknown method and unknown path both yield NotFound

pub mod context;
pub mod dispatcher;
pub mod matcher;
pub mod params;
pub mod registry;

pub use context::Context;
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use matcher::match_path;
pub use params::Params;
pub use registry::{HandlerFn, RouteTable};
