//! Example application handlers.
//!
//! Thin consumers of the routing contract: they read captured parameters
//! from the [`Context`] and write plain-text output.

pub mod arithmetic;

use std::fmt::Write;

use crate::routing::{Context, RouteTable};

/// `GET /`
pub fn welcome(ctx: &mut Context<'_>) {
    let _ = writeln!(ctx.response(), "Welcome!");
}

/// Register the example routes.
pub fn register_examples(table: &mut RouteTable) {
    table.register("GET", "/", welcome);
    table.register("GET", "/plus/:number1/:number2", arithmetic::plus);
    table.register("GET", "/power/:number1/:number2", arithmetic::power);
}
