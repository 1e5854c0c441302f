//! Arithmetic example handlers.
//!
//! Operands come from `:number1` and `:number2`. Values beyond the `i64`
//! range saturate at `i64::MIN`/`i64::MAX`; anything else that is not an
//! integer (non-numeric, empty) is treated as 0 so a bad path still
//! produces an answer instead of an error.

use std::fmt::Write;

use crate::routing::Context;

/// Value used when an operand is not an integer at all.
pub const OPERAND_FALLBACK: i64 = 0;

fn operands(ctx: &Context<'_>) -> (i64, i64) {
    let params = ctx.params();
    (
        params.parse_i64_saturating("number1", OPERAND_FALLBACK),
        params.parse_i64_saturating("number2", OPERAND_FALLBACK),
    )
}

/// Render a float in shortest form, switching to exponent notation
/// (`1.048576e+06`, `1e-05`) when the decimal exponent is below -4 or
/// at least 6.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f64::INFINITY {
        return "+Inf".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Inf".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.048576e6".
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return value.to_string(),
    };

    if (-4..6).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// `GET /plus/:number1/:number2`
pub fn plus(ctx: &mut Context<'_>) {
    let (n1, n2) = operands(ctx);
    // Writing into the in-memory buffer cannot fail.
    let _ = write!(ctx.response(), "{} + {} = {}", n1, n2, n1.wrapping_add(n2));
}

/// `GET /power/:number1/:number2`
pub fn power(ctx: &mut Context<'_>) {
    let (n1, n2) = operands(ctx);
    let result = (n1 as f64).powf(n2 as f64);
    let _ = write!(ctx.response(), "{} ^ {} = {}", n1, n2, format_float(result));
}
