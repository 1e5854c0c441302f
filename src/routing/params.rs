//! Captured path parameters.
//!
//! Values are always the raw path segment that was bound to a `:name`
//! pattern segment. Interpreting them as numbers or other types is the
//! handler's job, via [`Params::parse_or`] or
//! [`Params::parse_i64_saturating`].

use std::collections::HashMap;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Mapping from parameter name to the captured path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    inner: HashMap<String, String>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier capture under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(name.into(), value.into());
    }

    /// Get the raw captured value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Parse a captured value, returning `fallback` when the parameter is
    /// missing or malformed.
    pub fn parse_or<T: FromStr>(&self, name: &str, fallback: T) -> T {
        match self.get(name) {
            Some(raw) => match raw.parse() {
                Ok(value) => value,
                Err(_) => {
                    tracing::debug!(param = %name, value = %raw, "Parameter conversion failed, using fallback");
                    fallback
                }
            },
            None => fallback,
        }
    }

    /// Parse a captured value as `i64`, saturating at `i64::MIN`/`i64::MAX`
    /// when it is out of range. Missing or non-numeric values give `fallback`.
    pub fn parse_i64_saturating(&self, name: &str, fallback: i64) -> i64 {
        let Some(raw) = self.get(name) else {
            return fallback;
        };
        match raw.parse::<i64>() {
            Ok(value) => value,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => {
                    tracing::debug!(param = %name, value = %raw, "Parameter is not an integer, using fallback");
                    fallback
                }
            },
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
