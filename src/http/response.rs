//! Response handling.
//!
//! # Responsibilities
//! - Buffer what a handler writes (status, headers, body)
//! - Convert the buffer into an axum response
//! - Render the generic not-found response
//!
//! # Design Decisions
//! - Status defaults to 200 OK
//! - Content-Type defaults to plain UTF-8 text when the handler sets none
//! - Not-found body matches the classic `404 page not found`, sent with
//!   `X-Content-Type-Options: nosniff`

use std::fmt;

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Default content type for handler output.
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Body rendered when no route matches.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Response buffer handed to handlers through the request context.
#[derive(Debug, Clone)]
pub struct ResponseWriter {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Set a header, replacing existing values under the same name.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Append raw bytes to the body.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.body.extend_from_slice(bytes);
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for ResponseWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.body.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl IntoResponse for ResponseWriter {
    fn into_response(self) -> Response {
        let ResponseWriter {
            status,
            mut headers,
            body,
        } = self;

        if !headers.contains_key(header::CONTENT_TYPE) {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF8));
        }

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

/// Generic 404 response, identical for unknown methods and unknown paths.
pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [
            (header::CONTENT_TYPE, TEXT_PLAIN_UTF8),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        NOT_FOUND_BODY,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn test_defaults_to_ok_plain_text() {
        let mut writer = ResponseWriter::new();
        writeln!(writer, "Welcome!").unwrap();
        assert_eq!(writer.body(), b"Welcome!\n");

        let response = writer.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_PLAIN_UTF8);
    }

    #[test]
    fn test_handler_headers_are_kept() {
        let mut writer = ResponseWriter::new();
        writer.set_status(StatusCode::CREATED);
        writer.insert_header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        writer.write_bytes(b"{}");

        let response = writer.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_not_found_response() {
        let response = not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_PLAIN_UTF8);
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }
}
