//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router whose fallback feeds the dispatcher
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Render dispatch outcomes as HTTP responses
//!
//! # Design Decisions
//! - Every request goes through one fallback handler; Axum's own routing is unused
//! - Request bodies are never read
//! - Graceful shutdown via the lifecycle stop flag

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ListenerConfig, RouterConfig};
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::http::response::{not_found, ResponseWriter};
use crate::lifecycle::shutdown::{self, ShutdownSignal};
use crate::observability::metrics;
use crate::routing::{DispatchOutcome, Dispatcher};

/// Error type for server startup and serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

/// HTTP transport in front of a [`Dispatcher`].
pub struct HttpServer {
    router: Router,
    config: RouterConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving the routes held by `dispatcher`.
    pub fn new(config: RouterConfig, dispatcher: Dispatcher) -> Self {
        let mut routes: Vec<_> = dispatcher.table().routes().collect();
        routes.sort_unstable();
        for (method, pattern) in &routes {
            tracing::info!(method = %method, pattern = %pattern, "Route registered");
        }

        let state = AppState {
            dispatcher: Arc::new(dispatcher),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The fully layered router, for serving it elsewhere or calling it in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown_rx` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: ShutdownSignal,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

/// Bind the configured listener address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: config.bind_address.clone(),
            source,
        })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listening for connections");
    }
    Ok(listener)
}

/// Feed a request to the dispatcher and render the outcome.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let (parts, _body) = request.into_parts();
    let method = parts.method.as_str();
    let path = parts.uri.path();

    let mut writer = ResponseWriter::new();
    let outcome = state.dispatcher.dispatch(method, path, &parts, &mut writer);
    metrics::record_request(method, outcome, start);

    match outcome {
        DispatchOutcome::Handled => writer.into_response(),
        DispatchOutcome::NotFound => {
            tracing::warn!(
                request_id = %request_id(&parts.headers),
                method = %method,
                path = %path,
                "No route matched"
            );
            not_found()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::NOT_FOUND_BODY;
    use crate::routing::{Context, RouteTable};
    use axum::http::{header, StatusCode};
    use std::fmt::Write;
    use tower::ServiceExt;

    fn server() -> HttpServer {
        let mut table = RouteTable::new();
        table.register("GET", "/hello/:name", |ctx: &mut Context<'_>| {
            let name = ctx.param("name").unwrap_or_default().to_string();
            let _ = write!(ctx.response(), "hello {name}");
        });
        HttpServer::new(RouterConfig::default(), Dispatcher::new(table))
    }

    async fn send(router: Router, method: &str, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        router.oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_matched_route_renders_handler_output() {
        let response = send(server().router(), "GET", "/hello/world").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(X_REQUEST_ID));
        assert_eq!(body_text(response).await, "hello world");
    }

    #[tokio::test]
    async fn test_unmatched_path_is_404() {
        let response = send(server().router(), "GET", "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(body_text(response).await, NOT_FOUND_BODY);
    }

    #[tokio::test]
    async fn test_wrong_method_is_404_not_405() {
        let response = send(server().router(), "POST", "/hello/world").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, NOT_FOUND_BODY);
    }

    #[tokio::test]
    async fn test_query_string_is_ignored_for_matching() {
        let response = send(server().router(), "GET", "/hello/world?x=1").await;
        assert_eq!(body_text(response).await, "hello world");
    }

    #[tokio::test]
    async fn test_client_request_id_is_propagated() {
        let request = Request::builder()
            .uri("/hello/id")
            .header(X_REQUEST_ID, "client-supplied")
            .body(Body::empty())
            .unwrap();
        let response = server().router().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[X_REQUEST_ID], "client-supplied");
    }

    #[tokio::test]
    async fn test_bind_rejects_bad_address() {
        let config = ListenerConfig {
            bind_address: "not-an-address".into(),
        };
        let err = bind(&config).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
    }
}
