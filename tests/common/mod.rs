//! Shared utilities for integration tests.

use std::net::SocketAddr;

use param_router::config::RouterConfig;
use param_router::{handlers, Dispatcher, HttpServer, RouteTable, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server for `table` on 127.0.0.1 with an OS-assigned port.
///
/// The listener is bound before this returns, so requests can be sent
/// immediately.
pub async fn start_server(table: RouteTable) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = RouterConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, Dispatcher::new(table));

    let handle = tokio::spawn(async move {
        server.run(listener, server_shutdown).await.unwrap();
    });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Start a server with the example routes registered.
#[allow(dead_code)]
pub async fn start_example_server() -> TestServer {
    let mut table = RouteTable::new();
    handlers::register_examples(&mut table);
    start_server(table).await
}

/// A client that never reuses connections or consults proxy settings.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
