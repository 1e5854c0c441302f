//! param-router binary.
//!
//! Serves the example routes (`/`, `/plus/:number1/:number2`,
//! `/power/:number1/:number2`) over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use param_router::config::{load_config, validate_config, ConfigError, RouterConfig};
use param_router::http::server;
use param_router::lifecycle::{signals, Shutdown};
use param_router::observability::{logging, metrics};
use param_router::{handlers, Dispatcher, HttpServer, RouteTable};

#[derive(Parser, Debug)]
#[command(name = "param-router", version)]
#[command(about = "Minimal HTTP router with named path parameters", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,

    /// Override observability.log_level
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Load the configuration file (if any) and apply command-line overrides.
    fn resolve_config(&self) -> Result<RouterConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RouterConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    logging::init(&config.observability)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "param-router starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validated above.
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    // Registration completes before the dispatcher is frozen and shared.
    let mut table = RouteTable::new();
    handlers::register_examples(&mut table);
    let dispatcher = Dispatcher::new(table);

    let listener = server::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown.clone());

    HttpServer::new(config, dispatcher)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!(graceful = shutdown.is_triggered(), "Shutdown complete");
    Ok(())
}
