//! Action router (v1)
//!
//! Resolves request paths to registered actions by naming convention and
//! reports the outcome as JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request ──▶ http server ──▶ resolution cache ──▶ routing engine
//!                                                                 │
//!                                        registry (ArcSwap) ◀─────┘
//!                                               ▲
//!                      registry file ──▶ watcher ┘
//!
//!     Client Response ◀── action JSON | 404 expected-action diagnostics
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use action_router::config::loader::load_config;
use action_router::config::watcher::RegistryWatcher;
use action_router::config::RouterConfig;
use action_router::http::HttpServer;
use action_router::lifecycle::{bootstrap, Shutdown};
use action_router::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "action-router")]
#[command(about = "Convention-based action routing server", long_about = None)]
struct Args {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    logging::init_logging(&config.observability);
    tracing::info!("action-router v{} starting", env!("CARGO_PKG_VERSION"));

    let booted = bootstrap(config)?;
    let config = booted.config.clone();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        actions = booted.registry.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // The watcher stops when dropped, so it lives until main returns.
    let (registry_updates, _watcher) = match (&config.registry.path, config.registry.watch) {
        (Some(path), true) => {
            let (watcher, updates) =
                RegistryWatcher::new(Path::new(path), config.registry.clone(), booted.convention.clone());
            (updates, Some(watcher.run()?))
        }
        _ => {
            let (_, updates) = mpsc::unbounded_channel();
            (updates, None)
        }
    };

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config, booted.paths, booted.registry);
    server.run(listener, registry_updates, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
