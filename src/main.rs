//! Order Gateway
//!
//! A small HTTP backend for a storefront that hands checkout off to
//! WhatsApp, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────┐
//!                      │              ORDER GATEWAY               │
//!                      │                                          │
//!   Client Request     │  ┌─────────┐    ┌──────────────────┐     │
//!   ──────────────────►│  │  http   │───►│  order           │     │
//!                      │  │ server  │    │  validate/format │     │
//!   Client Response    │  └─────────┘    └──────────────────┘     │
//!   ◄──────────────────│       │                                  │
//!                      │  ┌────┴─────────────────────────────┐    │
//!                      │  │       Cross-Cutting Concerns     │    │
//!                      │  │  ┌────────┐ ┌─────────────────┐  │    │
//!                      │  │  │ config │ │    lifecycle    │  │    │
//!                      │  │  │        │ │ signals/shutdown│  │    │
//!                      │  │  └────────┘ └─────────────────┘  │    │
//!                      │  └──────────────────────────────────┘    │
//!                      └──────────────────────────────────────────┘
//! ```
//!
//! Endpoints:
//! - GET  /get_whatsapp — the configured WhatsApp number
//! - POST /submit_order — validate an order, return a pre-filled wa.me link
//! - GET  /health       — liveness probe

use std::path::PathBuf;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use order_gateway::config::load_config;
use order_gateway::http::HttpServer;
use order_gateway::lifecycle::{signals, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (optional TOML file as first argument)
    let config_path: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    // Initialize tracing subscriber; RUST_LOG overrides the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.observability.filter_directives().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("order-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        whatsapp_number = %config.whatsapp.number,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Wire OS signals to the shutdown coordinator
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::listen(&shutdown).await;
    });

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
