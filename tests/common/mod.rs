//! Shared utilities for integration testing.

use order_gateway::config::AppConfig;
use order_gateway::http::HttpServer;
use order_gateway::lifecycle::Shutdown;

/// Start a gateway on an ephemeral port. Returns its base URL and the
/// shutdown coordinator that stops it.
pub async fn start_gateway(config: AppConfig) -> (String, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}

/// A non-pooled client so each test drives fresh connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
