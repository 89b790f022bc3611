//! Kumawat Traders Storefront - Catalog and admin API.
//!
//! This binary serves the storefront API on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response bodies
//! - Transient in-memory stores, seeded at startup (nothing is durable;
//!   a restart resets the catalog and logs every session out)
//! - Header-token sessions (`x-session-id`), minted at login
//! - Public catalog reads, admin-gated product writes
//!
//! The cart and checkout live entirely on the client side (see the
//! `kumawat-traders-cart` crate); placing an order never reaches this
//! server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use kumawat_traders_storefront::config::StorefrontConfig;
use kumawat_traders_storefront::routes;
use kumawat_traders_storefront::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kumawat_traders_storefront=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Build application state (seeds the in-memory stores)
    let state = AppState::new(config.clone());
    tracing::info!(products = state.products().len(), "Store seeded");

    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
