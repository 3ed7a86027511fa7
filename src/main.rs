//! # Tagfeed
//!
//! A Rust web service backing a hashtag tweet browser. It searches Twitter/X
//! for posts matching a hashtag, trying several query formulations in order
//! until one yields results, and exposes the results plus rate-limit status
//! over a small HTTP API.
//!
//! ## Environment Variables
//!
//! - `TWITTER_BEARER_TOKEN`: Twitter API bearer token (required for all
//!   provider-touching endpoints)
//! - `PORT`: Server port (defaults to 3000)
//! - `RUST_LOG`: Log level filter for `env_logger`
//!
//! ## API Endpoints
//!
//! - `GET /`: Plain-text banner
//! - `GET /health`: Service health status
//! - `GET /api/tweets?hashtag=<tag>&max_results=<n>`: Hashtag search with
//!   query fallback
//! - `GET /api/tweets/{id}`: Single tweet lookup
//! - `GET /api/rate-limit`: Current search quota

use axum::{routing::get, Router};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use tagfeed::config::get_server_port;
use tagfeed::handlers::{
    handle_health, handle_rate_limit, handle_root, handle_tweet_lookup, handle_tweets,
};

/// Main entry point for the tagfeed web service.
///
/// Initializes logging, builds the router with tracing and CORS middleware
/// (the API is consumed by a browser UI on another origin), and serves until
/// ctrl-c.
#[tokio::main]
async fn main() {
    // Initialize the logging system
    env_logger::init();

    // Build the HTTP application with all routes and middleware
    let app = Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/api/tweets", get(handle_tweets))
        .route("/api/tweets/:id", get(handle_tweet_lookup))
        .route("/api/rate-limit", get(handle_rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

    // Get the server port and bind address
    let port = get_server_port();
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    info!("Starting tagfeed server on {}", addr);

    // Bind to the address and start serving requests
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    info!("Shutdown signal received, stopping server");
}
