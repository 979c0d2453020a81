//! Crewline API Server library
//!
//! Core server implementation for Crewline's HTTP API

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use state::AppState;

/// Start the Crewline API server
pub async fn start_server(
    config: ServerConfig,
    provider: Box<dyn crewline_billing::BillingProvider>,
) -> ServerResult<()> {
    use axum::Router;
    use std::net::SocketAddr;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;

    tracing::info!("Starting Crewline API Server on {}", config.bind_address);

    // Parse address
    let addr: SocketAddr = config.bind_address.parse()?;

    // Create app state
    let state = AppState::new(config, provider);

    // Build router
    let app = Router::new()
        .nest("/api/v1", handlers::routes(state.clone()))
        .layer(CorsLayer::permissive()) // TODO: build from config.cors
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
