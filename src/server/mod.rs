use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::get,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::data::SalesDataset;
use routes::{
    download_sales, get_sales, get_summary, get_territory, get_trend, get_weeks, health,
};
use state::AppState;

/// Build the API router. Split out from `serve` so tests can drive it
/// in-process without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/sales", get(get_sales))
        .route("/api/summary", get(get_summary))
        .route("/api/territory", get(get_territory))
        .route("/api/trend", get(get_trend))
        .route("/api/weeks", get(get_weeks))
        .route("/api/download", get(download_sales))
        .with_state(state)
}

/// Bind and serve the API until SIGINT/SIGTERM
pub async fn serve(config: Config, dataset: Arc<SalesDataset>) -> eyre::Result<()> {
    let cors = cors_layer(&config)?;
    let app = router(AppState::new(dataset)).layer(cors);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    info!(%address, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// The dashboard frontend is served from another origin, so GET requests
/// must be allowed across origins (configurable, wildcard by default)
fn cors_layer(config: &Config) -> eyre::Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Ok(if config.cors_allow_origin == "*" {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(config.cors_allow_origin.parse::<HeaderValue>()?)
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
