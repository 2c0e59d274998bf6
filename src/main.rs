use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;

use sales_dashboard_api::config;
use sales_dashboard_api::data::SalesDataset;
use sales_dashboard_api::logging;
use sales_dashboard_api::server;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging
    if let Err(e) = logging::init_logging(env!("CARGO_PKG_NAME")) {
        eprintln!("Failed to initialize logging: {}", e);
        return Err(e);
    }

    // Load configuration
    let cfg = config::Config::load();
    info!(
        port = cfg.port,
        dataset_seed = cfg.dataset_seed,
        "Configuration loaded and logging initialized"
    );

    // Generate the dataset once, before the server accepts requests
    let dataset = Arc::new(SalesDataset::generate(cfg.dataset_seed));

    server::serve(cfg, dataset).await
}
