//! Tickrank API Server
//!
//! HTTP API with health check, metrics, historical closes and on-demand
//! ticker evaluation. Stateless; can be horizontally scaled.

use dotenvy::dotenv;
use tickrank::config::Config;
use tickrank::core::http::start_server;
use tickrank::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;
    let env = tickrank::config::get_environment();
    info!("Starting Tickrank API Server");
    info!(environment = %env, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(&config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
