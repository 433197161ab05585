//! Recipe Book - Main Server

use recipe_book::app::{init_tracing, RecipeBookApp};
use recipe_book::config::AppConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server)?;

    let app = RecipeBookApp::new(&config);
    let addr = config.server.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        address = %addr,
        live_path = %config.live.path,
        log_format = ?config.server.log_format,
        "Recipe Book listening"
    );

    axum::serve(listener, app.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Recipe Book stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
