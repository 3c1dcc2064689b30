use storefront::config::ServiceConfig;
use storefront::handler::product_routes;
use storefront::lifecycle::{setup_tracing, InventorySystem};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServiceConfig::from_env().map_err(|e| e.to_string())?;
    info!(addr = %config.addr, buffer_size = config.buffer_size, "Starting storefront");

    let system = InventorySystem::new(config.buffer_size);
    let app = product_routes(system.use_case());

    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {e}", config.addr))?;
    info!(addr = %config.addr, "Listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        error!(error = %e, "Server stopped with an error");
    }

    system.shutdown().await?;
    served.map_err(|e| e.to_string())?;

    info!("Storefront stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed.
        error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, draining connections");
}
