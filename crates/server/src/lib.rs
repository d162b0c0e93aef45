pub mod api;
pub mod banner;
pub mod config;
pub mod error;
pub mod openapi;
pub mod router;
pub mod shutdown;

use std::future::IntoFuture;

use tokio::sync::oneshot;

pub use config::Config;
pub use router::create_router;

/// Serve the API until SIGINT/SIGTERM, then drain in-flight requests for at
/// most `config.shutdown_timeout`.
pub async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr();
    let app = create_router();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let (signal_tx, signal_rx) = oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown::shutdown_signal().await;
            let _ = signal_tx.send(());
        })
        .into_future();

    // Starts counting only once the shutdown signal has been received
    let timeout = config.shutdown_timeout;
    let deadline = async move {
        if signal_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(timeout).await;
    };

    tokio::select! {
        result = server => {
            result?;
            tracing::info!("Server gracefully stopped");
        }
        () = deadline => {
            tracing::warn!("Server forced to shutdown after {:?}", timeout);
        }
    }

    Ok(())
}
