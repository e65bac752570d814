//! OS signal handling.
//!
//! # Responsibilities
//! - Register the Ctrl+C handler (async-safe via Tokio)
//! - Translate the signal into a shutdown trigger

/// Wait for the interrupt signal (Ctrl+C).
pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
