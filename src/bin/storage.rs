//! Storage service daemon.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use item_services::config::{loader, AppConfig};
use item_services::lifecycle::Shutdown;
use item_services::observability::{logging, metrics};
use item_services::StorageServer;

#[derive(Parser)]
#[command(name = "storage", about = "In-memory item storage service")]
struct Args {
    /// Path to the TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config: AppConfig = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => loader::default_config()?,
    };

    logging::init(&config.observability.log_level);
    tracing::info!(
        bind_address = %config.storage.bind_address,
        seed_items = config.storage.seed_items,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.storage.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.listen_for_ctrl_c();

    StorageServer::new(&config)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
