//! API gateway daemon.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use item_services::config::{loader, AppConfig};
use item_services::gateway::GatewayServer;
use item_services::lifecycle::Shutdown;
use item_services::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "gateway", about = "Item API gateway")]
struct Args {
    /// Path to the TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // STORAGE_SERVICE_URL is folded into the config here, once; handlers
    // receive the resolved value at construction.
    let config: AppConfig = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => loader::default_config()?,
    };

    logging::init(&config.observability.log_level);
    tracing::info!(
        bind_address = %config.gateway.bind_address,
        storage_url = %config.gateway.storage_url,
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

    let listener = TcpListener::bind(&config.gateway.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.listen_for_ctrl_c();

    GatewayServer::new(&config)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
