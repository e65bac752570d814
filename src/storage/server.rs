//! Storage service HTTP server.
//!
//! # Responsibilities
//! - Create the Axum router with the five CRUD routes
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::observability::metrics;
use crate::storage::handlers;
use crate::store::ItemStore;

/// HTTP server for the storage service.
pub struct StorageServer {
    router: Router,
}

impl StorageServer {
    /// Create a new storage server, building its own store from config.
    pub fn new(config: &AppConfig) -> Self {
        let store = if config.storage.seed_items {
            ItemStore::seeded()
        } else {
            ItemStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    /// Create a storage server over an existing store.
    pub fn with_store(config: &AppConfig, store: Arc<ItemStore>) -> Self {
        Self {
            router: Self::build_router(config, store),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, store: Arc<ItemStore>) -> Router {
        Router::new()
            .route(
                "/storage/item/{id}",
                get(handlers::get_item)
                    .put(handlers::update_item)
                    .delete(handlers::delete_item),
            )
            .route("/storage/item", post(handlers::create_item))
            .route("/storage/items", get(handlers::list_items))
            .with_state(store)
            .layer(middleware::from_fn_with_state(
                "storage",
                metrics::track_requests,
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Storage service starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Storage service stopped");
        Ok(())
    }
}
