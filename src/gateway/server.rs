//! API gateway HTTP server.
//!
//! # Responsibilities
//! - Create the Axum router with the five public routes
//! - Own the outbound HTTP client and the injected storage base URL
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Serve with graceful shutdown

use std::time::Duration;

use axum::{
    body::Body,
    middleware,
    routing::{get, post},
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::gateway::handlers;
use crate::observability::metrics;

/// State injected into the forwarding handlers.
#[derive(Clone)]
pub struct AppState {
    /// Outbound HTTP client, shared across requests.
    pub client: Client<HttpConnector, Body>,

    /// Storage service base URL, no trailing slash.
    pub storage_base: String,
}

/// HTTP server for the API gateway.
pub struct GatewayServer {
    router: Router,
}

impl GatewayServer {
    /// Create a new gateway server.
    ///
    /// The storage base URL is taken from config once, here; handlers never
    /// consult the environment.
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let state = AppState {
            client,
            storage_base: config.gateway.storage_url.trim_end_matches('/').to_string(),
        };

        Self {
            router: Self::build_router(config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/api/item/{id}",
                get(handlers::get_item)
                    .put(handlers::update_item)
                    .delete(handlers::delete_item),
            )
            .route("/api/item", post(handlers::create_item))
            .route("/api/items", get(handlers::list_items))
            .with_state(state)
            .layer(middleware::from_fn_with_state(
                "gateway",
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
        tracing::info!(address = %addr, "API gateway starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("API gateway stopped");
        Ok(())
    }
}
