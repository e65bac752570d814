//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Respect RUST_LOG when set, fall back to the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Environment filter wins over config so operators can raise verbosity
//!   without touching the config file

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `default_level` is the per-crate level used when RUST_LOG is unset,
/// e.g. "info" or "debug".
pub fn init(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("item_services={default_level},tower_http={default_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
