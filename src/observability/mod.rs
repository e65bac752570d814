//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Both daemons produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (per-request counters and latency histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through both services (x-request-id header)
//! - Metrics are cheap (atomic increments) and recorded by one shared
//!   middleware rather than per-handler calls
//! - The exporter is opt-in via config

pub mod logging;
pub mod metrics;
