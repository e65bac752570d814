//! API gateway subsystem.
//!
//! # Data Flow
//! ```text
//! Client request (/api/...)
//!     → server.rs (Axum setup, middleware, hyper client)
//!     → handlers.rs (path substitution, one forwarded call)
//!     → storage service (/storage/...)
//!     → 2xx: relay status + body unchanged
//!     → non-2xx / transport error: routes.rs fixed per-route message
//! ```
//!
//! # Design Decisions
//! - The gateway holds no item state and never inspects payloads
//! - Exactly one outbound call per inbound request: no retries, no
//!   caching, no circuit breaking
//! - Upstream error bodies are discarded and replaced by the per-route
//!   message table in routes.rs

pub mod handlers;
pub mod routes;
pub mod server;

pub use routes::GatewayRoute;
pub use server::GatewayServer;
