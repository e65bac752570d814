//! Two-tier item CRUD stack.
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                 ITEM SERVICES                  │
//!                    │                                                │
//!  Client ───────────┼─▶ gateway (/api/...) ──▶ storage (/storage/...)│
//!                    │        │                        │              │
//!                    │   routes.rs               store (Mutex<Vec>)   │
//!                    │   error table                                  │
//!                    │                                                │
//!                    │  Cross-cutting: config, observability,         │
//!                    │  lifecycle                                     │
//!                    └───────────────────────────────────────────────┘
//! ```
//!
//! Two daemons share this library: the storage service owns the in-memory
//! item collection and serves CRUD over `/storage/...`; the API gateway is
//! a stateless relay from `/api/...` onto the storage service, with a
//! fixed per-route error message substituted for upstream failures.

// Core subsystems
pub mod config;
pub mod gateway;
pub mod storage;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use gateway::GatewayServer;
pub use lifecycle::Shutdown;
pub use storage::StorageServer;
pub use store::ItemStore;
