//! Storage service subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → server.rs (Axum setup, middleware, graceful run loop)
//!     → handlers.rs (five /storage/... CRUD handlers)
//!     → store (locked in-memory collection)
//!     → JSON response
//! ```
//!
//! # Design Decisions
//! - Handlers return fixed JSON shapes; the 404 body is always
//!   `{"message": "Item not found"}`
//! - Route-param ids that fail integer parsing match nothing (404)
//! - The store is constructed by the server and shared via Arc, so tests
//!   can instantiate a fresh service per run

pub mod handlers;
pub mod server;

pub use server::StorageServer;
