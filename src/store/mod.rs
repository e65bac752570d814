//! In-memory item store subsystem.
//!
//! # Data Flow
//! ```text
//! storage handlers
//!     → store.rs (ItemStore: locked Vec of items)
//!     → item.rs (Item model: typed id + free-form fields)
//! ```
//!
//! # Design Decisions
//! - The store is an owned service object shared via Arc, never a global
//! - One mutex guards the whole collection; every operation is a single
//!   lock-held critical section, so find-then-mutate stays atomic
//! - Insertion order is preserved (Vec) for listing

pub mod item;
pub mod store;

pub use item::Item;
pub use store::ItemStore;
