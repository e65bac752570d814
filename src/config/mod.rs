//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overrides, e.g. STORAGE_SERVICE_URL)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → injected into servers at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; both daemons read the same file and
//!   use their own section
//! - All fields have defaults to allow minimal configs
//! - The storage URL is resolved once at load time and injected into the
//!   gateway at construction, never read from the environment per request
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::GatewayConfig;
pub use schema::ObservabilityConfig;
pub use schema::StorageConfig;
pub use schema::TimeoutConfig;
