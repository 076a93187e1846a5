// --- File: crates/lokal_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP client construction
pub mod logging; // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{config_error, validation_error, LokalError};

// Re-export HTTP utilities for easier access
pub use http::client::{create_client, HTTP_CLIENT};

// Re-export logging utilities for easier access
pub use logging::{init_from_config, LogGuard};

// Shared plumbing for the Lokal client crates: the base error type, tracing
// setup and the reqwest client every gateway request goes through.
