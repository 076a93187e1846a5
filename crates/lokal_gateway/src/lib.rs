// --- File: crates/lokal_gateway/src/lib.rs ---

// Declare modules within this crate
pub mod api; // Typed methods, one module per backend area
pub mod error; // Internal failure classification
pub mod gateway; // Request execution and response normalisation
pub mod models; // Wire records
pub mod outcome; // The {data} | {error} result
pub mod session; // Bearer token state and durable storage


pub use error::GatewayError;
pub use gateway::{Download, Gateway, RequestOptions};
pub use outcome::{ApiResult, NETWORK_ERROR_MESSAGE};
pub use session::{
    FileTokenStore, MemoryTokenStore, Session, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
