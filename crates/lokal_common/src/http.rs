// --- File: crates/lokal_common/src/http.rs ---

// Include the client module
pub mod client;
