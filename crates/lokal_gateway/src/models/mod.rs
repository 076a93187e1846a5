// --- File: crates/lokal_gateway/src/models/mod.rs ---
//! Wire records exchanged with the backend.
//!
//! Field names match the JSON exactly. Enumerations travel as
//! SCREAMING_CASE strings.

use serde::{Deserialize, Serialize};

pub mod admin;
pub mod agent;
pub mod auth;
pub mod electricity;
pub mod referral;
pub mod settings;
pub mod timestamp;
pub mod transaction;
pub mod user;
pub mod wallet;
pub mod wifi;

pub use admin::*;
pub use agent::*;
pub use auth::*;
pub use electricity::*;
pub use referral::*;
pub use settings::*;
pub use transaction::*;
pub use user::*;
pub use wallet::*;
pub use wifi::*;

/// The `{"message": "..."}` acknowledgement most mutations return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
