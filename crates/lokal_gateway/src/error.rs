// --- File: crates/lokal_gateway/src/error.rs ---
use lokal_common::LokalError;
use thiserror::Error;

use crate::outcome::NETWORK_ERROR_MESSAGE;

/// Why a gateway call did not produce data.
///
/// Callers normally see only [`GatewayError::user_message`], folded into an
/// [`ApiResult`](crate::ApiResult). The variants exist so logs and tests can
/// tell the cases apart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The backend answered with a non-2xx status.
    #[error("{message} (Status: {status})")]
    Http { status: u16, message: String },

    /// No response: DNS, refused connection, timeout, or a request that
    /// could not be built.
    #[error("Network failure: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to decode response (Status: {status}): {reason}")]
    Decode { status: u16, reason: String },

    /// The token store could not be read or written.
    #[error("Token storage failure: {0}")]
    Storage(String),
}

impl GatewayError {
    /// Builds the `Http` variant from an error response body, preferring
    /// the backend's `detail` string.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        // A body that is not JSON counts as an empty object.
        let detail = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(|detail| detail.as_str())
                    .map(str::to_string)
            });

        GatewayError::Http {
            status,
            message: detail.unwrap_or_else(|| status_message(status)),
        }
    }

    /// The string a user sees for this failure.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Http { message, .. } => message.clone(),
            GatewayError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            GatewayError::Decode { status, .. } => status_message(*status),
            GatewayError::Storage(reason) => format!("Storage error: {}", reason),
        }
    }
}

fn status_message(status: u16) -> String {
    format!("Error: {}", status)
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Network(err.to_string())
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        GatewayError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Storage(err.to_string())
    }
}

/// Convert GatewayError to LokalError
impl From<GatewayError> for LokalError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Http { message, .. } => LokalError::ApiError(message),
            GatewayError::Network(_) => LokalError::ApiError(NETWORK_ERROR_MESSAGE.to_string()),
            err @ GatewayError::Decode { .. } => LokalError::ApiError(err.user_message()),
            GatewayError::Storage(reason) => LokalError::StorageError(reason),
        }
    }
}
