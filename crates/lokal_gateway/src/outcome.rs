// --- File: crates/lokal_gateway/src/outcome.rs ---
use lokal_common::LokalError;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// The message shown for any failure that produced no HTTP response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Result of a gateway call: exactly one of data or a user-facing error
/// string. Serializes as `{"data": ...}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiResult<T> {
    Data(T),
    Error(String),
}

impl<T> ApiResult<T> {
    pub fn is_data(&self) -> bool {
        matches!(self, ApiResult::Data(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResult::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Data(data) => Some(data),
            ApiResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResult::Data(_) => None,
            ApiResult::Error(message) => Some(message),
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResult::Data(data) => Some(data),
            ApiResult::Error(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            ApiResult::Data(data) => ApiResult::Data(f(data)),
            ApiResult::Error(message) => ApiResult::Error(message),
        }
    }

    /// Lifts the error string into [`LokalError::ApiError`] so callers can
    /// use `?`.
    pub fn into_result(self) -> Result<T, LokalError> {
        match self {
            ApiResult::Data(data) => Ok(data),
            ApiResult::Error(message) => Err(LokalError::ApiError(message)),
        }
    }
}

impl<T> From<Result<T, GatewayError>> for ApiResult<T> {
    fn from(result: Result<T, GatewayError>) -> Self {
        match result {
            Ok(data) => ApiResult::Data(data),
            Err(err) => ApiResult::Error(err.user_message()),
        }
    }
}
