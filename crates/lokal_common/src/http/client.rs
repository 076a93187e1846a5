// --- File: crates/lokal_common/src/http/client.rs ---
use lokal_config::DEFAULT_TIMEOUT_SECS;
use once_cell::sync::Lazy;
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// A shared HTTP client with the default timeout. Falls back to an
/// unconfigured client if the builder fails.
pub static HTTP_CLIENT: Lazy<Client> =
    Lazy::new(|| create_client(DEFAULT_TIMEOUT_SECS, true).unwrap_or_else(|_| Client::new()));

/// Creates a new HTTP client with custom configuration.
///
/// # Arguments
///
/// * `timeout_secs` - The timeout in seconds for the client
/// * `follow_redirects` - Whether the client should follow redirects
pub fn create_client(timeout_secs: u64, follow_redirects: bool) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("lokal-client/", env!("CARGO_PKG_VERSION")))
        .redirect(if follow_redirects {
            reqwest::redirect::Policy::default()
        } else {
            reqwest::redirect::Policy::none()
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_with_and_without_redirects() {
        assert!(create_client(5, true).is_ok());
        assert!(create_client(5, false).is_ok());
    }
}
