// --- File: crates/lokal_gateway/src/gateway.rs ---
use std::sync::Arc;

use lokal_common::{create_client, LokalError, HTTP_CLIENT};
use lokal_config::AppConfig;
use reqwest::header::{HeaderMap, HeaderName, AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::outcome::ApiResult;
use crate::session::Session;

// --- Request options ---

/// Verb, optional JSON body and query parameters for one call.
#[derive(Debug, Clone)]
pub struct RequestOptions<B = ()> {
    method: Method,
    body: Option<B>,
    query: Vec<(String, String)>,
}

impl RequestOptions<()> {
    pub fn get() -> Self {
        Self::bodiless(Method::GET)
    }

    pub fn delete() -> Self {
        Self::bodiless(Method::DELETE)
    }

    pub fn post_empty() -> Self {
        Self::bodiless(Method::POST)
    }

    pub fn put_empty() -> Self {
        Self::bodiless(Method::PUT)
    }

    fn bodiless(method: Method) -> Self {
        Self {
            method,
            body: None,
            query: Vec::new(),
        }
    }
}

impl<B: Serialize> RequestOptions<B> {
    pub fn post(body: B) -> Self {
        Self::with_body(Method::POST, body)
    }

    pub fn put(body: B) -> Self {
        Self::with_body(Method::PUT, body)
    }

    fn with_body(method: Method, body: B) -> Self {
        Self {
            method,
            body: Some(body),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter.
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

// --- Downloads ---

/// A non-JSON response body, such as a CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    /// From `Content-Disposition`, when the server sent one.
    pub filename: Option<String>,
}

impl Download {
    /// The server's filename, or `fallback` when it sent none.
    pub fn filename_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.filename.as_deref().unwrap_or(fallback)
    }

    fn from_parts(headers: &HeaderMap, bytes: Vec<u8>) -> Self {
        Download {
            bytes,
            content_type: header_str(headers, CONTENT_TYPE),
            filename: header_str(headers, CONTENT_DISPOSITION)
                .and_then(|value| parse_filename(&value)),
        }
    }
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Extracts `filename` from a `Content-Disposition` value such as
/// `attachment; filename=users_export.csv`.
pub(crate) fn parse_filename(disposition: &str) -> Option<String> {
    disposition.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("filename") {
            return None;
        }
        let value = value.trim().trim_matches('"');
        (!value.is_empty()).then(|| value.to_string())
    })
}

// --- Gateway ---

/// The single entry point for backend calls.
///
/// Cloning is cheap: clones share the HTTP connection pool and the
/// [`Session`].
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl Gateway {
    /// A gateway using the shared default client.
    pub fn new(base_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self::with_client(HTTP_CLIENT.clone(), base_url, session)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, session: Arc<Session>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            session,
        }
    }

    /// Builds a gateway with the configured base URL and timeout.
    pub fn from_config(config: &AppConfig, session: Arc<Session>) -> Result<Self, LokalError> {
        let client = create_client(config.api.timeout_secs, true)?;
        Ok(Self::with_client(client, config.api.base_url.clone(), session))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Sends one request and decodes a 2xx JSON body as `T`.
    ///
    /// Never fails: every failure is folded into [`ApiResult::Error`].
    pub async fn request<T, B>(&self, endpoint: &str, options: RequestOptions<B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.fetch_json(endpoint, options).await.into()
    }

    /// Like [`request`](Self::request) but returns the raw body.
    pub async fn download<B: Serialize>(
        &self,
        endpoint: &str,
        options: RequestOptions<B>,
    ) -> ApiResult<Download> {
        self.fetch_download(endpoint, options).await.into()
    }

    async fn fetch_json<T, B>(
        &self,
        endpoint: &str,
        options: RequestOptions<B>,
    ) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self.execute(endpoint, options).await?;
        let status = response.status().as_u16();
        let body = read_body(endpoint, response).await?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Undecodable response from {}: {}", endpoint, e);
            GatewayError::Decode {
                status,
                reason: e.to_string(),
            }
        })
    }

    async fn fetch_download<B: Serialize>(
        &self,
        endpoint: &str,
        options: RequestOptions<B>,
    ) -> Result<Download, GatewayError> {
        let response = self.execute(endpoint, options).await?;
        let headers = response.headers().clone();
        let body = read_body(endpoint, response).await?;
        Ok(Download::from_parts(&headers, body))
    }

    /// Sends the request. Non-2xx responses come back as `Err(Http)`.
    async fn execute<B: Serialize>(
        &self,
        endpoint: &str,
        options: RequestOptions<B>,
    ) -> Result<Response, GatewayError> {
        let RequestOptions {
            method,
            body,
            query,
        } = options;
        let url = format!("{}{}", self.base_url, endpoint);

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.get_token() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, endpoint, e);
            GatewayError::from(e)
        })?;

        let status = response.status();
        debug!("{} {} -> {}", method, endpoint, status.as_u16());

        if status.is_success() {
            return Ok(response);
        }

        let body = read_body(endpoint, response).await?;
        let err = GatewayError::from_response(status.as_u16(), &body);
        warn!("{} {} rejected: {}", method, endpoint, err);
        Err(err)
    }
}

async fn read_body(endpoint: &str, response: Response) -> Result<Vec<u8>, GatewayError> {
    let bytes = response.bytes().await.map_err(|e| {
        warn!("Reading response body from {} failed: {}", endpoint, e);
        GatewayError::from(e)
    })?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filename_variants() {
        assert_eq!(
            parse_filename("attachment; filename=users_export.csv").as_deref(),
            Some("users_export.csv")
        );
        assert_eq!(
            parse_filename("attachment; filename=\"sales.csv\"").as_deref(),
            Some("sales.csv")
        );
        assert_eq!(parse_filename("inline"), None);
        assert_eq!(parse_filename("attachment; filename="), None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let gateway = Gateway::new("http://localhost:8000/", Arc::new(Session::in_memory()));
        assert_eq!(gateway.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_options_collect_query_params() {
        let options = RequestOptions::put_empty().param("new_status", "SUSPENDED");
        assert_eq!(options.method(), &Method::PUT);
        assert_eq!(
            options.query,
            vec![("new_status".to_string(), "SUSPENDED".to_string())]
        );
    }

    #[test]
    fn test_download_filename_fallback() {
        let download = Download {
            bytes: b"a,b\n".to_vec(),
            content_type: Some("text/csv".into()),
            filename: None,
        };
        assert_eq!(download.filename_or("export.csv"), "export.csv");
    }
}
