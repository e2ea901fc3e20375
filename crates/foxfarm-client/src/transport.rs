//! Transport seam between the client and the farm's HTTP surface.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

const DISABLE_SYSTEM_PROXY_ENV: &str = "FOXFARM_DISABLE_SYSTEM_PROXY";

/// A transport-level failure.
///
/// When the server answered with an error status its body is carried along
/// so callers can surface the server's own diagnostic text; a request that
/// never completed has only the underlying error message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub status: Option<u16>,
    pub body: Option<String>,
}

/// Posts payloads to the farm and returns raw response text.
///
/// The client is generic over this seam so tests can substitute a scripted
/// transport; [`HttpTransport`] is the production implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` (JSON text, when present) to `url` and return the
    /// response body as text.
    async fn post(&self, url: &str, body: Option<String>) -> Result<String, TransportError>;
}

/// reqwest-backed [`Transport`].
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: build_http_client(),
        }
    }

    /// Use a caller-configured reqwest client (custom TLS, timeouts, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: Option<String>) -> Result<String, TransportError> {
        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(|error| TransportError {
            message: error.to_string(),
            status: None,
            body: None,
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|error| TransportError {
            message: error.to_string(),
            status: Some(status.as_u16()),
            body: None,
        })?;

        if !status.is_success() {
            return Err(TransportError {
                message: format!("server returned {}", status),
                status: Some(status.as_u16()),
                body: Some(text),
            });
        }

        Ok(text)
    }
}

fn build_http_client() -> Client {
    if should_disable_system_proxy() {
        Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to build reqwest client")
    } else {
        Client::new()
    }
}

fn should_disable_system_proxy() -> bool {
    if std::env::var_os(DISABLE_SYSTEM_PROXY_ENV).is_some() {
        return true;
    }

    cfg!(test)
}
