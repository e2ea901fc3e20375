//! Session-owning client for the FoxFarm service.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use foxfarm_protocol::{DecodeError, Scenario, ScenarioData, decode_response};

use crate::config::SessionConfig;
use crate::error::ClientError;
use crate::transport::{HttpTransport, Transport};

/// Client for one remote browser session.
///
/// Connecting starts the session; [`close`](FarmClient::close) (or drop)
/// releases it. Both lifecycle requests are best-effort and never fail the
/// caller. One client maps to one remote browser, and executions against
/// it take `&mut self`, so overlapping executions on the same session are
/// ruled out at compile time.
pub struct FarmClient {
    transport: Arc<dyn Transport>,
    server_url: String,
    browser_key: String,
    closed: bool,
}

impl FarmClient {
    /// Connect to a farm at `server_url`, starting a remote browser
    /// session with `config`.
    ///
    /// A failed start request is swallowed: the client is returned anyway
    /// and later executions surface whatever error the server reports.
    pub async fn connect(server_url: impl Into<String>, config: SessionConfig) -> Self {
        Self::connect_with_transport(server_url, config, Arc::new(HttpTransport::new())).await
    }

    /// Connect through a caller-supplied transport.
    pub async fn connect_with_transport(
        server_url: impl Into<String>,
        config: SessionConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        let browser_key = config
            .browser_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let start_config = SessionConfig {
            browser_key: Some(browser_key.clone()),
            ..config
        };

        let url = format!("{}/start", server_url);
        match serde_json::to_string(&start_config) {
            Ok(body) => match transport.post(&url, Some(body)).await {
                Ok(_) => debug!(browser_key = %browser_key, "remote browser session started"),
                Err(error) => warn!(%error, "failed to start remote browser session"),
            },
            Err(error) => warn!(%error, "failed to encode session config"),
        }

        Self {
            transport,
            server_url,
            browser_key,
            closed: false,
        }
    }

    /// The opaque key addressing this client's remote session.
    pub fn browser_key(&self) -> &str {
        &self.browser_key
    }

    /// Execute `scenario` against the session's first page.
    pub async fn execute_scenario(
        &mut self,
        scenario: &Scenario,
    ) -> Result<ScenarioData, ClientError> {
        self.execute_scenario_on_page(scenario, 0).await
    }

    /// Execute `scenario` against the page at `page_index`; the server
    /// creates pages on demand.
    pub async fn execute_scenario_on_page(
        &mut self,
        scenario: &Scenario,
        page_index: u32,
    ) -> Result<ScenarioData, ClientError> {
        let envelope = serde_json::json!({
            "browser_key": self.browser_key,
            "page_index": page_index,
            "js_scenario": scenario,
        });

        let url = format!("{}/execute_scenario", self.server_url);
        let body = self
            .transport
            .post(&url, Some(envelope.to_string()))
            .await
            .map_err(ClientError::from_transport)?;

        decode_response(&body).map_err(|error| match error {
            DecodeError::ErrorResponse(message) => ClientError::Server(message),
            malformed => ClientError::Decode(malformed),
        })
    }

    /// Stop the remote session.
    ///
    /// Best-effort: a failed stop is logged and swallowed, and the session
    /// is considered released either way.
    pub async fn close(mut self) {
        self.closed = true;
        let url = self.stop_url();
        if let Err(error) = self.transport.post(&url, None).await {
            warn!(browser_key = %self.browser_key, %error, "failed to stop remote browser session");
        }
    }

    fn stop_url(&self) -> String {
        format!(
            "{}/stop_browser?browser_key={}",
            self.server_url,
            urlencoding::encode(&self.browser_key)
        )
    }
}

impl Drop for FarmClient {
    fn drop(&mut self) {
        if self.closed {
            return;
        }

        // close() was never called; release the remote browser without
        // blocking the destructor.
        let transport = self.transport.clone();
        let url = self.stop_url();
        let browser_key = self.browser_key.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(error) = transport.post(&url, None).await {
                        warn!(browser_key = %browser_key, %error, "failed to stop remote browser session");
                    }
                });
            }
            Err(_) => {
                warn!(browser_key = %browser_key, "client dropped outside a runtime; stop request skipped");
            }
        }
    }
}
