//! Session configuration sent once in the start request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Browser engine the farm impersonates when no explicit fingerprint is
/// supplied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrowserEngine {
    #[default]
    Firefox,
    Chrome,
    Safari,
    Edge,
}

/// Operating-system fingerprint target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OsTarget {
    #[default]
    Windows,
    Macos,
    Linux,
}

/// Proxy endpoint and credentials forwarded to the remote browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyConfig {
    pub server: String,
    pub username: String,
    pub password: String,
}

impl ProxyConfig {
    pub fn new(
        server: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Configuration snapshot for one remote browser session.
///
/// Serialized verbatim as the start-request payload; unset optional fields
/// are omitted entirely rather than sent as null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Opaque session key. Generated at connect time when absent or blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_key: Option<String>,
    /// Raw fingerprint override; when present the farm uses it instead of
    /// generating one from `browser`/`os`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<Value>,
    pub browser: BrowserEngine,
    pub os: OsTarget,
    /// Human-like interaction pacing.
    pub humanize: bool,
    pub block_images: bool,
    pub block_webgl: bool,
    pub geoip: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            browser_key: None,
            fingerprint: None,
            browser: BrowserEngine::Firefox,
            os: OsTarget::Windows,
            humanize: true,
            block_images: false,
            block_webgl: false,
            geoip: false,
            proxy: None,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_browser_key(mut self, key: impl Into<String>) -> Self {
        self.browser_key = Some(key.into());
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: Value) -> Self {
        self.fingerprint = Some(fingerprint);
        self
    }

    pub fn with_browser(mut self, browser: BrowserEngine) -> Self {
        self.browser = browser;
        self
    }

    pub fn with_os(mut self, os: OsTarget) -> Self {
        self.os = os;
        self
    }

    pub fn with_humanize(mut self, humanize: bool) -> Self {
        self.humanize = humanize;
        self
    }

    pub fn with_block_images(mut self, block: bool) -> Self {
        self.block_images = block;
        self
    }

    pub fn with_block_webgl(mut self, block: bool) -> Self {
        self.block_webgl = block;
        self
    }

    pub fn with_geoip(mut self, geoip: bool) -> Self {
        self.geoip = geoip;
        self
    }

    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }
}
