//! Async client SDK for the FoxFarm remote browser farm.
//!
//! A [`FarmClient`] owns one remote browser session: connecting fires the
//! start request, [`FarmClient::close`] (or drop) releases it, and
//! [`FarmClient::execute_scenario`] submits an ordered
//! [`Scenario`] of browser commands and returns the typed results.
//!
//! ```no_run
//! use foxfarm_client::{Command, FarmClient, Scenario, SessionConfig};
//!
//! # async fn run() -> Result<(), foxfarm_client::ClientError> {
//! let config = SessionConfig::default().with_block_webgl(true);
//! let mut client = FarmClient::connect("http://localhost:8000", config).await;
//!
//! let mut scenario = Scenario::new();
//! scenario
//!     .push(Command::navigate("https://example.com"))
//!     .push(Command::is_element_on_page("[type='submit']"));
//!
//! let data = client.execute_scenario(&scenario).await?;
//! let submit_present = data.bool_at(0).unwrap_or(false);
//! # let _ = submit_present;
//! client.close().await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::FarmClient;
pub use config::{BrowserEngine, OsTarget, ProxyConfig, SessionConfig};
pub use error::ClientError;
pub use transport::{HttpTransport, Transport, TransportError};

// Re-export the protocol surface so callers need only one crate.
pub use foxfarm_protocol::{
    AccessError, Command, DecodeError, Scenario, ScenarioData, WaitUntil, decode_response,
};
