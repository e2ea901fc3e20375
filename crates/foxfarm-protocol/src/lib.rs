//! Wire protocol for the FoxFarm remote browser service.
//!
//! This crate owns the pure encode/decode layer of the SDK:
//! - [`Command`] and [`Scenario`] model the ordered action list sent to the
//!   server in one execute request
//! - [`decode_response`] recovers the ordered result values from the
//!   server's concatenated-objects response framing
//! - [`ScenarioData`] exposes typed reads over those values
//!
//! Networking lives in `foxfarm-client`; nothing here performs I/O.

pub mod command;
pub mod data;
pub mod decode;
pub mod error;
pub mod scenario;

pub use command::{Command, WaitUntil};
pub use data::ScenarioData;
pub use decode::decode_response;
pub use error::{AccessError, DecodeError};
pub use scenario::Scenario;
