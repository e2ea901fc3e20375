//! Client-side error taxonomy.

use thiserror::Error;

use foxfarm_protocol::DecodeError;

use crate::transport::TransportError;

/// Errors surfaced by scenario execution.
///
/// Session start and stop failures never appear here; that lifecycle is
/// best-effort and only logged. Type-conversion failures live on
/// the result accessor ([`foxfarm_protocol::AccessError`]), not the
/// execute path.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server reported failure: its error marker in a success
    /// response, or an HTTP error status whose body is carried verbatim.
    #[error("scenario failed on server: {0}")]
    Server(String),

    /// The request never produced a response body.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server claimed success but the payload could not be decoded.
    #[error("malformed response: {0}")]
    Decode(DecodeError),
}

impl ClientError {
    /// Fold a transport failure into the taxonomy: a response body, when
    /// the server produced one, beats the bare error message.
    pub(crate) fn from_transport(error: TransportError) -> Self {
        match error.body {
            Some(body) => Self::Server(body),
            None => Self::Transport(error.message),
        }
    }
}
