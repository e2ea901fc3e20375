//! Error types for the wire protocol layer

use thiserror::Error;

/// Errors produced while decoding an execute-scenario response.
///
/// The two variants keep "the server told us it failed" distinguishable
/// from "the server claimed success but we could not understand the
/// payload".
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The response body carried the protocol's error marker; the raw body
    /// is preserved verbatim.
    #[error("server reported an error: {0}")]
    ErrorResponse(String),

    /// A result fragment did not parse as a JSON object after the frame
    /// split.
    #[error("malformed result fragment at index {index}: {source}")]
    MalformedFragment {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors produced by typed access into decoded scenario results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("result index {index} is out of range ({len} values decoded)")]
    OutOfRange { index: usize, len: usize },

    #[error("result {index} is {found}, expected {expected}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}
