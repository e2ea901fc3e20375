//! Decoding of execute-scenario responses.
//!
//! The server runs the scenario command by command and appends one JSON
//! object per value-producing command to a plain string, back to back with
//! no separator, then ships that string as a single JSON string literal:
//!
//! ```text
//! "{\"value\": true}{\"value\": [\"a\", \"b\"]}"
//! ```
//!
//! Recovering the values therefore means unwrapping one layer of
//! string-literal encoding and re-framing the concatenated objects; see
//! [`split_frames`] for the invariant the framing rests on.

use serde_json::Value;

use crate::data::ScenarioData;
use crate::error::DecodeError;

/// Marker substring the server puts in every failure payload. The protocol
/// guarantees a success payload never contains it.
const ERROR_MARKER: &str = "error";

/// Decode a raw execute-scenario response body into the ordered result
/// values.
///
/// A body carrying the error marker anywhere is returned whole as
/// [`DecodeError::ErrorResponse`] without further parsing. Fragments
/// without a `value` field (pure side-effect commands) are skipped; the
/// relative order of the remaining values matches the order the
/// value-bearing commands were issued in.
pub fn decode_response(body: &str) -> Result<ScenarioData, DecodeError> {
    if body.contains(ERROR_MARKER) {
        return Err(DecodeError::ErrorResponse(body.to_string()));
    }

    let text = unquote_layer(body);
    if text.is_empty() {
        // Every command was side-effect only; the server wrote nothing.
        return Ok(ScenarioData::new(Vec::new()));
    }

    let mut values = Vec::new();
    for (index, fragment) in split_frames(&text).into_iter().enumerate() {
        let object: Value = serde_json::from_str(&fragment)
            .map_err(|source| DecodeError::MalformedFragment { index, source })?;
        if let Some(value) = object.get("value") {
            values.push(value.clone());
        }
    }

    Ok(ScenarioData::new(values))
}

/// Reverse one layer of JSON string-literal encoding: strip the enclosing
/// double quotes, then un-escape `\"` and `\\`, in that order.
fn unquote_layer(body: &str) -> String {
    let trimmed = body.trim();
    let inner = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    inner.replace("\\\"", "\"").replace("\\\\", "\\")
}

/// Split concatenated result objects on the `}{` boundary and restore the
/// braces the split consumed.
///
/// Precondition: no field value contains the literal text `}{`. The
/// protocol's result objects are flat, so the delimiter can only occur
/// where two objects meet. A value smuggling that text in (embedded HTML,
/// say) corrupts the split; the damage surfaces as a malformed fragment
/// downstream. Swap this function for a streaming tokenizer if the server
/// ever emits a real JSON array.
fn split_frames(text: &str) -> Vec<String> {
    let parts: Vec<&str> = text.split("}{").collect();
    let last = parts.len() - 1;
    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            let mut fragment = String::with_capacity(part.len() + 2);
            if i > 0 {
                fragment.push('{');
            }
            fragment.push_str(part);
            if i < last {
                fragment.push('}');
            }
            fragment
        })
        .collect()
}
