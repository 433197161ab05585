//! Frame codec for change events.
//!
//! Encoding produces one self-describing JSON text frame per event.
//! Decoding is two-step: read the `type` discriminator, then decode the
//! payload for that variant. A discriminator this build does not know is
//! reported as [`Decoded::Unknown`] rather than an error, so older clients
//! keep working when the server learns new variants.

use serde_json::Value;
use thiserror::Error;

use super::events::{ChangeEvent, ChangeKind};

/// Name of the discriminator field.
pub const TYPE_FIELD: &str = "type";

/// Errors from encoding or decoding a frame.
#[derive(Debug, Error)]
pub enum EventCodecError {
    #[error("failed to encode change event: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("frame is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("frame has no string 'type' field")]
    MissingType,

    #[error("invalid payload for {kind}: {source}")]
    InvalidPayload {
        kind: ChangeKind,
        #[source]
        source: serde_json::Error,
    },
}

/// Result of decoding one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Event(ChangeEvent),
    /// A well-formed frame whose discriminator is not known to this build.
    Unknown(String),
}

/// Encode an event into a complete text frame.
///
/// The frame is produced in full before anything is returned; callers never
/// observe a partially serialized event.
pub fn encode(event: &ChangeEvent) -> Result<String, EventCodecError> {
    serde_json::to_string(event).map_err(EventCodecError::Encode)
}

/// Decode a complete text frame.
pub fn decode(frame: &str) -> Result<Decoded, EventCodecError> {
    let value: Value = serde_json::from_str(frame).map_err(EventCodecError::NotJson)?;

    let name = value
        .get(TYPE_FIELD)
        .and_then(Value::as_str)
        .ok_or(EventCodecError::MissingType)?;

    let Some(kind) = ChangeKind::from_name(name) else {
        return Ok(Decoded::Unknown(name.to_string()));
    };

    serde_json::from_value::<ChangeEvent>(value)
        .map(Decoded::Event)
        .map_err(|source| EventCodecError::InvalidPayload { kind, source })
}
