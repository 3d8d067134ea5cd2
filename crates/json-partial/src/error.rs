//! Error taxonomy for the byte-level codec operations.

use thiserror::Error;

/// Error returned by the byte-level encode/decode operations on a field.
///
/// Both variants carry the underlying `serde_json` error unchanged; this
/// crate performs no recovery of its own.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The wrapped value cannot be represented in the JSON data model.
    #[error("encode: {0}")]
    Encode(#[source] serde_json::Error),
    /// The supplied bytes are not valid JSON or do not match the payload type.
    #[error("decode: {0}")]
    Decode(#[source] serde_json::Error),
}
