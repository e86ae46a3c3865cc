//! Decode errors for query payloads.

use thiserror::Error;

/// Failures while turning a query payload into model types.
///
/// These are upstream contract violations: the components never produce
/// them, they only surface when a payload is decoded.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The payload is not valid JSON for the expected shape.
    #[error("failed to decode query payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// A classification outside the fixed enumeration.
    #[error("unknown reply type `{0}`")]
    UnknownReplyType(String),
}
