//! Transport-level failures.
//!
//! Malformed *content* never surfaces here: a value whose shape does not match
//! its declared type degrades to that type's default. These errors mean the
//! input was not JSON at all, or the output could not be written.

/// Error raised by the byte / string / stream conveniences of a codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input violated the JSON grammar, was truncated, or could not be read.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing serialized output failed.
    #[error("failed to write JSON: {0}")]
    Io(#[from] std::io::Error),
}

pub type CodecResult<T> = Result<T, CodecError>;
