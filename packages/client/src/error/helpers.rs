use thiserror::Error;

use crate::json::JsonToken;

/// Why a response was refused at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("response is not chunked")]
    NotChunked,

    #[error("chunked response handling only supports {expected} responses, got {actual}")]
    UnsupportedMimeType { expected: String, actual: String },
}

/// Detail carried by `Kind::MalformedStream` errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StreamError {
    #[error("incomplete stream: unable to read {0}")]
    Incomplete(&'static str),

    #[error("unexpected token type: {0}")]
    UnexpectedValue(JsonToken),

    #[error("unexpected token type: {token} at offset {offset}")]
    UnexpectedToken { token: JsonToken, offset: u64 },

    #[error("expected {expected} but was {literal} at row position {position}")]
    NumberFormat {
        expected: &'static str,
        literal: String,
        position: usize,
    },
}
