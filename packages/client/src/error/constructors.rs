use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for a response that is not a chunked JSON response.
pub fn protocol_mismatch<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::ProtocolMismatch).with(e.into())
}

/// Creates an `Error` for a body that violates the series stream grammar.
pub fn malformed<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::MalformedStream).with(e.into())
}

/// Creates an `Error` for a failed read of the response body.
pub fn io<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Io).with(e.into())
}

/// Creates an `Error` for invalid configuration.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}
