//! Response headers and transfer-encoding detection

use http::{HeaderName, HeaderValue};

/// Individual HTTP response header, in wire order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpHeader {
    /// Header name
    pub name: HeaderName,

    /// Header value
    pub value: HeaderValue,
}

impl HttpHeader {
    #[must_use]
    pub fn new(name: HeaderName, value: HeaderValue) -> Self {
        Self { name, value }
    }
}

const TRANSFER_ENCODING_PREFIX: &str = "transfer-encoding";
const CHUNKED: &str = "chunked";

/// Returns true if any header declares `Transfer-Encoding: chunked`.
///
/// Names are matched by prefix (`http` normalises them to lowercase); the value
/// must be exactly `chunked`.
#[must_use]
pub fn is_chunked(headers: &[HttpHeader]) -> bool {
    headers.iter().any(|header| {
        header.name.as_str().starts_with(TRANSFER_ENCODING_PREFIX)
            && header.value.to_str().is_ok_and(|value| value == CHUNKED)
    })
}
