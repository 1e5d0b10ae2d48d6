//! Completed HTTP response handed to the decoder

use http::{HeaderName, HeaderValue, StatusCode};
use url::Url;

use super::body::ResponseBody;
use super::headers::{HttpHeader, is_chunked};

/// A response whose status line and headers have been received
///
/// The body may still be arriving; it is only read once a decoder pulls from
/// it.
#[derive(Debug)]
pub struct HttpResponse {
    /// URL the request was sent to
    pub url: Url,

    /// HTTP status code
    pub status: StatusCode,

    /// Status reason phrase (may be empty in HTTP/2 and HTTP/3)
    pub reason: String,

    /// Headers in the order they were received
    pub headers: Vec<HttpHeader>,

    /// Body stream with its declared content type and length
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Create a response with no headers; the reason defaults to the canonical
    /// phrase of `status`.
    #[must_use]
    pub fn new(url: Url, status: StatusCode, body: ResponseBody) -> Self {
        Self {
            url,
            status,
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            headers: Vec::new(),
            body,
        }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push(HttpHeader::new(name, value));
        self
    }

    /// Returns true if the response declares `Transfer-Encoding: chunked`.
    #[inline]
    #[must_use]
    pub fn is_chunked(&self) -> bool {
        is_chunked(&self.headers)
    }
}
