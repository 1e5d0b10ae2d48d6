//! Query and transport descriptors captured when a reader is created

use chrono::{DateTime, Utc};
use http::StatusCode;
use url::Url;

use crate::http::HttpHeader;
use crate::series::Precision;

/// Read-only description of the query and the response it produced
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    pub(crate) query_start_time: i64,
    pub(crate) database: String,
    pub(crate) query: String,
    pub(crate) precision: Precision,
    pub(crate) url: Url,
    pub(crate) status: StatusCode,
    pub(crate) reason: String,
    pub(crate) headers: Vec<HttpHeader>,
    pub(crate) content_length: Option<u64>,
    pub(crate) mime_type: String,
    pub(crate) chunked: bool,
}

impl ResponseMetadata {
    /// Query start time in epoch milliseconds
    #[must_use]
    pub fn query_start_time(&self) -> i64 {
        self.query_start_time
    }

    /// Query start time as a UTC timestamp, `None` if out of range
    #[must_use]
    pub fn query_started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.query_start_time)
    }

    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[must_use]
    pub fn headers(&self) -> &[HttpHeader] {
        &self.headers
    }

    /// Declared body length, `None` when unknown
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn is_chunked(&self) -> bool {
        self.chunked
    }
}
