//! Chunked series public API
//!
//! Decodes chunked HTTP responses carrying back-to-back JSON series objects,
//! one series at a time. Describe the query with [`ChunkedQuery`], hand it the
//! response your HTTP client produced, and pull series as they arrive.
//!
//! ```rust
//! use chunkseries::{ChunkedQuery, HeaderValue, HttpResponse, ResponseBody, StatusCode, Url, header};
//!
//! # fn main() -> chunkseries::Result<()> {
//! let body = r#"{"name":"cpu","columns":["time","sequence_number","usage"],"points":[[10,1,0.5],[20,2,0.75]]}"#;
//! let url = Url::parse("http://localhost:8086/db/metrics/series").map_err(chunkseries::error::builder)?;
//! let response = HttpResponse::new(url, StatusCode::OK, ResponseBody::from_bytes("application/json", body))
//!     .with_header(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
//!
//! let series = ChunkedQuery::new("metrics", "select * from cpu").collect(response)?;
//! assert_eq!(series[0].len(), 2);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod builder;

pub use builder::ChunkedQuery;

// Re-export decoder types from client package
pub use chunkseries_client::config::ReaderConfig;
pub use chunkseries_client::error;
pub use chunkseries_client::http::{
    BodyStream, ChunkedBody, HttpHeader, HttpResponse, ReaderBody, ResponseBody,
};
pub use chunkseries_client::series::SeriesBuilder;
pub use chunkseries_client::{
    ChunkedRecordReader, Error, Kind, Precision, Records, ResponseMetadata, Result, Series, Value,
};

// Transport types callers need to describe a response
pub use bytes::Bytes;
pub use http::{HeaderName, HeaderValue, StatusCode, header};
pub use url::Url;

/// Describe a chunked query
///
/// Shorthand for `ChunkedQuery::new()`
pub fn query(database: impl Into<String>, query: impl Into<String>) -> ChunkedQuery {
    ChunkedQuery::new(database, query)
}
