//! # Chunked series client
//!
//! Incremental decoder for chunked HTTP responses whose body is a stream of
//! JSON series objects written back to back as results become available:
//!
//! ```text
//! {"name":"cpu","columns":["time","sequence_number","usage"],"points":[[10,1,0.5]]}
//! {"name":"mem","columns":["time","sequence_number","free"],"points":[[10,2,512.0]]}
//! ```
//!
//! [`ChunkedRecordReader`] validates that the response is chunked JSON, then
//! decodes one series per call without buffering the rest of the body.
//!
//! ## Features
//!
//! - **Pull-based decoding** over any blocking body stream
//! - **Positional numeric typing**: the first two row positions (timestamp and
//!   sequence number) decode as `i64`, later numbers as `f64`
//! - **Deterministic cleanup**: the body is closed exactly once, on every path
//! - **Back-to-back values**: concatenated top-level JSON objects, parsed with `serde_json`
//!
//! ## Usage
//!
//! ```rust
//! use chunkseries_client::prelude::*;
//! use chunkseries_client::http::header;
//!
//! # fn main() -> chunkseries_client::Result<()> {
//! let body = r#"{"name":"cpu","columns":["time","sequence_number","usage"],"points":[[10,1,0.5]]}"#;
//! let url = Url::parse("http://localhost:8086/db/metrics/series").map_err(chunkseries_client::error::builder)?;
//! let response = HttpResponse::new(url, StatusCode::OK, ResponseBody::from_bytes("application/json", body))
//!     .with_header(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
//!
//! let mut reader = ChunkedRecordReader::new(0, "metrics", "select * from cpu", Precision::Milliseconds, response)?;
//! while let Some(series) = reader.next_record()? {
//!     println!("{}: {} rows", series.name(), series.len());
//! }
//! assert!(reader.is_end_of_stream());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod chunked;
pub mod config;
pub mod error;
pub mod http;
pub mod json;
pub mod series;

pub mod prelude;

pub use crate::chunked::{ChunkedRecordReader, Records, ResponseMetadata};
pub use crate::error::{Error, Kind, Result};
pub use crate::series::{Precision, Series, Value};
