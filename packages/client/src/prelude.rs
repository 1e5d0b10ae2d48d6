//! Chunked series prelude
//!
//! The types needed to turn a completed response into decoded series.

pub use crate::chunked::{ChunkedRecordReader, Records, ResponseMetadata};
pub use crate::config::ReaderConfig;
pub use crate::error::{Error, Kind, Result};
pub use crate::http::{BodyStream, ChunkedBody, HttpHeader, HttpResponse, ReaderBody, ResponseBody};
pub use crate::series::{Precision, Series, SeriesBuilder, Value};

// HTTP standard types from http crate
pub use ::http::{HeaderName, HeaderValue, StatusCode};

// URL handling
pub use url::Url;
