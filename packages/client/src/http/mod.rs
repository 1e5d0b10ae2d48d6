//! Transport-facing response types
//!
//! The decoder does not perform requests. It consumes a completed response
//! handed over by whatever HTTP client the caller uses, described by the types
//! in this module.

pub mod body;
pub mod headers;
pub mod response;

pub use ::http::header;

pub use body::{BodyStream, ChunkedBody, ReaderBody, ResponseBody};
pub use headers::{HttpHeader, is_chunked};
pub use response::HttpResponse;
