//! Fluent query builder
//!
//! Collects the query description that accompanies a chunked response and
//! turns the response into a [`ChunkedRecordReader`](chunkseries_client::ChunkedRecordReader).

pub mod core;
pub mod methods;

pub use self::core::ChunkedQuery;
