//! Series-by-series decoding of chunked JSON responses
//!
//! A chunked series response is a sequence of objects shaped like
//!
//! ```text
//! {"name":"cpu","columns":["time","sequence_number","value"],
//!  "points":[[1453521282351,174844500001,5],[1453521282350,174844490001,5]]}
//! ```
//!
//! written back to back as the server produces them. [`ChunkedRecordReader`]
//! pulls one such object per call without buffering the rest of the body.

mod decode;
mod metadata;
mod reader;
mod records;

pub use metadata::ResponseMetadata;
pub use reader::ChunkedRecordReader;
pub use records::Records;
