//! JSON plumbing shared by the decoders
//!
//! Parsing itself is done by `serde_json`; this module provides the byte source
//! it reads from and the token kinds used in error messages. A chunked series
//! body carries any number of top-level values back to back, with no separator
//! and no enclosing array.

mod source;
mod tokens;

pub use source::JsonSource;
pub use tokens::JsonToken;
