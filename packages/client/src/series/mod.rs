//! Decoded series container types

mod builder;
mod core;
mod precision;
mod value;

pub use builder::SeriesBuilder;
pub use self::core::Series;
pub use precision::Precision;
pub use value::Value;
