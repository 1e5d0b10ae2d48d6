//! Decoder configuration

pub mod reader;
pub mod validation;

pub use reader::ReaderConfig;
pub use validation::{ConfigResult, ConfigurationError};
