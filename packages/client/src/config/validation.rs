//! Configuration validation errors

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid buffer size: {0}")]
    InvalidBufferSize(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

impl From<ConfigurationError> for crate::Error {
    fn from(error: ConfigurationError) -> Self {
        crate::error::builder(error)
    }
}
