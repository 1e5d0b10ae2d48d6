//! Settings for [`ChunkedRecordReader`](crate::chunked::ChunkedRecordReader)

use super::validation::{ConfigResult, ConfigurationError};

/// Content type a chunked series response must declare
pub const JSON_MIME_TYPE: &str = "application/json";

/// Leading row positions holding the timestamp and sequence number
pub const DEFAULT_INTEGRAL_COLUMNS: usize = 2;

/// Capacity of the buffer wrapped around the body stream
pub const DEFAULT_READ_BUFFER_SIZE: usize = 8192;

const MAX_READ_BUFFER_SIZE: usize = 16_777_216;

/// Runtime reader configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Declared body content type required at construction, matched exactly
    pub expected_mime_type: String,

    /// Numbers at row positions below this are decoded as `i64`, the rest as `f64`
    pub integral_columns: usize,

    /// Read buffer capacity in bytes
    pub read_buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            expected_mime_type: JSON_MIME_TYPE.to_string(),
            integral_columns: DEFAULT_INTEGRAL_COLUMNS,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE, // 8KB
        }
    }
}

impl ReaderConfig {
    #[must_use]
    pub fn with_expected_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.expected_mime_type = mime_type.into();
        self
    }

    #[must_use]
    pub fn with_integral_columns(mut self, columns: usize) -> Self {
        self.integral_columns = columns;
        self
    }

    #[must_use]
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// - `InvalidBufferSize` if the read buffer is zero or larger than 16MB
    /// - `InvalidParameter` if the expected mime type is empty
    pub fn validate(&self) -> ConfigResult<()> {
        if self.read_buffer_size == 0 {
            return Err(ConfigurationError::InvalidBufferSize(
                "read_buffer_size cannot be zero".to_string(),
            ));
        }
        if self.read_buffer_size > MAX_READ_BUFFER_SIZE {
            return Err(ConfigurationError::InvalidBufferSize(
                "read_buffer_size cannot exceed 16MB".to_string(),
            ));
        }
        if self.expected_mime_type.is_empty() {
            return Err(ConfigurationError::InvalidParameter(
                "expected_mime_type cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
