//! Core `ChunkedQuery` structure and setters

use chrono::{DateTime, Utc};
use chunkseries_client::Precision;
use chunkseries_client::config::ReaderConfig;

/// Description of a query whose results arrive as a chunked series response
///
/// ```rust
/// use chunkseries::{ChunkedQuery, Precision};
///
/// let query = ChunkedQuery::new("metrics", "select * from cpu")
///     .precision(Precision::Seconds)
///     .started_at(1_453_521_282_000);
/// assert_eq!(query.database(), "metrics");
/// ```
#[derive(Debug, Clone)]
pub struct ChunkedQuery {
    pub(crate) database: String,
    pub(crate) query: String,
    pub(crate) precision: Precision,
    /// Epoch milliseconds; `None` means "when the response is opened"
    pub(crate) started_at: Option<i64>,
    pub(crate) config: ReaderConfig,
}

impl ChunkedQuery {
    pub fn new(database: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            query: query.into(),
            precision: Precision::default(),
            started_at: None,
            config: ReaderConfig::default(),
        }
    }

    /// Time unit the query asked the server for
    #[must_use]
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Query start time in epoch milliseconds
    #[must_use]
    pub fn started_at(mut self, epoch_millis: i64) -> Self {
        self.started_at = Some(epoch_millis);
        self
    }

    #[must_use]
    pub fn started_at_time(self, time: DateTime<Utc>) -> Self {
        self.started_at(time.timestamp_millis())
    }

    #[must_use]
    pub fn config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}
