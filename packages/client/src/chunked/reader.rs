//! The pull-based series reader

use std::io::BufReader;

use chrono::{DateTime, Utc};
use http::StatusCode;
use url::Url;

use super::decode::{Decoded, decode_series};
use super::metadata::ResponseMetadata;
use super::records::Records;
use crate::config::ReaderConfig;
use crate::error::{self, ProtocolError, Result};
use crate::http::{BodyStream, HttpHeader, HttpResponse};
use crate::json::JsonSource;
use crate::series::{Precision, Series};

type BodySource = JsonSource<BufReader<Box<dyn BodyStream>>>;

/// Decodes a chunked series response one series at a time
///
/// Created from a completed [`HttpResponse`] whose body has not been read yet.
/// Each [`next_record`](Self::next_record) call blocks until one complete
/// series object has been read, or returns `Ok(None)` once the body is
/// exhausted. After the first `Ok(None)` every further call returns `Ok(None)`
/// without touching the body.
///
/// Any error from `next_record` leaves the stream in an unknown position; the
/// reader should be dropped. The body is closed exactly once, by
/// [`close`](Self::close) or on drop, and close failures are ignored.
///
/// The reader is not meant to be shared between threads; it is `Send` so it
/// can be moved to the thread that consumes it.
pub struct ChunkedRecordReader {
    metadata: ResponseMetadata,
    integral_columns: usize,
    source: Option<BodySource>,
    end_of_stream: bool,
}

impl ChunkedRecordReader {
    /// Creates a reader with the default [`ReaderConfig`].
    ///
    /// # Errors
    ///
    /// `ProtocolMismatch` if the response is not `Transfer-Encoding: chunked`
    /// or its body is not `application/json`. No body bytes are read in
    /// either case.
    pub fn new(
        query_start_time: i64,
        database: impl Into<String>,
        query: impl Into<String>,
        precision: Precision,
        response: HttpResponse,
    ) -> Result<Self> {
        Self::with_config(
            query_start_time,
            database,
            query,
            precision,
            response,
            ReaderConfig::default(),
        )
    }

    /// Creates a reader with an explicit configuration.
    ///
    /// # Errors
    ///
    /// `Builder` if `config` does not validate, `ProtocolMismatch` as for
    /// [`new`](Self::new).
    pub fn with_config(
        query_start_time: i64,
        database: impl Into<String>,
        query: impl Into<String>,
        precision: Precision,
        response: HttpResponse,
        config: ReaderConfig,
    ) -> Result<Self> {
        let HttpResponse {
            url,
            status,
            reason,
            headers,
            body,
        } = response;

        let rejection = if let Err(e) = config.validate() {
            Some(e.into())
        } else if !crate::http::is_chunked(&headers) {
            Some(error::protocol_mismatch(ProtocolError::NotChunked))
        } else if body.mime_type() != config.expected_mime_type {
            Some(error::protocol_mismatch(ProtocolError::UnsupportedMimeType {
                expected: config.expected_mime_type.clone(),
                actual: body.mime_type().to_string(),
            }))
        } else {
            None
        };
        if let Some(e) = rejection {
            tracing::debug!(url = %url, status = %status, error = %e, "rejected response");
            close_quietly(body.into_stream());
            return Err(e);
        }

        let metadata = ResponseMetadata {
            query_start_time,
            database: database.into(),
            query: query.into(),
            precision,
            url,
            status,
            reason,
            headers,
            content_length: body.length(),
            mime_type: body.mime_type().to_string(),
            chunked: true,
        };
        tracing::debug!(
            url = %metadata.url,
            database = %metadata.database,
            precision = %metadata.precision,
            "opened chunked series stream"
        );

        let stream = BufReader::with_capacity(config.read_buffer_size, body.into_stream());
        Ok(Self {
            metadata,
            integral_columns: config.integral_columns,
            source: Some(JsonSource::new(stream)),
            end_of_stream: false,
        })
    }

    /// Decodes the next series, or returns `Ok(None)` once the body is exhausted.
    ///
    /// # Errors
    ///
    /// `MalformedStream` if the body does not follow the series object
    /// layout, `Io` if reading the body fails. Both are fatal for this reader.
    pub fn next_record(&mut self) -> Result<Option<Series>> {
        if self.end_of_stream {
            return Ok(None);
        }
        let Some(source) = self.source.as_mut() else {
            return Ok(None);
        };

        // Latches here too, not only after a series, so an empty remainder
        // never triggers another read.
        if !source.skip_whitespace()? {
            self.mark_end_of_stream();
            return Ok(None);
        }

        let Decoded {
            series,
            end_of_stream,
        } = decode_series(source, self.integral_columns)?;

        tracing::debug!(
            series = %series.name(),
            columns = series.columns().len(),
            rows = series.len(),
            "decoded series"
        );
        if end_of_stream {
            self.mark_end_of_stream();
        }
        Ok(Some(series))
    }

    /// Iterates the remaining series; stops after the first error.
    pub fn records(&mut self) -> Records<'_> {
        Records::new(self)
    }

    /// True once the end of the body has been observed. Never resets.
    #[must_use]
    pub fn is_end_of_stream(&self) -> bool {
        self.end_of_stream
    }

    /// Closes the body stream. Failures are ignored.
    pub fn close(mut self) {
        self.release();
    }

    #[must_use]
    pub fn metadata(&self) -> &ResponseMetadata {
        &self.metadata
    }

    /// Query start time in epoch milliseconds
    #[must_use]
    pub fn query_start_time(&self) -> i64 {
        self.metadata.query_start_time()
    }

    #[must_use]
    pub fn query_started_at(&self) -> Option<DateTime<Utc>> {
        self.metadata.query_started_at()
    }

    #[must_use]
    pub fn database(&self) -> &str {
        self.metadata.database()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.metadata.query()
    }

    #[must_use]
    pub fn precision(&self) -> Precision {
        self.metadata.precision()
    }

    #[must_use]
    pub fn is_chunked(&self) -> bool {
        self.metadata.is_chunked()
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        self.metadata.url()
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.metadata.status()
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        self.metadata.reason()
    }

    /// A copy of the response headers
    #[must_use]
    pub fn headers(&self) -> Vec<HttpHeader> {
        self.metadata.headers().to_vec()
    }

    /// Declared body length, `None` when unknown
    #[must_use]
    pub fn response_length(&self) -> Option<u64> {
        self.metadata.content_length()
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        self.metadata.mime_type()
    }

    fn mark_end_of_stream(&mut self) {
        if !self.end_of_stream {
            tracing::debug!(database = %self.metadata.database, "end of series stream");
            self.end_of_stream = true;
        }
    }

    fn release(&mut self) {
        if let Some(source) = self.source.take() {
            close_quietly(source.into_inner().into_inner());
        }
    }
}

impl Drop for ChunkedRecordReader {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ChunkedRecordReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkedRecordReader")
            .field("metadata", &self.metadata)
            .field("end_of_stream", &self.end_of_stream)
            .field("open", &self.source.is_some())
            .finish()
    }
}

fn close_quietly(mut stream: Box<dyn BodyStream>) {
    if let Err(e) = stream.close() {
        tracing::debug!(error = %e, "ignoring error while closing response body");
    }
}
