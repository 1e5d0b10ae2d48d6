//! Terminal methods: turning a response into series

use chrono::Utc;
use chunkseries_client::http::HttpResponse;
use chunkseries_client::{ChunkedRecordReader, Result, Series};

use super::core::ChunkedQuery;

impl ChunkedQuery {
    /// Validates `response` and returns a reader positioned before the first series.
    ///
    /// # Errors
    ///
    /// `ProtocolMismatch` for a response that is not chunked JSON, `Builder`
    /// for an invalid reader configuration.
    pub fn open(self, response: HttpResponse) -> Result<ChunkedRecordReader> {
        let started_at = self
            .started_at
            .unwrap_or_else(|| Utc::now().timestamp_millis());

        tracing::debug!(
            database = %self.database,
            precision = %self.precision,
            started_at,
            "opening chunked query response"
        );

        ChunkedRecordReader::with_config(
            started_at,
            self.database,
            self.query,
            self.precision,
            response,
            self.config,
        )
    }

    /// Decodes every series in `response`. The body is closed on every path.
    ///
    /// # Errors
    ///
    /// The first error raised while opening or decoding.
    pub fn collect(self, response: HttpResponse) -> Result<Vec<Series>> {
        let mut reader = self.open(response)?;
        let series = reader.records().collect::<Result<Vec<_>>>();
        reader.close();
        series
    }

    /// Hands each series to `on_series` as soon as it is decoded and returns
    /// how many were seen.
    ///
    /// # Errors
    ///
    /// The first error raised while opening or decoding; series delivered
    /// before it are not rolled back.
    pub fn for_each<F>(self, response: HttpResponse, mut on_series: F) -> Result<usize>
    where
        F: FnMut(Series),
    {
        let mut reader = self.open(response)?;
        let mut count = 0;
        while let Some(series) = reader.next_record()? {
            on_series(series);
            count += 1;
        }
        Ok(count)
    }
}
