//! Response body streams
//!
//! A body is a forward-only byte stream plus the content type and length the
//! server declared for it. [`ChunkedBody`] adapts chunks as they come off the
//! wire into a [`Read`], so decoding can start before the response completes.

use std::fmt;
use std::io::{self, Read};

use bytes::{Buf, Bytes};

/// Byte source for a response body
///
/// `close` releases whatever the stream holds (socket, file, pooled
/// connection). It is called at most once by the decoder and its failure is
/// never reported to callers.
pub trait BodyStream: Read + Send {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Any [`Read`] used as a body; closing it is a no-op
#[derive(Debug)]
pub struct ReaderBody<R> {
    inner: R,
}

impl<R: Read + Send> ReaderBody<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> Read for ReaderBody<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read + Send> BodyStream for ReaderBody<R> {}

/// Body assembled from transfer chunks as they arrive
///
/// Each item of the iterator is one received chunk; an `Err` item surfaces as
/// a read failure. After `close` the remaining chunks are dropped unread.
pub struct ChunkedBody<I> {
    chunks: Option<I>,
    current: Bytes,
}

impl<I> ChunkedBody<I>
where
    I: Iterator<Item = io::Result<Bytes>>,
{
    pub fn new(chunks: I) -> Self {
        Self {
            chunks: Some(chunks),
            current: Bytes::new(),
        }
    }
}

impl<I> Read for ChunkedBody<I>
where
    I: Iterator<Item = io::Result<Bytes>>,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        while !self.current.has_remaining() {
            let Some(chunks) = self.chunks.as_mut() else {
                return Ok(0);
            };
            match chunks.next() {
                Some(Ok(chunk)) => self.current = chunk,
                Some(Err(e)) => return Err(e),
                None => {
                    self.chunks = None;
                    return Ok(0);
                }
            }
        }

        let n = buf.len().min(self.current.remaining());
        self.current.copy_to_slice(&mut buf[..n]);
        Ok(n)
    }
}

impl<I> BodyStream for ChunkedBody<I>
where
    I: Iterator<Item = io::Result<Bytes>> + Send,
{
    fn close(&mut self) -> io::Result<()> {
        self.chunks = None;
        self.current.clear();
        Ok(())
    }
}

impl<I> fmt::Debug for ChunkedBody<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedBody")
            .field("open", &self.chunks.is_some())
            .field("buffered", &self.current.len())
            .finish()
    }
}

/// Response body with its declared content type and length
pub struct ResponseBody {
    mime_type: String,
    length: Option<u64>,
    stream: Box<dyn BodyStream>,
}

impl ResponseBody {
    /// Body backed by a custom stream, length unknown.
    pub fn new(mime_type: impl Into<String>, stream: impl BodyStream + 'static) -> Self {
        Self {
            mime_type: mime_type.into(),
            length: None,
            stream: Box::new(stream),
        }
    }

    pub fn from_reader<R>(mime_type: impl Into<String>, reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::new(mime_type, ReaderBody::new(reader))
    }

    pub fn from_chunks<C>(mime_type: impl Into<String>, chunks: C) -> Self
    where
        C: IntoIterator<Item = io::Result<Bytes>>,
        C::IntoIter: Send + 'static,
    {
        Self::new(mime_type, ChunkedBody::new(chunks.into_iter()))
    }

    /// Fully buffered body; its length is known.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        let length = bytes.len() as u64;
        Self::new(mime_type, ReaderBody::new(bytes.reader())).with_length(length)
    }

    #[must_use]
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Declared content type of the body
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Declared body length, `None` when unknown
    #[must_use]
    pub fn length(&self) -> Option<u64> {
        self.length
    }

    pub(crate) fn into_stream(self) -> Box<dyn BodyStream> {
        self.stream
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseBody")
            .field("mime_type", &self.mime_type)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(parts: &[&'static str]) -> Vec<io::Result<Bytes>> {
        parts.iter().map(|p| Ok(Bytes::from_static(p.as_bytes()))).collect()
    }

    #[test]
    fn test_chunked_body_joins_chunks() -> io::Result<()> {
        let mut body = ChunkedBody::new(chunks(&["{\"na", "", "me\":", "1}"]).into_iter());
        let mut out = String::new();
        body.read_to_string(&mut out)?;
        assert_eq!(out, "{\"name\":1}");
        Ok(())
    }

    #[test]
    fn test_chunked_body_surfaces_transport_error() {
        let parts = vec![
            Ok(Bytes::from_static(b"[1,")),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
        ];
        let mut body = ChunkedBody::new(parts.into_iter());
        let mut out = Vec::new();
        let err = body.read_to_end(&mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        assert_eq!(out, b"[1,");
    }

    #[test]
    fn test_closed_chunked_body_reads_nothing() -> io::Result<()> {
        let mut body = ChunkedBody::new(chunks(&["abc", "def"]).into_iter());
        let mut first = [0u8; 2];
        body.read_exact(&mut first)?;
        body.close()?;
        let mut rest = Vec::new();
        assert_eq!(body.read_to_end(&mut rest)?, 0);
        Ok(())
    }

    #[test]
    fn test_from_bytes_knows_its_length() {
        let body = ResponseBody::from_bytes("application/json", "{}");
        assert_eq!(body.length(), Some(2));
        assert_eq!(body.mime_type(), "application/json");

        let body = ResponseBody::from_reader("text/plain", io::empty());
        assert_eq!(body.length(), None);
    }
}
