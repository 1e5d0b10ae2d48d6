//! Byte source handed to `serde_json`

use std::io::{self, BufRead, Read};

/// Buffered body reader that remembers how far `serde_json` has read
///
/// `serde_json` pulls one byte at a time, so the last byte read is the one a
/// syntax error points at. Between top-level values the decoder skips
/// whitespace itself to tell "another value follows" from end of input
/// without reading past it.
#[derive(Debug)]
pub struct JsonSource<R> {
    inner: R,
    offset: u64,
    last: Option<u8>,
}

impl<R: BufRead> JsonSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            offset: 0,
            last: None,
        }
    }

    /// Skips JSON whitespace. Returns false at end of input, true if another
    /// byte is waiting; that byte is left unread.
    pub fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            let buf = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                log::trace!("end of input at offset {}", self.offset);
                return Ok(false);
            }

            let skipped = buf
                .iter()
                .take_while(|&&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
                .count();
            let more = skipped < buf.len();
            self.inner.consume(skipped);
            self.offset += skipped as u64;
            if more {
                return Ok(true);
            }
        }
    }
}

impl<R> JsonSource<R> {
    /// Bytes consumed so far
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Most recent byte handed to the parser
    #[inline]
    pub fn last_byte(&self) -> Option<u8> {
        self.last
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for JsonSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.last = Some(buf[n - 1]);
            self.offset += n as u64;
        }
        Ok(n)
    }
}
