//! Iterator adapter over [`ChunkedRecordReader::next_record`]

use std::iter::FusedIterator;

use super::reader::ChunkedRecordReader;
use crate::error::Result;
use crate::series::Series;

/// Remaining series of a reader
///
/// Yields at most one error, after which the iterator is finished: a failed
/// read leaves the body at an unknown position.
#[derive(Debug)]
pub struct Records<'a> {
    reader: &'a mut ChunkedRecordReader,
    failed: bool,
}

impl<'a> Records<'a> {
    pub(super) fn new(reader: &'a mut ChunkedRecordReader) -> Self {
        Self {
            reader,
            failed: false,
        }
    }
}

impl Iterator for Records<'_> {
    type Item = Result<Series>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.reader.next_record() {
            Ok(Some(series)) => Some(Ok(series)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Records<'_> {}
