// chunks.rs - Lazy chunk iterator over one record

use std::sync::Mutex;

use super::reader::SequenceReader;
use crate::error::{ChecksumError, Result};

/// Bases fetched per chunk when checksumming a record
pub const SEQUENCE_CHUNK_SIZE: u64 = 16 * 1024;

/// Pull-based producer of a record's bases as ASCII byte chunks.
///
/// Yields `[0, n)`, `[n, 2n)`, ... up to the record length, fetching each range
/// only when asked. Single pass; build a new one per consumer. The reader is
/// locked for the duration of each fetch only.
pub struct RecordChunks<'a, R> {
    reader: &'a Mutex<R>,
    name: &'a str,
    length: u64,
    chunk_size: u64,
    offset: u64,
    failed: bool,
}

impl<'a, R: SequenceReader> RecordChunks<'a, R> {
    pub fn new(reader: &'a Mutex<R>, name: &'a str, length: u64, chunk_size: u64) -> Self {
        Self {
            reader,
            name,
            length,
            chunk_size: chunk_size.max(1),
            offset: 0,
            failed: false,
        }
    }

    fn fetch_chunk(&self, start: u64, end: u64) -> Result<Vec<u8>> {
        let text = {
            let mut reader = self.reader.lock().unwrap_or_else(|p| p.into_inner());
            reader.fetch(self.name, start, end)?
        };

        if !text.is_ascii() {
            let position = text.bytes().position(|b| !b.is_ascii()).unwrap_or(0);
            return Err(ChecksumError::NonAscii {
                record: self.name.to_string(),
                offset: start + position as u64,
            });
        }
        Ok(text.into_bytes())
    }
}

impl<R: SequenceReader> Iterator for RecordChunks<'_, R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.length {
            return None;
        }

        let start = self.offset;
        let end = (start + self.chunk_size).min(self.length);
        self.offset = end;

        let chunk = self.fetch_chunk(start, end);
        self.failed = chunk.is_err();
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.length.saturating_sub(self.offset).div_ceil(self.chunk_size) as usize;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fasta::reader::MemoryReader;

    #[test]
    fn test_chunks_cover_record_in_order() {
        let reader = Mutex::new(MemoryReader::new().with_record("r", "ACGTACGTAC"));
        let chunks: Vec<Vec<u8>> = RecordChunks::new(&reader, "r", 10, 4)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(chunks, vec![b"ACGT".to_vec(), b"ACGT".to_vec(), b"AC".to_vec()]);
    }

    #[test]
    fn test_zero_length_record_yields_nothing() {
        let reader = Mutex::new(MemoryReader::new().with_record("empty", ""));
        let mut chunks = RecordChunks::new(&reader, "empty", 0, 4);
        assert_eq!(chunks.size_hint(), (0, Some(0)));
        assert!(chunks.next().is_none());
    }

    #[test]
    fn test_independent_instances() {
        let reader = Mutex::new(MemoryReader::new().with_record("r", "ACGTTT"));
        let first: Vec<_> = RecordChunks::new(&reader, "r", 6, 4).collect();
        let second: Vec<_> = RecordChunks::new(&reader, "r", 6, 4).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_stops_after_error() {
        let reader = Mutex::new(MemoryReader::new().with_record("r", "ACGT"));
        // Claimed length exceeds the record, so the second fetch fails.
        let results: Vec<_> = RecordChunks::new(&reader, "r", 12, 4).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_non_ascii_rejected() {
        let reader = Mutex::new(MemoryReader::new().with_record("r", "ACGé"));
        let result: Result<Vec<Vec<u8>>> = RecordChunks::new(&reader, "r", 3, 8).collect();
        assert!(result.is_ok());
        let reader = Mutex::new(MemoryReader::new().with_record("r", "AéCG"));
        let result: Result<Vec<Vec<u8>>> = RecordChunks::new(&reader, "r", 5, 8).collect();
        assert!(matches!(result, Err(ChecksumError::NonAscii { offset: 1, .. })));
    }
}
