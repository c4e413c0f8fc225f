// record.rs - Per-record content checksum driver

use std::sync::Mutex;

use log::debug;
use rayon::prelude::*;

use crate::algorithms::ConfiguredAlgorithm;
use crate::error::Result;
use crate::fasta::{RecordChunks, SequenceReader, SEQUENCE_CHUNK_SIZE};

/// Checksum the bases of record `name`, fetching 16 Ki bases at a time.
/// Digests come back in the order of `algorithms`.
pub fn checksum_record<R>(
    reader: &mut R,
    name: &str,
    algorithms: &[ConfiguredAlgorithm],
) -> Result<Vec<String>>
where
    R: SequenceReader + Send,
{
    checksum_record_with_chunk_size(reader, name, algorithms, SEQUENCE_CHUNK_SIZE)
}

/// Run every algorithm over its own chunk stream of `name` in parallel.
///
/// Each algorithm re-fetches the record; fetches are serialized on the reader.
/// A zero-length record gives each algorithm's digest of empty input.
pub fn checksum_record_with_chunk_size<R>(
    reader: &mut R,
    name: &str,
    algorithms: &[ConfiguredAlgorithm],
    chunk_size: u64,
) -> Result<Vec<String>>
where
    R: SequenceReader + Send,
{
    let length = reader.record_length(name)?;
    let shared = Mutex::new(reader);

    algorithms
        .par_iter()
        .map(|algorithm| {
            let mut chunks = RecordChunks::new(&shared, name, length, chunk_size);
            let digest = algorithm.checksum_sequence(&mut chunks)?;
            debug!("{} {} ({} bases): {}", algorithm.name(), name, length, digest);
            Ok(digest)
        })
        .collect()
}
