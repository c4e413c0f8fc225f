// file.rs - Whole-file checksum driver

use std::path::Path;

use log::debug;
use rayon::prelude::*;

use crate::algorithms::{ConfiguredAlgorithm, DEFAULT_CHUNK_SIZE};
use crate::error::Result;

/// Checksum `path` with every algorithm, reading 16 KiB chunks.
/// Digests come back in the order of `algorithms`.
pub fn checksum_file(path: &Path, algorithms: &[ConfiguredAlgorithm]) -> Result<Vec<String>> {
    checksum_file_with_chunk_size(path, algorithms, DEFAULT_CHUNK_SIZE)
}

/// Run every algorithm over its own read of `path` in parallel.
///
/// The first failure fails the whole call; sibling results are dropped.
pub fn checksum_file_with_chunk_size(
    path: &Path,
    algorithms: &[ConfiguredAlgorithm],
    chunk_size: usize,
) -> Result<Vec<String>> {
    algorithms
        .par_iter()
        .map(|algorithm| {
            let digest = algorithm.checksum_file(path, chunk_size)?;
            debug!("{} {}: {}", algorithm.name(), path.display(), digest);
            Ok(digest)
        })
        .collect()
}
