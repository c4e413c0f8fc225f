// traits.rs - Core traits and types for the checksum algorithm system

use std::fmt::Debug;
use std::path::Path;
use std::sync::Arc;

use super::options::AlgorithmOptions;
use crate::error::Result;

/// Default number of bytes read per chunk when checksumming a whole file
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

/// A lazily produced, single-pass sequence of byte chunks
pub type ChunkSource<'a> = dyn Iterator<Item = Result<Vec<u8>>> + 'a;

/// Trait for checksum strategies - pluggable hash algorithms
///
/// An algorithm consumes either a file on disk or a stream of byte chunks and
/// produces a digest string. Both operations receive the algorithm-specific
/// options; unknown keys are ignored.
pub trait ChecksumAlgorithm: Send + Sync + Debug {
    /// Stable name used as a key in reports (e.g. "MD5")
    fn name(&self) -> &'static str;

    /// Get a description of this algorithm
    fn description(&self) -> &'static str;

    /// Checksum an entire file, reading it `chunk_size` bytes at a time
    fn checksum_file(
        &self,
        path: &Path,
        chunk_size: usize,
        options: &AlgorithmOptions,
    ) -> Result<String>;

    /// Checksum a stream of byte chunks, consumed in order until exhausted
    fn checksum_sequence(
        &self,
        sequence: &mut ChunkSource<'_>,
        options: &AlgorithmOptions,
    ) -> Result<String>;

    /// Check options up front so a bad value fails before any I/O happens
    fn validate_options(&self, _options: &AlgorithmOptions) -> Result<()> {
        Ok(())
    }

    /// Lowercase key used in JSON output
    fn key(&self) -> String {
        self.name().to_lowercase()
    }
}

/// An algorithm paired with the options it runs with
#[derive(Debug, Clone)]
pub struct ConfiguredAlgorithm {
    pub algorithm: Arc<dyn ChecksumAlgorithm>,
    pub options: AlgorithmOptions,
}

impl ConfiguredAlgorithm {
    pub fn new(algorithm: Arc<dyn ChecksumAlgorithm>) -> Self {
        Self {
            algorithm,
            options: AlgorithmOptions::default(),
        }
    }

    pub fn with_options(algorithm: Arc<dyn ChecksumAlgorithm>, options: AlgorithmOptions) -> Self {
        Self { algorithm, options }
    }

    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn checksum_file(&self, path: &Path, chunk_size: usize) -> Result<String> {
        self.algorithm.checksum_file(path, chunk_size, &self.options)
    }

    pub fn checksum_sequence(&self, sequence: &mut ChunkSource<'_>) -> Result<String> {
        self.algorithm.checksum_sequence(sequence, &self.options)
    }
}

impl<A: ChecksumAlgorithm + 'static> From<A> for ConfiguredAlgorithm {
    fn from(algorithm: A) -> Self {
        Self::new(Arc::new(algorithm))
    }
}
