// md5.rs - MD5 algorithm implementation

use std::path::Path;

use super::feed::{update_hash_from_file, update_hash_from_sequence};
use super::options::AlgorithmOptions;
use super::traits::{ChecksumAlgorithm, ChunkSource};
use crate::error::Result;

/// MD5 - lowercase hex digest, no options
#[derive(Debug, Clone)]
pub struct Md5Algorithm;

impl ChecksumAlgorithm for Md5Algorithm {
    fn name(&self) -> &'static str {
        "MD5"
    }

    fn description(&self) -> &'static str {
        "MD5 hex digest"
    }

    fn checksum_file(
        &self,
        path: &Path,
        chunk_size: usize,
        _options: &AlgorithmOptions,
    ) -> Result<String> {
        let context = update_hash_from_file(md5::Context::new(), path, chunk_size)?;
        Ok(format!("{:x}", context.compute()))
    }

    fn checksum_sequence(
        &self,
        sequence: &mut ChunkSource<'_>,
        _options: &AlgorithmOptions,
    ) -> Result<String> {
        let context = update_hash_from_sequence(md5::Context::new(), sequence)?;
        Ok(format!("{:x}", context.compute()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_sequence() {
        let chunks: Vec<Result<Vec<u8>>> = vec![Ok(b"ACGT".to_vec()), Ok(b"ACGT".to_vec())];
        let mut chunks = chunks.into_iter();
        let digest = Md5Algorithm
            .checksum_sequence(&mut chunks, &AlgorithmOptions::default())
            .unwrap();
        assert_eq!(digest, format!("{:x}", md5::compute(b"ACGTACGT")));
    }

    #[test]
    fn test_md5_empty_sequence() {
        let mut chunks = std::iter::empty::<Result<Vec<u8>>>();
        let digest = Md5Algorithm
            .checksum_sequence(&mut chunks, &AlgorithmOptions::default())
            .unwrap();
        assert_eq!(digest, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_properties() {
        assert_eq!(Md5Algorithm.name(), "MD5");
        assert_eq!(Md5Algorithm.key(), "md5");
    }
}
