// trunc512.rs - Truncated SHA-512 algorithm implementation

use std::path::Path;

use sha2::{Digest, Sha512};

use super::feed::{update_hash_from_file, update_hash_from_sequence};
use super::options::AlgorithmOptions;
use super::traits::{ChecksumAlgorithm, ChunkSource};
use crate::error::Result;

/// Bytes of the SHA-512 digest kept when no `offset` option is given
pub const DEFAULT_TRUNC512_OFFSET: usize = 24;

/// Option key selecting how many digest bytes to keep
pub const OFFSET_OPTION: &str = "offset";

/// Finalize `hasher` and keep the first `offset` bytes.
/// Offsets past the 64-byte digest keep the whole digest.
pub(crate) fn truncated_sha512(hasher: Sha512, offset: usize) -> Vec<u8> {
    let digest = hasher.finalize();
    digest[..offset.min(digest.len())].to_vec()
}

/// TRUNC512 - first `offset` bytes of SHA-512, hex encoded
///
/// Options:
/// - `offset`: number of digest bytes to keep (default 24)
#[derive(Debug, Clone)]
pub struct Trunc512Algorithm;

impl Trunc512Algorithm {
    fn offset(&self, options: &AlgorithmOptions) -> Result<usize> {
        options.get_usize(self.name(), OFFSET_OPTION, DEFAULT_TRUNC512_OFFSET)
    }
}

impl ChecksumAlgorithm for Trunc512Algorithm {
    fn name(&self) -> &'static str {
        "TRUNC512"
    }

    fn description(&self) -> &'static str {
        "SHA-512 truncated to the first 24 bytes (option: offset), hex encoded"
    }

    fn checksum_file(
        &self,
        path: &Path,
        chunk_size: usize,
        options: &AlgorithmOptions,
    ) -> Result<String> {
        let offset = self.offset(options)?;
        let hasher = update_hash_from_file(Sha512::new(), path, chunk_size)?;
        Ok(hex::encode(truncated_sha512(hasher, offset)))
    }

    fn checksum_sequence(
        &self,
        sequence: &mut ChunkSource<'_>,
        options: &AlgorithmOptions,
    ) -> Result<String> {
        let offset = self.offset(options)?;
        let hasher = update_hash_from_sequence(Sha512::new(), sequence)?;
        Ok(hex::encode(truncated_sha512(hasher, offset)))
    }

    fn validate_options(&self, options: &AlgorithmOptions) -> Result<()> {
        self.offset(options).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA512: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

    fn digest_of_empty(options: &AlgorithmOptions) -> String {
        let mut chunks = std::iter::empty::<Result<Vec<u8>>>();
        Trunc512Algorithm.checksum_sequence(&mut chunks, options).unwrap()
    }

    #[test]
    fn test_default_offset() {
        let digest = digest_of_empty(&AlgorithmOptions::default());
        assert_eq!(digest, "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc");
        assert_eq!(digest.len(), DEFAULT_TRUNC512_OFFSET * 2);
    }

    #[test]
    fn test_offset_option() {
        let digest = digest_of_empty(&AlgorithmOptions::parse("offset=4"));
        assert_eq!(digest, "cf83e135");
    }

    #[test]
    fn test_offset_clamps_to_digest_length() {
        let full = digest_of_empty(&AlgorithmOptions::parse("offset=64"));
        let beyond = digest_of_empty(&AlgorithmOptions::parse("offset=1000"));
        assert_eq!(full, EMPTY_SHA512);
        assert_eq!(beyond, full);
    }

    #[test]
    fn test_invalid_offset() {
        let options = AlgorithmOptions::parse("offset=-1");
        assert!(Trunc512Algorithm.validate_options(&options).is_err());
        let mut chunks = std::iter::empty::<Result<Vec<u8>>>();
        assert!(Trunc512Algorithm.checksum_sequence(&mut chunks, &options).is_err());
    }
}
