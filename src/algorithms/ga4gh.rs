// ga4gh.rs - GA4GH refget sequence identifier

use std::path::Path;

use sha2::{Digest, Sha512};

use super::feed::{update_hash_from_file, update_hash_from_sequence};
use super::options::AlgorithmOptions;
use super::traits::{ChecksumAlgorithm, ChunkSource};
use super::trunc512::{truncated_sha512, DEFAULT_TRUNC512_OFFSET, OFFSET_OPTION};
use crate::error::Result;

/// GA4GH - `SQ.` + base64url(first 24 bytes of SHA-512), as used by refget and VRS
///
/// Options:
/// - `offset`: number of digest bytes to keep (default 24)
#[derive(Debug, Clone)]
pub struct Ga4ghAlgorithm;

impl Ga4ghAlgorithm {
    fn format(hasher: Sha512, offset: usize) -> String {
        format!("SQ.{}", base64_url::encode(&truncated_sha512(hasher, offset)))
    }

    fn offset(&self, options: &AlgorithmOptions) -> Result<usize> {
        options.get_usize(self.name(), OFFSET_OPTION, DEFAULT_TRUNC512_OFFSET)
    }
}

impl ChecksumAlgorithm for Ga4ghAlgorithm {
    fn name(&self) -> &'static str {
        "GA4GH"
    }

    fn description(&self) -> &'static str {
        "GA4GH sequence identifier (SQ. + base64url of truncated SHA-512)"
    }

    fn checksum_file(
        &self,
        path: &Path,
        chunk_size: usize,
        options: &AlgorithmOptions,
    ) -> Result<String> {
        let offset = self.offset(options)?;
        let hasher = update_hash_from_file(Sha512::new(), path, chunk_size)?;
        Ok(Self::format(hasher, offset))
    }

    fn checksum_sequence(
        &self,
        sequence: &mut ChunkSource<'_>,
        options: &AlgorithmOptions,
    ) -> Result<String> {
        let offset = self.offset(options)?;
        let hasher = update_hash_from_sequence(Sha512::new(), sequence)?;
        Ok(Self::format(hasher, offset))
    }

    fn validate_options(&self, options: &AlgorithmOptions) -> Result<()> {
        self.offset(options).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ga4gh_empty() {
        let mut chunks = std::iter::empty::<Result<Vec<u8>>>();
        let digest = Ga4ghAlgorithm
            .checksum_sequence(&mut chunks, &AlgorithmOptions::default())
            .unwrap();
        assert_eq!(digest, "SQ.z4PhNX7vuL3xVChQ1m2AB9Yg5AULVxXc");
    }

    #[test]
    fn test_ga4gh_chunked() {
        let chunks: Vec<Result<Vec<u8>>> = vec![
            Ok(b"ACGTACGTTAGCCGATNNAC".to_vec()),
            Ok(b"GTAGGCTAGCTAA".to_vec()),
        ];
        let digest = Ga4ghAlgorithm
            .checksum_sequence(&mut chunks.into_iter(), &AlgorithmOptions::default())
            .unwrap();
        assert_eq!(digest, "SQ.TYoTgEb5oJkXseBtzDTbj4Tddvyx21W-");
        assert_eq!(Ga4ghAlgorithm.key(), "ga4gh");
    }
}
