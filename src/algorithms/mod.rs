// mod.rs - Checksum algorithms module root

pub mod feed;
pub mod ga4gh;
pub mod md5;
pub mod options;
pub mod registry;
pub mod traits;
pub mod trunc512;

// Re-export main types for convenience
pub use feed::{update_hash_from_file, update_hash_from_sequence, HashState};
pub use ga4gh::Ga4ghAlgorithm;
pub use self::md5::Md5Algorithm;
pub use options::AlgorithmOptions;
pub use registry::{AlgorithmRegistry, DEFAULT_ALGORITHMS};
pub use traits::{ChecksumAlgorithm, ChunkSource, ConfiguredAlgorithm, DEFAULT_CHUNK_SIZE};
pub use trunc512::{Trunc512Algorithm, DEFAULT_TRUNC512_OFFSET};
