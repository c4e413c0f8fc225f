// mod.rs - FASTA access module

pub mod chunks;
pub mod fai;
pub mod reader;

// Re-export main types for convenience
pub use chunks::{RecordChunks, SEQUENCE_CHUNK_SIZE};
pub use fai::{compute_fai, render_fai, FaiRecord};
pub use reader::{IndexedFastaReader, MemoryReader, RecordInfo, SequenceReader};
