// lib.rs - fasta-checksum library root

//! # fasta-checksum - reproducible content checksums for FASTA files
//!
//! Computes digests at two granularities: the whole file as stored on disk, and
//! the decoded bases of every record (headers and line wrapping excluded).
//! Several algorithms run side by side over the same input and the results
//! are collected into a [`Report`] that renders as tab-separated text or JSON.
//!
//! ## Features
//!
//! - **Plugin system**: MD5, truncated SHA-512 and GA4GH identifiers behind one
//!   [`ChecksumAlgorithm`] trait, plus runtime registration
//! - **Chunked streaming**: files are read and records fetched in bounded chunks
//! - **Parallel fan-out**: algorithms run concurrently, results keep input order
//! - **Indexed access**: uses an existing `.fai` or computes one in memory
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use fasta_checksum::prelude::*;
//!
//! let algorithms = AlgorithmRegistry::new().defaults()?;
//! let report = fasta_report(
//!     std::path::Path::new("genome.fa"),
//!     &algorithms,
//!     &ReportOptions::default(),
//! )?;
//!
//! print!("{}", report.as_text_report());
//! println!("{}", report.as_bento_json(Some("GRCh38"))?);
//! # Ok::<(), fasta_checksum::ChecksumError>(())
//! ```

// Re-export all main modules
pub mod algorithms;
pub mod cli;
pub mod core;
pub mod error;
pub mod fasta;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::algorithms::{
        AlgorithmOptions, AlgorithmRegistry, ChecksumAlgorithm, ConfiguredAlgorithm,
    };
    pub use crate::algorithms::{Ga4ghAlgorithm, Md5Algorithm, Trunc512Algorithm};
    pub use crate::core::{checksum_file, checksum_record, fasta_report};
    pub use crate::core::{Digests, RecordReport, Report, ReportOptions};
    pub use crate::error::{ChecksumError, Result};
    pub use crate::fasta::{IndexedFastaReader, MemoryReader, SequenceReader};
    pub use crate::output::{write_report, OutputFormat};
}

// Re-export main types at the root level for convenience
pub use algorithms::{AlgorithmRegistry, ChecksumAlgorithm, ConfiguredAlgorithm};
pub use self::core::{checksum_file, checksum_record, fasta_report, Report, ReportOptions};
pub use error::{ChecksumError, Result};
pub use fasta::{IndexedFastaReader, SequenceReader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("fasta-checksum v{} - FASTA file and contig checksums", VERSION)
}
