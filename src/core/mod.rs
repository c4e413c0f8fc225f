// mod.rs - Core checksumming drivers

pub mod file;
pub mod record;
pub mod report;

// Re-export main types for convenience
pub use file::{checksum_file, checksum_file_with_chunk_size};
pub use record::{checksum_record, checksum_record_with_chunk_size};
pub use report::{fasta_report, report_records, Digests, RecordReport, Report, ReportOptions};
