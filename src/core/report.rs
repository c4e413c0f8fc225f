// report.rs - Whole-file plus per-record checksum report

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use super::file::checksum_file_with_chunk_size;
use super::record::checksum_record_with_chunk_size;
use crate::algorithms::{ConfiguredAlgorithm, DEFAULT_CHUNK_SIZE};
use crate::error::{ChecksumError, Result};
use crate::fasta::{IndexedFastaReader, SequenceReader, SEQUENCE_CHUNK_SIZE};

/// Digests keyed by algorithm name, in configured algorithm order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digests {
    entries: Vec<(&'static str, String)>,
}

impl Digests {
    /// Pair each algorithm with the digest at the same position
    pub fn from_ordered(algorithms: &[ConfiguredAlgorithm], digests: Vec<String>) -> Self {
        Self {
            entries: algorithms.iter().map(|a| a.name()).zip(digests).collect(),
        }
    }

    pub fn get(&self, algorithm: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(algorithm))
            .map(|(_, digest)| digest.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(name, digest)| (*name, digest.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Length and content digests of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    pub name: String,
    pub length: u64,
    pub digests: Digests,
}

/// Immutable result of one checksumming run over a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    fasta: PathBuf,
    fai: Option<PathBuf>,
    fasta_size: u64,
    file_digests: Digests,
    records: Vec<RecordReport>,
}

impl Report {
    pub fn new(
        fasta: PathBuf,
        fai: Option<PathBuf>,
        fasta_size: u64,
        file_digests: Digests,
        records: Vec<RecordReport>,
    ) -> Self {
        Self {
            fasta,
            fai,
            fasta_size,
            file_digests,
            records,
        }
    }

    pub fn fasta_path(&self) -> &Path {
        &self.fasta
    }

    /// Index file used for record access; `None` when it was computed in memory
    pub fn fai_path(&self) -> Option<&Path> {
        self.fai.as_deref()
    }

    /// File size in bytes
    pub fn fasta_size(&self) -> u64 {
        self.fasta_size
    }

    pub fn file_digests(&self) -> &Digests {
        &self.file_digests
    }

    pub fn file_digest(&self, algorithm: &str) -> Option<&str> {
        self.file_digests.get(algorithm)
    }

    /// Records in reader order
    pub fn records(&self) -> &[RecordReport] {
        &self.records
    }

    pub fn record(&self, name: &str) -> Option<&RecordReport> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Tunables for a report run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Bytes per read for whole-file digests
    pub file_chunk_size: usize,
    /// Bases per fetch for record digests
    pub sequence_chunk_size: u64,
    /// Explicit `.fai` path; otherwise `<fasta>.fai` or an in-memory index
    pub fai: Option<PathBuf>,
    /// Draw a progress bar over records on stderr
    pub show_progress: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            file_chunk_size: DEFAULT_CHUNK_SIZE,
            sequence_chunk_size: SEQUENCE_CHUNK_SIZE,
            fai: None,
            show_progress: false,
        }
    }
}

/// Build a report for `path`: whole-file digests, then every record in file order.
///
/// The FASTA reader is dropped before returning, whether or not a record fails.
pub fn fasta_report(
    path: &Path,
    algorithms: &[ConfiguredAlgorithm],
    options: &ReportOptions,
) -> Result<Report> {
    let fasta_size = fs::metadata(path)
        .map_err(|e| ChecksumError::io(path, e))?
        .len();

    let file_digests = checksum_file_with_chunk_size(path, algorithms, options.file_chunk_size)?;
    info!(
        "File digests computed for {} ({} bytes)",
        path.display(),
        fasta_size
    );

    let (fai, records) = {
        let mut reader = IndexedFastaReader::open_with_index(path, options.fai.as_deref())?;
        info!(
            "{} records indexed in {}",
            reader.records().len(),
            reader.path().display()
        );
        let fai = reader.index_path().map(Path::to_path_buf);
        (fai, report_records(&mut reader, algorithms, options)?)
    };

    Ok(Report::new(
        path.to_path_buf(),
        fai,
        fasta_size,
        Digests::from_ordered(algorithms, file_digests),
        records,
    ))
}

/// Checksum every record of `reader`, one record at a time, in reader order
pub fn report_records<R>(
    reader: &mut R,
    algorithms: &[ConfiguredAlgorithm],
    options: &ReportOptions,
) -> Result<Vec<RecordReport>>
where
    R: SequenceReader + Send,
{
    let names = reader.record_names();

    let pb = if options.show_progress {
        ProgressBar::new(names.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    ) {
        pb.set_style(style);
    }

    let mut records = Vec::with_capacity(names.len());
    for name in names {
        pb.set_message(name.clone());
        let length = reader.record_length(&name)?;
        let digests =
            checksum_record_with_chunk_size(reader, &name, algorithms, options.sequence_chunk_size)?;

        records.push(RecordReport {
            name,
            length,
            digests: Digests::from_ordered(algorithms, digests),
        });
        pb.inc(1);
    }

    pb.finish_with_message(format!("{} records checksummed", records.len()));
    Ok(records)
}
