// reader.rs - Random-access sequence readers

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use bio::io::fasta;
use log::{debug, warn};

use super::fai::{compute_fai, render_fai};
use crate::error::{ChecksumError, Result};

/// Name and base count of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInfo {
    pub name: String,
    pub length: u64,
}

/// Minimal random access to the records of a sequence file
pub trait SequenceReader {
    /// Record names in file order
    fn record_names(&self) -> Vec<String>;

    /// Number of bases in `name`
    fn record_length(&self, name: &str) -> Result<u64>;

    /// Bases `[start, end)` of `name` as text
    fn fetch(&mut self, name: &str, start: u64, end: u64) -> Result<String>;
}

impl<R: SequenceReader + ?Sized> SequenceReader for &mut R {
    fn record_names(&self) -> Vec<String> {
        (**self).record_names()
    }

    fn record_length(&self, name: &str) -> Result<u64> {
        (**self).record_length(name)
    }

    fn fetch(&mut self, name: &str, start: u64, end: u64) -> Result<String> {
        (**self).fetch(name, start, end)
    }
}

fn check_range(name: &str, start: u64, end: u64, length: u64) -> Result<()> {
    if start > end || end > length {
        return Err(ChecksumError::Fetch {
            record: name.to_string(),
            start,
            end,
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("range outside record of length {}", length),
            ),
        });
    }
    Ok(())
}

/// Indexed FASTA reader backed by `bio::io::fasta::IndexedReader`.
///
/// The `.fai` index is taken from an explicit path, from `<fasta>.fai` when it
/// exists, or computed in memory. The file handle is closed on drop.
pub struct IndexedFastaReader {
    path: PathBuf,
    fai: Option<PathBuf>,
    records: Vec<RecordInfo>,
    lengths: HashMap<String, u64>,
    reader: fasta::IndexedReader<File>,
}

impl IndexedFastaReader {
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_index(path, None)
    }

    pub fn open_with_index(path: &Path, fai: Option<&Path>) -> Result<Self> {
        let index_error = |message: String| ChecksumError::Index {
            path: path.to_path_buf(),
            message,
        };

        let default_fai = PathBuf::from(format!("{}.fai", path.display()));
        let fai = match fai {
            Some(fai_path) => Some(fai_path.to_path_buf()),
            None if default_fai.is_file() => Some(default_fai),
            None => None,
        };
        let index = match &fai {
            Some(fai_path) => {
                debug!("Reading FASTA index {}", fai_path.display());
                let fai_file = File::open(fai_path).map_err(|e| ChecksumError::io(fai_path, e))?;
                fasta::Index::new(fai_file).map_err(|e| index_error(e.to_string()))?
            }
            None => {
                warn!(
                    "No index found for {}; computing one in memory",
                    path.display()
                );
                let fai_text = render_fai(&compute_fai(path)?);
                fasta::Index::new(fai_text.as_bytes()).map_err(|e| index_error(e.to_string()))?
            }
        };

        let records: Vec<RecordInfo> = index
            .sequences()
            .into_iter()
            .map(|s| RecordInfo {
                name: s.name,
                length: s.len,
            })
            .collect();
        let lengths = records
            .iter()
            .map(|r| (r.name.clone(), r.length))
            .collect();

        let file = File::open(path).map_err(|e| ChecksumError::io(path, e))?;
        let reader = fasta::IndexedReader::with_index(file, index);

        Ok(Self {
            path: path.to_path_buf(),
            fai,
            records,
            lengths,
            reader,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `.fai` file the index was read from; `None` when computed in memory
    pub fn index_path(&self) -> Option<&Path> {
        self.fai.as_deref()
    }

    /// Records in file order
    pub fn records(&self) -> &[RecordInfo] {
        &self.records
    }
}

impl SequenceReader for IndexedFastaReader {
    fn record_names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }

    fn record_length(&self, name: &str) -> Result<u64> {
        self.lengths
            .get(name)
            .copied()
            .ok_or_else(|| ChecksumError::UnknownRecord(name.to_string()))
    }

    fn fetch(&mut self, name: &str, start: u64, end: u64) -> Result<String> {
        let length = self.record_length(name)?;
        check_range(name, start, end, length)?;

        let fetch_error = |source: io::Error| ChecksumError::Fetch {
            record: name.to_string(),
            start,
            end,
            source,
        };

        let mut seq = Vec::with_capacity((end - start) as usize);
        self.reader.fetch(name, start, end).map_err(fetch_error)?;
        self.reader.read(&mut seq).map_err(fetch_error)?;

        String::from_utf8(seq)
            .map_err(|e| fetch_error(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// In-memory reader over `(name, bases)` pairs, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    records: Vec<(String, String)>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, name: &str, bases: &str) -> Self {
        self.records.push((name.to_string(), bases.to_string()));
        self
    }

    fn bases(&self, name: &str) -> Result<&str> {
        self.records
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, bases)| bases.as_str())
            .ok_or_else(|| ChecksumError::UnknownRecord(name.to_string()))
    }
}

impl SequenceReader for MemoryReader {
    fn record_names(&self) -> Vec<String> {
        self.records.iter().map(|(n, _)| n.clone()).collect()
    }

    fn record_length(&self, name: &str) -> Result<u64> {
        Ok(self.bases(name)?.len() as u64)
    }

    fn fetch(&mut self, name: &str, start: u64, end: u64) -> Result<String> {
        let bases = self.bases(name)?;
        check_range(name, start, end, bases.len() as u64)?;
        bases
            .get(start as usize..end as usize)
            .map(str::to_string)
            .ok_or_else(|| ChecksumError::NonAscii {
                record: name.to_string(),
                offset: start,
            })
    }
}
