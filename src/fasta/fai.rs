// fai.rs - FASTA index (.fai) computation

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ChecksumError, Result};

/// One line of a samtools-style `.fai` index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaiRecord {
    pub name: String,
    pub length: u64,
    /// Byte offset of the first base
    pub offset: u64,
    pub line_bases: u64,
    /// Bytes per line including the line terminator
    pub line_bytes: u64,
}

impl fmt::Display for FaiRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.length, self.offset, self.line_bases, self.line_bytes
        )
    }
}

struct PendingRecord {
    name: String,
    offset: u64,
    length: u64,
    line_bases: Option<u64>,
    line_bytes: Option<u64>,
    /// A short or blank line was seen; only the record end may follow
    last_line_seen: bool,
}

impl PendingRecord {
    /// Account for one sequence line of `bases` bases spanning `line_bytes` bytes.
    /// An unterminated line can only be the last line of the file.
    fn push_line(
        &mut self,
        bases: u64,
        line_bytes: u64,
        terminated: bool,
    ) -> std::result::Result<(), String> {
        if bases == 0 {
            self.last_line_seen = true;
            return Ok(());
        }
        if self.last_line_seen {
            return Err(format!("different line length in sequence '{}'", self.name));
        }

        match (self.line_bases, self.line_bytes) {
            (Some(expected_bases), Some(expected_bytes)) => {
                let uneven_terminator =
                    terminated && bases == expected_bases && line_bytes != expected_bytes;
                if bases > expected_bases || uneven_terminator {
                    return Err(format!("different line length in sequence '{}'", self.name));
                }
                if bases < expected_bases {
                    self.last_line_seen = true;
                }
            }
            _ => {
                self.line_bases = Some(bases);
                self.line_bytes = Some(line_bytes);
            }
        }

        self.length += bases;
        Ok(())
    }

    fn finish(self) -> FaiRecord {
        FaiRecord {
            name: self.name,
            length: self.length,
            offset: self.offset,
            line_bases: self.line_bases.unwrap_or(0),
            line_bytes: self.line_bytes.unwrap_or(0),
        }
    }
}

/// Scan a FASTA file once and compute its index records, like `samtools faidx`.
///
/// The record name is the header up to the first whitespace. Line geometry is
/// taken from the first sequence line of each record; every later line must
/// match it except the last, which may be shorter. Blank lines are only
/// allowed at the end of a record.
pub fn compute_fai(path: &Path) -> Result<Vec<FaiRecord>> {
    let file = File::open(path).map_err(|e| ChecksumError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut results = Vec::new();
    let mut current: Option<PendingRecord> = None;
    let mut byte_position: u64 = 0;
    let mut line: Vec<u8> = Vec::new();

    loop {
        line.clear();
        let bytes_read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| ChecksumError::io(path, e))?;
        if bytes_read == 0 {
            break;
        }
        byte_position += bytes_read as u64;

        if line.first() == Some(&b'>') {
            if let Some(record) = current.take() {
                results.push(record.finish());
            }

            let header = String::from_utf8_lossy(&line[1..]);
            let name = header.split_whitespace().next().unwrap_or("").to_string();
            current = Some(PendingRecord {
                name,
                offset: byte_position,
                length: 0,
                line_bases: None,
                line_bytes: None,
                last_line_seen: false,
            });
            continue;
        }

        let Some(record) = current.as_mut() else {
            continue;
        };

        let bases = line
            .iter()
            .rev()
            .skip_while(|b| **b == b'\n' || **b == b'\r')
            .count() as u64;
        record
            .push_line(bases, bytes_read as u64, line.last() == Some(&b'\n'))
            .map_err(|message| ChecksumError::Index {
                path: path.to_path_buf(),
                message,
            })?;
    }

    if let Some(record) = current.take() {
        results.push(record.finish());
    }

    Ok(results)
}

/// Render index records as `.fai` file content
pub fn render_fai(records: &[FaiRecord]) -> String {
    let mut text = String::new();
    for record in records {
        text.push_str(&record.to_string());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fasta(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_compute_fai_wrapped_records() {
        let file = write_fasta(">chr1 description\nACGTA\nCGT\n>chr2\nTTTTT\nGG\n");
        let records = compute_fai(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            FaiRecord {
                name: "chr1".to_string(),
                length: 8,
                offset: 18,
                line_bases: 5,
                line_bytes: 6,
            }
        );
        assert_eq!(records[1].name, "chr2");
        assert_eq!(records[1].length, 7);
        assert_eq!(records[1].offset, 34);
    }

    #[test]
    fn test_compute_fai_crlf_and_empty_record() {
        let file = write_fasta(">a\r\nACG\r\nT\r\n>empty\r\n>b\r\nGG");
        let records = compute_fai(file.path()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].length, 4);
        assert_eq!(records[0].line_bases, 3);
        assert_eq!(records[0].line_bytes, 5);
        assert_eq!(records[1].name, "empty");
        assert_eq!(records[1].length, 0);
        assert_eq!(records[1].line_bases, 0);
        assert_eq!(records[2].length, 2);
    }

    #[test]
    fn test_compute_fai_trailing_blank_lines() {
        let file = write_fasta(">a\nACGT\nAC\n\n\n>b\nGG\n");
        let records = compute_fai(file.path()).unwrap();
        assert_eq!(records[0].length, 6);
        assert_eq!(records[0].line_bases, 4);
        assert_eq!(records[1].length, 2);

        let file = write_fasta(">a\nACGT\nACGT");
        assert_eq!(compute_fai(file.path()).unwrap()[0].length, 8);
    }

    #[test]
    fn test_compute_fai_rejects_uneven_lines() {
        for content in [
            ">a\nAC\nGTAC\n",
            ">a\nACGT\nAC\nGT\n",
            ">a\nACGT\n\nACGT\n",
            ">a\nACGT\r\nACGT\n",
        ] {
            let file = write_fasta(content);
            match compute_fai(file.path()) {
                Err(ChecksumError::Index { message, .. }) => {
                    assert_eq!(message, "different line length in sequence 'a'", "{:?}", content)
                }
                other => panic!("expected index error for {:?}, got {:?}", content, other),
            }
        }
    }

    #[test]
    fn test_render_fai() {
        let records = vec![FaiRecord {
            name: "chr1".to_string(),
            length: 33,
            offset: 24,
            line_bases: 20,
            line_bytes: 21,
        }];
        assert_eq!(render_fai(&records), "chr1\t33\t24\t20\t21\n");
    }
}
