// mod.rs - Report formatters module

use std::fmt::Write as _;
use std::io::Write;
use std::str::FromStr;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::core::{Digests, RecordReport, Report};
use crate::error::{ChecksumError, Result};

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    BentoJson,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::BentoJson => "bento-json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "bento-json" => Ok(OutputFormat::BentoJson),
            _ => Err(ChecksumError::Config(format!(
                "unsupported output format: {}. Use: text, bento-json",
                s
            ))),
        }
    }
}

fn push_digests(line: &mut String, digests: &Digests) {
    for (algorithm, digest) in digests.iter() {
        let _ = write!(line, "\t{}\t{}", algorithm, digest);
    }
}

impl Report {
    /// Tab-separated report.
    ///
    /// First line: `file` then algorithm/digest pairs, newline-terminated.
    /// Then one line per record: name, length, algorithm/digest pairs. The last
    /// record line has no trailing newline.
    pub fn as_text_report(&self) -> String {
        let mut text = String::from("file");
        push_digests(&mut text, self.file_digests());
        text.push('\n');

        let lines: Vec<String> = self
            .records()
            .iter()
            .map(|record| {
                let mut line = format!("{}\t{}", record.name, record.length);
                push_digests(&mut line, &record.digests);
                line
            })
            .collect();
        text.push_str(&lines.join("\n"));

        text
    }

    /// Pretty-printed JSON: lowercase whole-file digests, optional `id`, the
    /// `fasta` and `fai` paths (`fai` is null for an in-memory index),
    /// `fasta_size`, then `contigs` in reader order.
    pub fn as_bento_json(&self, genome_id: Option<&str>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&BentoJson {
            report: self,
            genome_id,
        })?)
    }
}

struct BentoJson<'a> {
    report: &'a Report,
    genome_id: Option<&'a str>,
}

impl Serialize for BentoJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (algorithm, digest) in self.report.file_digests().iter() {
            map.serialize_entry(&algorithm.to_lowercase(), digest)?;
        }
        if let Some(id) = self.genome_id {
            map.serialize_entry("id", id)?;
        }
        map.serialize_entry("fasta", &self.report.fasta_path().to_string_lossy())?;
        map.serialize_entry(
            "fai",
            &self.report.fai_path().map(|fai| fai.to_string_lossy()),
        )?;
        map.serialize_entry("fasta_size", &self.report.fasta_size())?;
        map.serialize_entry("contigs", &Contigs(self.report.records()))?;
        map.end()
    }
}

struct Contigs<'a>(&'a [RecordReport]);

impl Serialize for Contigs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for record in self.0 {
            seq.serialize_element(&Contig(record))?;
        }
        seq.end()
    }
}

struct Contig<'a>(&'a RecordReport);

impl Serialize for Contig<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.0.name)?;
        for (algorithm, digest) in self.0.digests.iter() {
            map.serialize_entry(&algorithm.to_lowercase(), digest)?;
        }
        map.serialize_entry("length", &self.0.length)?;
        map.end()
    }
}

/// Render `report` in `format`
pub fn render_report(report: &Report, format: OutputFormat, genome_id: Option<&str>) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.as_text_report()),
        OutputFormat::BentoJson => report.as_bento_json(genome_id),
    }
}

/// Write the rendered report; JSON gets a trailing newline, text does not
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &Report,
    format: OutputFormat,
    genome_id: Option<&str>,
) -> Result<()> {
    let rendered = render_report(report, format, genome_id)?;

    writer
        .write_all(rendered.as_bytes())
        .map_err(ChecksumError::Output)?;
    if format == OutputFormat::BentoJson {
        writer.write_all(b"\n").map_err(ChecksumError::Output)?;
    }
    writer.flush().map_err(ChecksumError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{ConfiguredAlgorithm, Md5Algorithm, Trunc512Algorithm};
    use std::path::PathBuf;

    fn sample_report() -> Report {
        let algorithms: Vec<ConfiguredAlgorithm> =
            vec![Md5Algorithm.into(), Trunc512Algorithm.into()];
        let digests = |a: &str, b: &str| {
            Digests::from_ordered(&algorithms, vec![a.to_string(), b.to_string()])
        };

        Report::new(
            PathBuf::from("genome.fa"),
            Some(PathBuf::from("genome.fa.fai")),
            95,
            digests("f1", "f2"),
            vec![
                RecordReport {
                    name: "chr1".to_string(),
                    length: 33,
                    digests: digests("a1", "a2"),
                },
                RecordReport {
                    name: "chr2".to_string(),
                    length: 28,
                    digests: digests("b1", "b2"),
                },
            ],
        )
    }

    #[test]
    fn test_text_report() {
        let text = sample_report().as_text_report();
        assert_eq!(
            text,
            "file\tMD5\tf1\tTRUNC512\tf2\n\
             chr1\t33\tMD5\ta1\tTRUNC512\ta2\n\
             chr2\t28\tMD5\tb1\tTRUNC512\tb2"
        );
        assert_eq!(text.split('\n').count(), 3);
    }

    #[test]
    fn test_text_report_without_records() {
        let report = Report::new(
            PathBuf::from("x.fa"),
            None,
            0,
            Digests::default(),
            Vec::new(),
        );
        assert_eq!(report.as_text_report(), "file\n");
    }

    #[test]
    fn test_bento_json_key_order() {
        let json = sample_report().as_bento_json(Some("hg-test")).unwrap();
        let md5 = json.find("\"md5\"").unwrap();
        let trunc = json.find("\"trunc512\"").unwrap();
        let id = json.find("\"id\"").unwrap();
        let fasta = json.find("\"fasta\"").unwrap();
        let fai = json.find("\"fai\"").unwrap();
        let size = json.find("\"fasta_size\"").unwrap();
        let contigs = json.find("\"contigs\"").unwrap();
        assert!(md5 < trunc && trunc < id && id < fasta);
        assert!(fasta < fai && fai < size && size < contigs);
        assert!(json.starts_with("{\n  \"md5\": \"f1\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], "hg-test");
        assert_eq!(value["fasta"], "genome.fa");
        assert_eq!(value["fai"], "genome.fa.fai");
        assert_eq!(value["fasta_size"], 95);
        assert_eq!(value["contigs"].as_array().unwrap().len(), 2);
        assert_eq!(value["contigs"][0]["name"], "chr1");
        assert_eq!(value["contigs"][0]["md5"], "a1");
        assert_eq!(value["contigs"][1]["length"], 28);
    }

    #[test]
    fn test_bento_json_without_id() {
        let value: serde_json::Value =
            serde_json::from_str(&sample_report().as_bento_json(None).unwrap()).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["trunc512"], "f2");
    }

    #[test]
    fn test_output_format() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(
            "Bento-JSON".parse::<OutputFormat>().unwrap(),
            OutputFormat::BentoJson
        );
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::BentoJson.as_str(), "bento-json");
    }

    #[test]
    fn test_write_report() {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(), OutputFormat::BentoJson, None).unwrap();
        assert!(out.ends_with(b"}\n"));

        let mut out = Vec::new();
        write_report(&mut out, &sample_report(), OutputFormat::Text, None).unwrap();
        assert!(out.ends_with(b"b2"));
    }

    #[test]
    fn test_bento_json_in_memory_index() {
        let report = Report::new(
            PathBuf::from("x.fa"),
            None,
            0,
            Digests::default(),
            Vec::new(),
        );
        let value: serde_json::Value =
            serde_json::from_str(&report.as_bento_json(None).unwrap()).unwrap();
        assert_eq!(value["fasta"], "x.fa");
        assert!(value["fai"].is_null());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_report_failure() {
        let result = write_report(&mut ClosedPipe, &sample_report(), OutputFormat::Text, None);
        match result {
            Err(ChecksumError::Output(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe)
            }
            other => panic!("expected output error, got {:?}", other),
        }
    }
}
