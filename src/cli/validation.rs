// validation.rs - Input validation utilities

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use log::warn;

use crate::algorithms::{AlgorithmRegistry, ConfiguredAlgorithm, DEFAULT_ALGORITHMS};
use crate::cli::args::Args;
use crate::core::ReportOptions;
use crate::error::{ChecksumError, Result};
use crate::output::OutputFormat;

pub struct ValidationResult {
    pub fasta: PathBuf,
    pub algorithms: Vec<ConfiguredAlgorithm>,
    pub out_format: OutputFormat,
    pub genome_id: Option<String>,
    pub report_options: ReportOptions,
}

/// Group `algorithm.key=value` arguments into one option string per algorithm
pub fn parse_option_args(option_args: &[String]) -> Result<HashMap<String, String>> {
    let mut grouped: HashMap<String, String> = HashMap::new();

    for raw in option_args {
        let (algorithm, pair) = raw
            .split_once('.')
            .filter(|(algorithm, pair)| !algorithm.trim().is_empty() && pair.contains('='))
            .ok_or_else(|| {
                ChecksumError::Config(format!(
                    "invalid --option '{}': expected algorithm.key=value",
                    raw
                ))
            })?;

        let entry = grouped.entry(algorithm.trim().to_lowercase()).or_default();
        if !entry.is_empty() {
            entry.push(',');
        }
        entry.push_str(pair.trim());
    }

    Ok(grouped)
}

/// Validate all command line arguments
pub fn validate_args(args: &Args, registry: &AlgorithmRegistry) -> Result<ValidationResult> {
    let fasta = args
        .fasta
        .as_ref()
        .map(PathBuf::from)
        .ok_or_else(|| ChecksumError::Config("a FASTA file is required".to_string()))?;

    let out_format = OutputFormat::from_str(args.out_format.as_deref().unwrap_or("text"))?;
    if args.genome_id.is_some() && out_format == OutputFormat::Text {
        warn!("--genome-id is only used with --out-format bento-json; ignoring it");
    }

    let names: Vec<String> = match &args.algorithms {
        Some(list) => list
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => DEFAULT_ALGORITHMS.iter().map(|s| s.to_string()).collect(),
    };
    if names.is_empty() {
        return Err(ChecksumError::Config(format!(
            "no algorithms selected. Available: {}",
            registry.get_algorithm_names().join(", ")
        )));
    }

    let options = parse_option_args(&args.option)?;
    for algorithm in options.keys() {
        if !names.iter().any(|n| n.eq_ignore_ascii_case(algorithm)) {
            warn!("Options given for '{}', which is not selected", algorithm);
        }
    }
    let algorithms = registry.resolve(&names, &options)?;

    let mut report_options = ReportOptions {
        fai: args.fai.as_ref().map(PathBuf::from),
        show_progress: args.progress,
        ..ReportOptions::default()
    };
    if let Some(chunk_size) = args.chunk_size {
        if chunk_size == 0 {
            return Err(ChecksumError::Config("--chunk-size must be greater than 0".to_string()));
        }
        report_options.file_chunk_size = chunk_size;
    }
    if let Some(chunk_size) = args.sequence_chunk_size {
        if chunk_size == 0 {
            return Err(ChecksumError::Config(
                "--sequence-chunk-size must be greater than 0".to_string(),
            ));
        }
        report_options.sequence_chunk_size = chunk_size;
    }

    if args.threads == Some(0) {
        return Err(ChecksumError::Config("--threads must be greater than 0".to_string()));
    }

    Ok(ValidationResult {
        fasta,
        algorithms,
        out_format,
        genome_id: args.genome_id.clone(),
        report_options,
    })
}
