// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::error::Result;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.fasta.is_none() {
            self.fasta = config.fasta;
        }
        if self.fai.is_none() {
            self.fai = config.fai;
        }
        if self.genome_id.is_none() {
            self.genome_id = config.genome_id;
        }
        if self.out_format.is_none() {
            self.out_format = config.out_format;
        }

        // Algorithms; file options go first so repeated --option values win
        if self.algorithms.is_none() {
            self.algorithms = config.algorithms.map(|names| names.join(","));
        }
        if let Some(options) = config.options {
            let mut keys: Vec<&String> = options.keys().collect();
            keys.sort();
            let mut merged: Vec<String> = Vec::new();
            for key in keys {
                for pair in options[key].split(',').filter(|p| !p.trim().is_empty()) {
                    merged.push(format!("{}.{}", key, pair.trim()));
                }
            }
            merged.append(&mut self.option);
            self.option = merged;
        }

        // Performance
        if self.chunk_size.is_none() {
            self.chunk_size = config.chunk_size;
        }
        if self.sequence_chunk_size.is_none() {
            self.sequence_chunk_size = config.sequence_chunk_size;
        }
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.progress && config.progress.unwrap_or(false) {
            self.progress = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_cli_values_win() {
        let args = Args {
            fasta: Some("cli.fa".to_string()),
            threads: Some(2),
            option: vec!["trunc512.offset=32".to_string()],
            ..Args::default()
        };
        let mut options = HashMap::new();
        options.insert("trunc512".to_string(), "offset=8".to_string());
        let config = Config {
            fasta: Some("file.fa".to_string()),
            threads: Some(16),
            out_format: Some("bento-json".to_string()),
            algorithms: Some(vec!["md5".to_string(), "ga4gh".to_string()]),
            options: Some(options),
            progress: Some(true),
            ..Config::new()
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.fasta.as_deref(), Some("cli.fa"));
        assert_eq!(merged.threads, Some(2));
        assert_eq!(merged.out_format.as_deref(), Some("bento-json"));
        assert_eq!(merged.algorithms.as_deref(), Some("md5,ga4gh"));
        assert_eq!(
            merged.option,
            vec!["trunc512.offset=8".to_string(), "trunc512.offset=32".to_string()]
        );
        assert!(merged.progress);
    }
}
