// config.rs - Configuration file support

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ChecksumError, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub fasta: Option<String>,
    pub fai: Option<String>,
    pub genome_id: Option<String>,
    pub out_format: Option<String>,

    // Algorithms
    pub algorithms: Option<Vec<String>>,
    /// Option strings per algorithm key, e.g. `trunc512 = "offset=32"`
    pub options: Option<HashMap<String, String>>,

    // Performance
    pub chunk_size: Option<usize>,
    pub sequence_chunk_size: Option<u64>,
    pub threads: Option<usize>,

    // Flags
    pub progress: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ChecksumError::io(path, e))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ChecksumError::Config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| ChecksumError::Config(format!("failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| ChecksumError::io(path, e))?;

        info!("Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# fasta-checksum.toml - Configuration file for fasta-checksum
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# FASTA file to checksum
fasta = "/path/to/genome.fa"

# FASTA index; defaults to <fasta>.fai, computed in memory when missing
# fai = "/path/to/genome.fa.fai"

# Genome ID included in bento-json output
# genome_id = "GRCh38"

# Output format: text, bento-json
out_format = "text"

# =============================================================================
# ALGORITHMS
# =============================================================================

# Checksum algorithms, in output order: md5, trunc512, ga4gh
algorithms = ["md5", "trunc512"]

# Per-algorithm options
[options]
# Bytes of the SHA-512 digest to keep (default 24, values above 64 keep all)
trunc512 = "offset=24"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.fasta.as_deref(), Some("/path/to/genome.fa"));
        assert_eq!(config.out_format.as_deref(), Some("text"));
        assert_eq!(
            config.algorithms,
            Some(vec!["md5".to_string(), "trunc512".to_string()])
        );
        let options = config.options.unwrap();
        assert_eq!(options.get("trunc512").map(|s| s.as_str()), Some("offset=24"));
        assert!(config.threads.is_none());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            fasta: Some("genome.fa".to_string()),
            threads: Some(4),
            progress: Some(true),
            ..Config::new()
        };
        config.to_file(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "threads = \"many\"").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ChecksumError::Config(_))
        ));
    }
}
