// options.rs - Open-ended per-algorithm options

use std::collections::HashMap;

use crate::error::{ChecksumError, Result};

/// Algorithm-specific settings as raw `key=value` pairs.
///
/// Each algorithm documents the keys it reads and their defaults; keys it
/// does not know are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgorithmOptions {
    values: HashMap<String, String>,
}

impl AlgorithmOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration string like `offset=32,foo=bar`
    pub fn parse(config_str: &str) -> Self {
        let mut options = Self::new();
        options.merge_str(config_str);
        options
    }

    /// Add pairs from a configuration string, overwriting existing keys
    pub fn merge_str(&mut self, config_str: &str) {
        for pair in config_str.split(',') {
            let parts: Vec<&str> = pair.splitn(2, '=').collect();
            if parts.len() == 2 && !parts[0].trim().is_empty() {
                self.set(parts[0].trim(), parts[1].trim());
            }
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read an unsigned integer option, falling back to `default` when absent
    pub fn get_usize(&self, algorithm: &str, key: &str, default: usize) -> Result<usize> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.parse::<usize>().map_err(|e| ChecksumError::InvalidOption {
                algorithm: algorithm.to_string(),
                key: key.to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
