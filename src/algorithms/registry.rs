// registry.rs - Algorithm registry for managing available checksums

use std::collections::HashMap;
use std::sync::Arc;

use super::options::AlgorithmOptions;
use super::traits::{ChecksumAlgorithm, ConfiguredAlgorithm};
use super::{Ga4ghAlgorithm, Md5Algorithm, Trunc512Algorithm};
use crate::error::{ChecksumError, Result};

/// Algorithms run when none are requested explicitly
pub const DEFAULT_ALGORITHMS: &[&str] = &["md5", "trunc512"];

/// Registry for available checksum algorithms, keyed by lowercase name
pub struct AlgorithmRegistry {
    algorithms: HashMap<String, Arc<dyn ChecksumAlgorithm>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            algorithms: HashMap::new(),
        };

        // Register built-in algorithms
        registry.register(Arc::new(Md5Algorithm));
        registry.register(Arc::new(Trunc512Algorithm));
        registry.register(Arc::new(Ga4ghAlgorithm));

        registry
    }

    /// Register an algorithm under its own name, replacing any previous entry
    pub fn register(&mut self, algorithm: Arc<dyn ChecksumAlgorithm>) {
        self.algorithms.insert(algorithm.key(), algorithm);
    }

    /// Get an algorithm by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<dyn ChecksumAlgorithm>> {
        self.algorithms.get(&name.trim().to_lowercase()).cloned()
    }

    pub fn has_algorithm(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// List `(name, description)` for every algorithm, sorted by name
    pub fn list_algorithms(&self) -> Vec<(&'static str, &'static str)> {
        let mut listed: Vec<_> = self
            .algorithms
            .values()
            .map(|a| (a.name(), a.description()))
            .collect();
        listed.sort();
        listed
    }

    /// Get all registered keys, sorted
    pub fn get_algorithm_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.algorithms.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Resolve names into configured algorithms, in the order given.
    ///
    /// `options` maps a lowercase algorithm key to its option string.
    pub fn resolve(
        &self,
        names: &[String],
        options: &HashMap<String, String>,
    ) -> Result<Vec<ConfiguredAlgorithm>> {
        let mut resolved: Vec<ConfiguredAlgorithm> = Vec::with_capacity(names.len());

        for name in names {
            let algorithm = self
                .get(name)
                .ok_or_else(|| ChecksumError::UnknownAlgorithm(name.clone()))?;

            if resolved.iter().any(|c| c.name() == algorithm.name()) {
                return Err(ChecksumError::Config(format!(
                    "algorithm '{}' requested more than once",
                    algorithm.name()
                )));
            }

            let configured = match options.get(&algorithm.key()) {
                Some(raw) => ConfiguredAlgorithm::with_options(
                    algorithm.clone(),
                    AlgorithmOptions::parse(raw),
                ),
                None => ConfiguredAlgorithm::new(algorithm.clone()),
            };
            algorithm.validate_options(&configured.options)?;
            resolved.push(configured);
        }

        Ok(resolved)
    }

    /// The default MD5 + TRUNC512 pair with default options
    pub fn defaults(&self) -> Result<Vec<ConfiguredAlgorithm>> {
        let names: Vec<String> = DEFAULT_ALGORITHMS.iter().map(|s| s.to_string()).collect();
        self.resolve(&names, &HashMap::new())
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}
