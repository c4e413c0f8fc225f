// error.rs - Crate error type

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChecksumError>;

#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot index FASTA file '{}': {message}", path.display())]
    Index { path: PathBuf, message: String },

    #[error("unknown record '{0}'")]
    UnknownRecord(String),

    #[error("failed to fetch {record}:{start}-{end}: {source}")]
    Fetch {
        record: String,
        start: u64,
        end: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("record '{record}' contains non-ASCII content near base {offset}")]
    NonAscii { record: String, offset: u64 },

    #[error("unknown checksum algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("invalid option '{key}={value}' for {algorithm}: {reason}")]
    InvalidOption {
        algorithm: String,
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ChecksumError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChecksumError::Io {
            path: path.into(),
            source,
        }
    }
}
