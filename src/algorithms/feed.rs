// feed.rs - Chunked feeders shared by every algorithm

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use sha2::Sha512;

use crate::error::{ChecksumError, Result};

/// Incremental hash state that accepts bytes in source order
pub trait HashState {
    fn update(&mut self, chunk: &[u8]);
}

impl HashState for md5::Context {
    fn update(&mut self, chunk: &[u8]) {
        self.consume(chunk);
    }
}

impl HashState for Sha512 {
    fn update(&mut self, chunk: &[u8]) {
        sha2::Digest::update(self, chunk);
    }
}

/// Feed a whole file into `state`, `chunk_size` bytes at a time.
///
/// Only a zero-byte read ends the loop. The file handle is released when this
/// function returns, on success or error.
pub fn update_hash_from_file<H: HashState>(
    mut state: H,
    path: &Path,
    chunk_size: usize,
) -> Result<H> {
    let mut file = File::open(path).map_err(|e| ChecksumError::io(path, e))?;
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => state.update(&buffer[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ChecksumError::io(path, e)),
        }
    }

    Ok(state)
}

/// Drain a chunk producer into `state`, stopping at the first error
pub fn update_hash_from_sequence<H, I>(mut state: H, sequence: I) -> Result<H>
where
    H: HashState,
    I: Iterator<Item = Result<Vec<u8>>>,
{
    for chunk in sequence {
        state.update(&chunk?);
    }
    Ok(state)
}
