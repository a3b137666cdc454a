//! crates/checksums/src/reader.rs
//!
//! Hash-while-reading adapter.

use std::io::{self, Read};

use crate::fingerprint::Fingerprint;
use crate::strong::{Sha256, StrongDigest};

/// Reader adapter that feeds every byte it yields into a SHA-256 hasher.
///
/// Only bytes actually returned to the caller are hashed, so the resulting
/// [`Fingerprint`] always matches the consumed data exactly.
#[derive(Debug)]
pub struct HashingReader<R> {
    inner: R,
    hasher: Sha256,
    bytes_read: u64,
}

impl<R: Read> HashingReader<R> {
    /// Wraps `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
            bytes_read: 0,
        }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub const fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Finishes hashing and returns the fingerprint together with the inner reader.
    pub fn finish(self) -> (Fingerprint, R) {
        (Fingerprint::from_bytes(self.hasher.finalize()), self.inner)
    }
}

impl<R: Read> Read for HashingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.hasher.update(&buf[..read]);
        self.bytes_read = self.bytes_read.saturating_add(read as u64);
        Ok(read)
    }
}

/// Reads `reader` to the end, returning its bytes and their fingerprint.
///
/// Hashing happens in the same pass that fills the buffer.
pub fn read_all_with_fingerprint<R: Read>(reader: R) -> io::Result<(Vec<u8>, Fingerprint)> {
    let mut hashing = HashingReader::new(reader);
    let mut bytes = Vec::new();
    hashing.read_to_end(&mut bytes)?;
    let (fingerprint, _) = hashing.finish();
    Ok((bytes, fingerprint))
}
