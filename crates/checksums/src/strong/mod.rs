//! crates/checksums/src/strong/mod.rs
//!
//! Strong (cryptographic) digests.

mod sha256;

pub use sha256::Sha256;

/// Common interface for streaming strong digests.
///
/// Implementors accumulate input through [`update`](Self::update) and produce
/// a fixed-width digest from [`finalize`](Self::finalize).
pub trait StrongDigest: Sized {
    /// Fixed-size digest produced by the hasher.
    type Digest: AsRef<[u8]> + Copy + Eq;

    /// Width of [`Self::Digest`] in bytes.
    const DIGEST_LEN: usize;

    /// Creates a hasher with an empty state.
    fn new() -> Self;

    /// Feeds additional bytes into the digest state.
    fn update(&mut self, data: &[u8]);

    /// Consumes the hasher and returns the digest.
    fn finalize(self) -> Self::Digest;

    /// Computes the digest of `data` in one shot.
    fn digest(data: &[u8]) -> Self::Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}
