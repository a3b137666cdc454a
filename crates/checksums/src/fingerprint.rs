use std::fmt;

use thiserror::Error;

use crate::strong::{Sha256, StrongDigest};

/// Number of bytes in a [`Fingerprint`].
pub const FINGERPRINT_LEN: usize = <Sha256 as StrongDigest>::DIGEST_LEN;

/// SHA-256 digest identifying the exact base content a patch expects.
///
/// Rendered as lowercase hexadecimal by [`Display`](fmt::Display).
///
/// # Examples
///
/// ```
/// use checksums::Fingerprint;
///
/// let fingerprint = Fingerprint::of(b"abc");
/// assert_eq!(
///     fingerprint.to_string(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// assert_eq!(Fingerprint::from_slice(fingerprint.as_bytes()), Ok(fingerprint));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Wraps a raw digest.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a fingerprint from a slice that must hold exactly
    /// [`FINGERPRINT_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FingerprintLengthError> {
        <[u8; FINGERPRINT_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| FingerprintLengthError { len: bytes.len() })
    }

    /// Hashes `data` in one shot.
    #[must_use]
    pub fn of(data: &[u8]) -> Self {
        Self(Sha256::digest(data))
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }
}

impl From<[u8; FINGERPRINT_LEN]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({self})")
    }
}

/// Error returned when a fingerprint is decoded from a slice of the wrong width.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("fingerprint requires {expected} bytes, received {len}", expected = FINGERPRINT_LEN)]
pub struct FingerprintLengthError {
    len: usize,
}

impl FingerprintLengthError {
    /// Number of bytes the caller supplied.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Reports whether the supplied slice was empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}
