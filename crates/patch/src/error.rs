use std::io;

use align::AlignError;
use checksums::{Fingerprint, FingerprintLengthError};
use thiserror::Error;

/// Structural problems with a patch.
///
/// Every variant is fatal: unlike a fingerprint mismatch, a malformed patch
/// is never applied, forced or not.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MalformedPatch {
    /// The compressed envelope could not be inflated.
    #[error("patch envelope is not a valid zlib stream: {0}")]
    Envelope(String),
    /// The inflated payload is not a valid patch document.
    #[error("patch document is not valid: {0}")]
    Encoding(String),
    /// A base64 field could not be decoded.
    #[error("operation {index}: insert bytes are not valid base64")]
    InsertEncoding {
        /// Index of the offending operation.
        index: usize,
    },
    /// The fingerprint field is not valid base64.
    #[error("base fingerprint is not valid base64")]
    FingerprintEncoding,
    /// The fingerprint decoded to the wrong number of bytes.
    #[error(transparent)]
    FingerprintLength(#[from] FingerprintLengthError),
    /// A numeric field does not fit the platform's address space.
    #[error("operation {index}: {field} {value} is out of range")]
    NumberOutOfRange {
        /// Index of the offending operation.
        index: usize,
        /// Name of the field.
        field: &'static str,
        /// Decoded value.
        value: u64,
    },
    /// The operation neither deletes nor inserts anything.
    #[error("operation {index} at {location} is empty")]
    EmptyOperation {
        /// Index of the offending operation.
        index: usize,
        /// Its location.
        location: usize,
    },
    /// The operation starts before the previous one ends.
    #[error(
        "operation {index} at {location} starts before the previous operation ends at {previous_end}"
    )]
    OutOfOrder {
        /// Index of the offending operation.
        index: usize,
        /// Its location.
        location: usize,
        /// End of the previous operation's deleted range.
        previous_end: usize,
    },
    /// Two operations share the same location.
    #[error("operations {} and {index} share location {location}", .index.saturating_sub(1))]
    DuplicateLocation {
        /// Index of the second operation.
        index: usize,
        /// The shared location.
        location: usize,
    },
    /// The operation starts past the end of the base.
    #[error("operation {index} at {location} is past the end of a {base_len}-byte base")]
    LocationOutOfBounds {
        /// Index of the offending operation.
        index: usize,
        /// Its location.
        location: usize,
        /// Length of the base.
        base_len: usize,
    },
    /// The operation deletes bytes past the end of the base.
    #[error(
        "operation {index} deletes {delete_count} bytes at {location}, past the end of a {base_len}-byte base"
    )]
    DeleteOutOfBounds {
        /// Index of the offending operation.
        index: usize,
        /// Its location.
        location: usize,
        /// Number of bytes it deletes.
        delete_count: usize,
        /// Length of the base.
        base_len: usize,
    },
}

/// Errors produced while building, decoding or applying a patch.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The base does not hash to the fingerprint recorded in the patch.
    #[error("base fingerprint mismatch: patch expects {expected}, base is {actual}")]
    HashMismatch {
        /// Fingerprint recorded in the patch.
        expected: Fingerprint,
        /// Fingerprint of the supplied base.
        actual: Fingerprint,
    },
    /// The patch is structurally invalid.
    #[error("malformed patch: {0}")]
    Malformed(#[from] MalformedPatch),
    /// The inputs are too large to align.
    #[error(transparent)]
    ResourceExhausted(#[from] AlignError),
    /// Serialization or compression failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PatchError {
    /// Returns `true` for the one error a caller may override with force.
    #[must_use]
    pub const fn is_hash_mismatch(&self) -> bool {
        matches!(self, Self::HashMismatch { .. })
    }
}
