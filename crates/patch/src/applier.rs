//! crates/patch/src/applier.rs
//!
//! Replays a [`Patch`] over a base.

use checksums::Fingerprint;

use crate::error::PatchError;
use crate::model::Patch;

/// Fingerprints involved in a forced apply over the wrong base.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FingerprintMismatch {
    /// Fingerprint recorded in the patch.
    pub expected: Fingerprint,
    /// Fingerprint of the base that was actually patched.
    pub actual: Fingerprint,
}

/// Result of a successful apply.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Applied {
    /// Reconstructed target bytes.
    pub output: Vec<u8>,
    /// Set when the base did not match and the apply was forced.
    pub mismatch: Option<FingerprintMismatch>,
}

impl Applied {
    /// Returns `true` when the base did not match the patch.
    #[must_use]
    pub const fn was_forced(&self) -> bool {
        self.mismatch.is_some()
    }
}

/// Reconstructs the target from `base` and `patch`.
///
/// The base fingerprint is checked first. On a mismatch the apply fails
/// with [`PatchError::HashMismatch`] unless `force` is set, in which case it
/// proceeds and the result carries a [`FingerprintMismatch`]. Every
/// operation is then checked against the base length before any byte is
/// copied, so a malformed patch never yields partial output.
pub fn apply(base: &[u8], patch: &Patch, force: bool) -> Result<Applied, PatchError> {
    let expected = *patch.base_fingerprint();
    let actual = Fingerprint::of(base);

    let mismatch = if expected == actual {
        None
    } else if force {
        tracing::warn!(
            target: "bdelta::apply",
            %expected,
            %actual,
            "base fingerprint mismatch, applying anyway"
        );
        Some(FingerprintMismatch { expected, actual })
    } else {
        return Err(PatchError::HashMismatch { expected, actual });
    };

    let script = patch.script();
    script.check_bounds(base.len())?;

    let stats = script.stats();
    let capacity = (base.len() as u64)
        .saturating_sub(stats.deleted_bytes)
        .saturating_add(stats.inserted_bytes);
    let mut output = Vec::with_capacity(usize::try_from(capacity).unwrap_or(base.len()));

    logging::trace_apply!("replaying {} over {} base bytes", stats, base.len());

    let mut cursor = 0;
    for op in script {
        output.extend_from_slice(&base[cursor..op.location()]);
        output.extend_from_slice(op.insert());
        cursor = op.location() + op.delete_count();
    }
    output.extend_from_slice(&base[cursor..]);

    logging::trace_apply!("reconstructed {} bytes", output.len());
    Ok(Applied { output, mismatch })
}
