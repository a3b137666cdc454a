//! crates/patch/src/builder.rs
//!
//! Turns a (base, target) pair into a [`Patch`].

use align::{AlignerConfig, Change};
use checksums::Fingerprint;

use crate::error::PatchError;
use crate::model::{EditOperation, EditScript, Patch};

/// Options for [`build_with`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BuildOptions {
    aligner: AlignerConfig,
}

impl BuildOptions {
    /// Options with the default aligner bound.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            aligner: AlignerConfig::new(),
        }
    }

    /// Replaces the aligner configuration.
    #[must_use]
    pub const fn aligner(mut self, aligner: AlignerConfig) -> Self {
        self.aligner = aligner;
        self
    }

    /// Sets the bound on the combined input length.
    #[must_use]
    #[doc(alias = "--max-size")]
    pub const fn max_input_len(mut self, max_input_len: usize) -> Self {
        self.aligner = self.aligner.with_max_input_len(max_input_len);
        self
    }

    /// Returns the aligner configuration.
    #[must_use]
    pub const fn aligner_config(&self) -> &AlignerConfig {
        &self.aligner
    }
}

/// Builds a patch turning `base` into `target` with default options.
pub fn build(base: &[u8], target: &[u8]) -> Result<Patch, PatchError> {
    build_with(base, target, &BuildOptions::default())
}

/// Builds a patch turning `base` into `target`.
pub fn build_with(base: &[u8], target: &[u8], options: &BuildOptions) -> Result<Patch, PatchError> {
    build_with_fingerprint(base, Fingerprint::of(base), target, options)
}

/// Builds a patch using a fingerprint the caller already computed over
/// exactly `base`.
pub fn build_with_fingerprint(
    base: &[u8],
    base_fingerprint: Fingerprint,
    target: &[u8],
    options: &BuildOptions,
) -> Result<Patch, PatchError> {
    let changes = align::diff_with(base, target, &options.aligner)?;
    let operations = changes
        .iter()
        .map(|change| operation_for(change, target))
        .collect();
    let script = EditScript::new(operations)?;

    let stats = script.stats();
    logging::trace_build!(
        "built patch against {}: {}",
        base_fingerprint,
        stats
    );
    Ok(Patch::new(base_fingerprint, script))
}

fn operation_for(change: &Change, target: &[u8]) -> EditOperation {
    EditOperation::new(
        change.base,
        change.deleted,
        target[change.target_range()].to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_build_identity_patch() {
        let patch = build(b"unchanged", b"unchanged").unwrap();
        assert!(patch.is_identity());
        assert_eq!(*patch.base_fingerprint(), Fingerprint::of(b"unchanged"));
    }

    #[test]
    fn substitution_is_one_operation() {
        let patch = build(b"aaaaXaaaa", b"aaaaYYaaaa").unwrap();
        assert_eq!(
            patch.script().operations(),
            &[EditOperation::new(4, 1, b"YY".to_vec())]
        );
    }

    #[test]
    fn empty_base_is_single_insert() {
        let patch = build(b"", b"fresh").unwrap();
        assert_eq!(
            patch.script().operations(),
            &[EditOperation::new(0, 0, b"fresh".to_vec())]
        );
    }

    #[test]
    fn empty_target_is_single_delete() {
        let patch = build(b"stale", b"").unwrap();
        assert_eq!(
            patch.script().operations(),
            &[EditOperation::new(0, 5, Vec::new())]
        );
    }

    #[test]
    fn size_bound_surfaces_as_resource_exhausted() {
        let options = BuildOptions::new().max_input_len(4);
        let err = build_with(b"abc", b"def", &options).unwrap_err();
        assert!(matches!(err, PatchError::ResourceExhausted(_)));
    }

    #[test]
    fn supplied_fingerprint_is_recorded() {
        let fingerprint = Fingerprint::of(b"elsewhere");
        let patch =
            build_with_fingerprint(b"a", fingerprint, b"b", &BuildOptions::default()).unwrap();
        assert_eq!(*patch.base_fingerprint(), fingerprint);
    }
}
