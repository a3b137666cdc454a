//! File-level `diff` and `patch` operations.

use std::fs::File;
use std::path::{Path, PathBuf};

use checksums::read_all_with_fingerprint;
use patch::{FingerprintMismatch, PatchStats, codec};

use crate::error::{EngineError, EngineResult};
use crate::naming::{diff_output_name, patch_output_name};
use crate::options::{DiffOptions, PatchOptions};
use crate::staging::write_atomically;

/// Outcome of [`run_diff`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiffSummary {
    /// Where the patch was written.
    pub output: PathBuf,
    /// Size of the stored patch.
    pub patch_len: usize,
    /// Script summary.
    pub stats: PatchStats,
}

/// Outcome of [`run_patch`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatchSummary {
    /// Where the reconstructed file was written.
    pub output: PathBuf,
    /// Size of the reconstructed file.
    pub output_len: usize,
    /// Set when the base did not match and the apply was forced.
    pub mismatch: Option<FingerprintMismatch>,
}

/// Stored patch bytes plus the script summary, as produced by [`diff_bytes`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodedPatch {
    /// Compressed patch document.
    pub bytes: Vec<u8>,
    /// Script summary.
    pub stats: PatchStats,
}

fn read_file(action: &'static str, path: &Path) -> EngineResult<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|error| EngineError::io(action, path, error))?;
    logging::trace_io!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Builds and encodes a patch turning `base` into `target`.
pub fn diff_bytes(base: &[u8], target: &[u8], options: &DiffOptions) -> EngineResult<EncodedPatch> {
    let patch = patch::build_with(base, target, options.build_options())?;
    let bytes = codec::encode(&patch, options.compression_level())?;
    Ok(EncodedPatch {
        bytes,
        stats: patch.script().stats(),
    })
}

/// Decodes the stored patch and applies it to `base`.
pub fn patch_bytes(base: &[u8], stored: &[u8], force: bool) -> EngineResult<patch::Applied> {
    let patch = codec::decode(stored)?;
    Ok(patch::apply(base, &patch, force)?)
}

/// Writes a patch from `base_path` to `target_path`.
///
/// The base is fingerprinted in the same pass that reads it.
pub fn run_diff(
    base_path: &Path,
    target_path: &Path,
    options: &DiffOptions,
) -> EngineResult<DiffSummary> {
    let file = File::open(base_path)
        .map_err(|error| EngineError::io("open base file", base_path, error))?;
    let (base, fingerprint) = read_all_with_fingerprint(file)
        .map_err(|error| EngineError::io("read base file", base_path, error))?;
    logging::trace_io!(
        "read {} bytes from {} ({})",
        base.len(),
        base_path.display(),
        fingerprint
    );
    let target = read_file("read target file", target_path)?;

    let patch =
        patch::build_with_fingerprint(&base, fingerprint, &target, options.build_options())?;
    let bytes = codec::encode(&patch, options.compression_level())?;

    let output = options
        .output()
        .map_or_else(|| diff_output_name(base_path), Path::to_path_buf);
    write_atomically(&output, &bytes)?;

    let stats = patch.script().stats();
    logging::trace_stats!(
        "wrote {} ({} bytes): {}",
        output.display(),
        bytes.len(),
        stats
    );
    Ok(DiffSummary {
        output,
        patch_len: bytes.len(),
        stats,
    })
}

/// Applies the patch at `patch_path` to `base_path` and writes the result.
///
/// Nothing is written unless the whole apply succeeds.
pub fn run_patch(
    base_path: &Path,
    patch_path: &Path,
    options: &PatchOptions,
) -> EngineResult<PatchSummary> {
    let base = read_file("read base file", base_path)?;
    let stored = read_file("read patch file", patch_path)?;

    let applied = patch_bytes(&base, &stored, options.force_enabled())?;

    let output = options
        .output()
        .map_or_else(|| patch_output_name(base_path), Path::to_path_buf);
    write_atomically(&output, &applied.output)?;

    logging::trace_stats!(
        "wrote {} ({} bytes)",
        output.display(),
        applied.output.len()
    );
    Ok(PatchSummary {
        output,
        output_len: applied.output.len(),
        mismatch: applied.mismatch,
    })
}
