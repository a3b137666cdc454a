//! Default output file names.
//!
//! Only the final component of the base path is used, so outputs land in
//! the current directory regardless of where the inputs live.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Extension appended to patch files.
pub const PATCH_SUFFIX: &str = ".patch";

/// Prefix used when a patched file's name cannot be derived by stripping
/// [`PATCH_SUFFIX`].
pub const PATCHED_PREFIX: &str = "[PATCHED]";

fn file_name(base: &Path) -> &OsStr {
    base.file_name().unwrap_or_else(|| base.as_os_str())
}

/// Name of the patch written by `diff` for `base`: `<name>.patch`.
#[must_use]
pub fn diff_output_name(base: &Path) -> PathBuf {
    let mut name = OsString::from(file_name(base));
    name.push(PATCH_SUFFIX);
    PathBuf::from(name)
}

/// Name of the file written by `patch` for `base`.
///
/// A trailing `.patch` is removed; otherwise `[PATCHED]` is prepended. A
/// name that is nothing but `.patch` is prefixed rather than emptied.
#[must_use]
pub fn patch_output_name(base: &Path) -> PathBuf {
    let name = file_name(base);
    if let Some(stem) = name
        .to_str()
        .and_then(|text| text.strip_suffix(PATCH_SUFFIX))
        .filter(|stem| !stem.is_empty())
    {
        return PathBuf::from(stem);
    }
    let mut prefixed = OsString::from(PATCHED_PREFIX);
    prefixed.push(name);
    PathBuf::from(prefixed)
}
