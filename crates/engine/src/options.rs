//! Configuration for the diff and patch workflows.

use std::path::{Path, PathBuf};

use compress::zlib::CompressionLevel;
use patch::BuildOptions;

/// Options controlling [`run_diff`](crate::run_diff).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DiffOptions {
    output: Option<PathBuf>,
    compression_level: CompressionLevel,
    build: BuildOptions,
}

impl DiffOptions {
    /// Creates options with default naming, compression and size bound.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: None,
            compression_level: CompressionLevel::Default,
            build: BuildOptions::new(),
        }
    }

    /// Writes the patch to `path` instead of the derived default name.
    #[must_use]
    #[doc(alias = "--out")]
    #[doc(alias = "-o")]
    pub fn with_output<P: Into<PathBuf>>(mut self, path: Option<P>) -> Self {
        self.output = path.map(Into::into);
        self
    }

    /// Selects the zlib level for the patch envelope.
    #[must_use]
    #[doc(alias = "--compress-level")]
    pub const fn with_compression_level(mut self, level: CompressionLevel) -> Self {
        self.compression_level = level;
        self
    }

    /// Bounds the combined size of base and target.
    #[must_use]
    #[doc(alias = "--max-size")]
    pub const fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.build = self.build.max_input_len(max_input_len);
        self
    }

    /// Returns the explicit output path, if any.
    #[must_use]
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Returns the envelope compression level.
    #[must_use]
    pub const fn compression_level(&self) -> CompressionLevel {
        self.compression_level
    }

    /// Returns the patch builder options.
    #[must_use]
    pub const fn build_options(&self) -> &BuildOptions {
        &self.build
    }
}

/// Options controlling [`run_patch`](crate::run_patch).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PatchOptions {
    output: Option<PathBuf>,
    force: bool,
}

impl PatchOptions {
    /// Creates options with default naming and integrity checking enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: None,
            force: false,
        }
    }

    /// Writes the result to `path` instead of the derived default name.
    #[must_use]
    #[doc(alias = "--out")]
    #[doc(alias = "-o")]
    pub fn with_output<P: Into<PathBuf>>(mut self, path: Option<P>) -> Self {
        self.output = path.map(Into::into);
        self
    }

    /// Applies the patch even when the base fingerprint does not match.
    #[must_use]
    #[doc(alias = "--force")]
    #[doc(alias = "-f")]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Returns the explicit output path, if any.
    #[must_use]
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Returns whether fingerprint mismatches are overridden.
    #[must_use]
    pub const fn force_enabled(&self) -> bool {
        self.force
    }
}
