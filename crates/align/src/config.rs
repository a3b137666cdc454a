//! crates/align/src/config.rs
//!
//! Size bound applied before alignment starts.

use crate::error::AlignError;

/// Default bound on the combined length of both inputs (512 MiB).
///
/// The bound limits input size only. The search's own working set is two
/// frontier vectors that grow with the edit distance `D`, about 16 bytes per
/// unit of `D` (up to twice that while a vector is being grown). Identical
/// or nearly identical inputs therefore need almost no extra memory.
pub const DEFAULT_MAX_INPUT_LEN: usize = 512 * 1024 * 1024;

/// Tunables for [`diff_with`](crate::diff_with).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AlignerConfig {
    max_input_len: usize,
}

impl AlignerConfig {
    /// Creates a configuration with the default input bound.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }

    /// Configuration without any input bound.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_input_len: usize::MAX,
        }
    }

    /// Sets the bound on `len(base) + len(target)`.
    #[must_use]
    #[doc(alias = "--max-size")]
    pub const fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Returns the bound on the combined input length.
    #[must_use]
    pub const fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    pub(crate) fn check(&self, base_len: usize, target_len: usize) -> Result<(), AlignError> {
        let len = base_len.saturating_add(target_len);
        if len > self.max_input_len {
            return Err(AlignError::ResourceExhausted {
                len,
                limit: self.max_input_len,
            });
        }
        Ok(())
    }
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self::new()
    }
}
