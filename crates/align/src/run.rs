//! crates/align/src/run.rs
//!
//! Raw alignment output before coalescing.

use std::ops::Range;

/// Kind of a [`Run`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RunKind {
    /// Bytes present in both sequences.
    Equal,
    /// Base bytes with no counterpart in the target.
    Delete,
    /// Target bytes with no counterpart in the base.
    Insert,
}

/// A contiguous stretch of the alignment.
///
/// `base` and `target` are the positions in each sequence where the run
/// starts. A delete run consumes `len` base bytes and no target bytes; an
/// insert run the opposite; an equal run consumes `len` of each.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Run {
    /// What the run does.
    pub kind: RunKind,
    /// Start offset in the base sequence.
    pub base: usize,
    /// Start offset in the target sequence.
    pub target: usize,
    /// Number of bytes covered.
    pub len: usize,
}

impl Run {
    /// Equal run of `len` bytes.
    #[must_use]
    pub const fn equal(base: usize, target: usize, len: usize) -> Self {
        Self {
            kind: RunKind::Equal,
            base,
            target,
            len,
        }
    }

    /// Deletion of `len` base bytes at `base`.
    #[must_use]
    pub const fn delete(base: usize, target: usize, len: usize) -> Self {
        Self {
            kind: RunKind::Delete,
            base,
            target,
            len,
        }
    }

    /// Insertion of `len` target bytes at `base`.
    #[must_use]
    pub const fn insert(base: usize, target: usize, len: usize) -> Self {
        Self {
            kind: RunKind::Insert,
            base,
            target,
            len,
        }
    }

    /// Base bytes consumed by the run.
    #[must_use]
    pub const fn base_range(&self) -> Range<usize> {
        match self.kind {
            RunKind::Equal | RunKind::Delete => self.base..self.base + self.len,
            RunKind::Insert => self.base..self.base,
        }
    }

    /// Target bytes consumed by the run.
    #[must_use]
    pub const fn target_range(&self) -> Range<usize> {
        match self.kind {
            RunKind::Equal | RunKind::Insert => self.target..self.target + self.len,
            RunKind::Delete => self.target..self.target,
        }
    }

    /// Returns `true` when the run extends `self` without a gap.
    pub(crate) const fn continues(&self, next: &Self) -> bool {
        self.base_range().end == next.base && self.target_range().end == next.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_follow_kind() {
        assert_eq!(Run::equal(2, 3, 4).base_range(), 2..6);
        assert_eq!(Run::equal(2, 3, 4).target_range(), 3..7);
        assert_eq!(Run::delete(2, 3, 4).target_range(), 3..3);
        assert_eq!(Run::insert(2, 3, 4).base_range(), 2..2);
    }

    #[test]
    fn continuation_requires_adjacency() {
        assert!(Run::delete(0, 0, 2).continues(&Run::insert(2, 0, 1)));
        assert!(!Run::delete(0, 0, 2).continues(&Run::insert(3, 0, 1)));
    }
}
