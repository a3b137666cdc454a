#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `align` computes the shortest edit script between two byte sequences: the
//! base (`A`) and the target (`B`). The result is an ordered list of
//! [`Change`] values, each describing a maximal run of deleted base bytes
//! and inserted target bytes anchored at a base offset. Patch construction
//! turns those changes into self-contained edit operations.
//!
//! # Design
//!
//! Alignment runs in two passes:
//!
//! 1. [`diff_runs`] applies Myers' O((N+M)·D) algorithm in its linear-space
//!    form: common prefixes and suffixes are stripped, the "middle snake" of
//!    the remaining region is located by searching forward and backward
//!    simultaneously, and the two halves are solved recursively. The output is
//!    a flat list of [`Run`]s covering both sequences left to right. The
//!    search vectors start empty and grow with the edit distance, so
//!    nearly identical inputs cost little beyond the inputs themselves.
//! 2. [`coalesce`] folds every stretch of deletions and insertions that lies
//!    between two equal runs into one [`Change`].
//!
//! Both passes are deterministic. Common prefixes are always consumed before
//! anything else, so among equal-cost alignments the one matching the
//! earliest common bytes wins, and repeated runs on the same input produce
//! identical output.
//!
//! # Invariants
//!
//! - Changes are sorted by [`Change::base`] and their deleted ranges never
//!   overlap; consecutive changes are separated by at least one equal byte.
//! - No change is empty: each deletes or inserts at least one byte.
//! - The total cost (`deleted + inserted` over all changes) equals the edit
//!   distance between the inputs under insert/delete operations.
//!
//! # Errors
//!
//! Inputs whose combined length exceeds [`AlignerConfig::max_input_len`] are
//! rejected with [`AlignError::ResourceExhausted`] before any work
//! proportional to their size is done.
//!
//! # Examples
//!
//! ```
//! use align::{Change, diff};
//!
//! let changes = diff(b"aaaaXaaaa", b"aaaaYYaaaa").unwrap();
//! assert_eq!(
//!     changes,
//!     vec![Change { base: 4, deleted: 1, target: 4, inserted: 2 }]
//! );
//! ```

mod coalesce;
mod config;
mod error;
mod myers;
mod run;

pub use coalesce::{Change, coalesce};
pub use config::{AlignerConfig, DEFAULT_MAX_INPUT_LEN};
pub use error::AlignError;
pub use run::{Run, RunKind};

/// Computes the raw run list aligning `base` with `target`.
///
/// Adjacent runs of the same kind are merged, but deletions and insertions
/// are reported separately; use [`coalesce`] to pair them into [`Change`]s.
pub fn diff_runs(
    base: &[u8],
    target: &[u8],
    config: &AlignerConfig,
) -> Result<Vec<Run>, AlignError> {
    config.check(base.len(), target.len())?;
    Ok(myers::align(base, target))
}

/// Aligns `base` with `target` using `config` and returns the coalesced changes.
pub fn diff_with(
    base: &[u8],
    target: &[u8],
    config: &AlignerConfig,
) -> Result<Vec<Change>, AlignError> {
    let runs = diff_runs(base, target, config)?;
    let changes = coalesce(&runs);
    logging::trace_align!(
        "aligned {} base bytes with {} target bytes: {} runs, {} changes",
        base.len(),
        target.len(),
        runs.len(),
        changes.len()
    );
    Ok(changes)
}

/// Aligns `base` with `target` using [`AlignerConfig::default`].
pub fn diff(base: &[u8], target: &[u8]) -> Result<Vec<Change>, AlignError> {
    diff_with(base, target, &AlignerConfig::default())
}

/// Sum of deleted and inserted bytes over `changes`.
#[must_use]
pub fn edit_cost(changes: &[Change]) -> usize {
    changes.iter().map(Change::cost).sum()
}
