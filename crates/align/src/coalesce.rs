//! crates/align/src/coalesce.rs
//!
//! Pairs deletions with insertions that share an anchor.

use std::ops::Range;

use crate::run::{Run, RunKind};

/// A maximal edit between two equal stretches of the alignment.
///
/// The change removes `base[base..base + deleted]` and puts
/// `target[target..target + inserted]` in its place.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Change {
    /// Offset in the base where the change is anchored.
    pub base: usize,
    /// Number of base bytes removed.
    pub deleted: usize,
    /// Offset in the target of the replacement bytes.
    pub target: usize,
    /// Number of target bytes inserted.
    pub inserted: usize,
}

impl Change {
    /// Bytes touched by the change.
    #[must_use]
    pub const fn cost(&self) -> usize {
        self.deleted + self.inserted
    }

    /// Base bytes removed by the change.
    #[must_use]
    pub const fn base_range(&self) -> Range<usize> {
        self.base..self.base + self.deleted
    }

    /// Target bytes inserted by the change.
    #[must_use]
    pub const fn target_range(&self) -> Range<usize> {
        self.target..self.target + self.inserted
    }
}

/// Folds runs into changes.
///
/// Every stretch of delete and insert runs bounded by equal runs (or by the
/// ends of the sequences) becomes one [`Change`] anchored at the position of
/// its first run. Runs must be contiguous and in order, as produced by
/// [`diff_runs`](crate::diff_runs).
#[must_use]
pub fn coalesce(runs: &[Run]) -> Vec<Change> {
    let mut changes = Vec::new();
    let mut pending: Option<Change> = None;

    for run in runs.iter().filter(|run| run.len > 0) {
        match run.kind {
            RunKind::Equal => {
                if let Some(change) = pending.take() {
                    changes.push(change);
                }
            }
            RunKind::Delete | RunKind::Insert => {
                let change = pending.get_or_insert(Change {
                    base: run.base,
                    target: run.target,
                    ..Change::default()
                });
                if run.kind == RunKind::Delete {
                    change.deleted += run.len;
                } else {
                    change.inserted += run.len;
                }
            }
        }
    }

    changes.extend(pending);
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_then_insert_becomes_one_change() {
        let runs = [
            Run::equal(0, 0, 4),
            Run::delete(4, 4, 1),
            Run::insert(5, 4, 2),
            Run::equal(5, 6, 4),
        ];
        assert_eq!(
            coalesce(&runs),
            vec![Change {
                base: 4,
                deleted: 1,
                target: 4,
                inserted: 2,
            }]
        );
    }

    #[test]
    fn equal_runs_separate_changes() {
        let runs = [
            Run::delete(0, 0, 1),
            Run::equal(1, 0, 1),
            Run::insert(2, 1, 3),
        ];
        let changes = coalesce(&runs);
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].base_range(), 0..1);
        assert_eq!(changes[1].target_range(), 1..4);
    }

    #[test]
    fn insert_before_delete_keeps_first_anchor() {
        let runs = [Run::insert(0, 0, 2), Run::delete(0, 2, 3)];
        assert_eq!(
            coalesce(&runs),
            vec![Change {
                base: 0,
                deleted: 3,
                target: 0,
                inserted: 2,
            }]
        );
    }

    #[test]
    fn zero_length_runs_are_ignored() {
        let runs = [
            Run::delete(0, 0, 0),
            Run::equal(0, 0, 3),
            Run::insert(3, 3, 0),
        ];
        assert!(coalesce(&runs).is_empty());
    }

    #[test]
    fn cost_sums_both_sides() {
        let change = Change {
            base: 1,
            deleted: 2,
            target: 3,
            inserted: 4,
        };
        assert_eq!(change.cost(), 6);
    }
}
