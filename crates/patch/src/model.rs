//! crates/patch/src/model.rs
//!
//! In-memory patch representation.
//!
//! An [`EditScript`] can only be constructed through [`EditScript::new`],
//! which enforces the ordering rules, so every script in memory is ordered
//! and free of empty operations. Bounds against a concrete base are checked
//! separately by [`EditScript::check_bounds`] because the base length is only
//! known at apply time.

use std::fmt;

use checksums::Fingerprint;

use crate::error::MalformedPatch;

/// One change anchored at a base offset.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct EditOperation {
    location: usize,
    delete_count: usize,
    insert: Vec<u8>,
}

impl EditOperation {
    /// Creates an operation that drops `delete_count` base bytes at
    /// `location` and emits `insert` in their place.
    #[must_use]
    pub const fn new(location: usize, delete_count: usize, insert: Vec<u8>) -> Self {
        Self {
            location,
            delete_count,
            insert,
        }
    }

    /// Base offset where the operation starts.
    #[must_use]
    pub const fn location(&self) -> usize {
        self.location
    }

    /// Number of base bytes dropped.
    #[must_use]
    pub const fn delete_count(&self) -> usize {
        self.delete_count
    }

    /// Bytes emitted in place of the deleted range.
    #[must_use]
    pub fn insert(&self) -> &[u8] {
        &self.insert
    }

    /// Returns `true` when the operation neither deletes nor inserts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delete_count == 0 && self.insert.is_empty()
    }

    /// First base offset after the deleted range, or `None` on overflow.
    #[must_use]
    pub const fn deleted_end(&self) -> Option<usize> {
        self.location.checked_add(self.delete_count)
    }
}

/// Ordered, validated list of [`EditOperation`]s.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct EditScript {
    operations: Vec<EditOperation>,
}

impl EditScript {
    /// Validates ordering and wraps `operations`.
    ///
    /// Locations must be strictly increasing, each operation must start at or
    /// after the end of the previous deleted range, and no operation may be
    /// empty.
    pub fn new(operations: Vec<EditOperation>) -> Result<Self, MalformedPatch> {
        let mut previous: Option<(usize, usize)> = None;

        for (index, op) in operations.iter().enumerate() {
            if op.is_empty() {
                return Err(MalformedPatch::EmptyOperation {
                    index,
                    location: op.location,
                });
            }
            if let Some((location, end)) = previous {
                if op.location == location {
                    return Err(MalformedPatch::DuplicateLocation {
                        index,
                        location,
                    });
                }
                if op.location < end {
                    return Err(MalformedPatch::OutOfOrder {
                        index,
                        location: op.location,
                        previous_end: end,
                    });
                }
            }
            let end = op
                .deleted_end()
                .ok_or(MalformedPatch::DeleteOutOfBounds {
                    index,
                    location: op.location,
                    delete_count: op.delete_count,
                    base_len: usize::MAX,
                })?;
            previous = Some((op.location, end));
        }

        Ok(Self { operations })
    }

    /// A script with no operations.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Operations in replay order.
    #[must_use]
    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` when the script has no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Checks every operation against a base of `base_len` bytes.
    pub fn check_bounds(&self, base_len: usize) -> Result<(), MalformedPatch> {
        for (index, op) in self.operations.iter().enumerate() {
            if op.location > base_len {
                return Err(MalformedPatch::LocationOutOfBounds {
                    index,
                    location: op.location,
                    base_len,
                });
            }
            match op.deleted_end() {
                Some(end) if end <= base_len => {}
                _ => {
                    return Err(MalformedPatch::DeleteOutOfBounds {
                        index,
                        location: op.location,
                        delete_count: op.delete_count,
                        base_len,
                    });
                }
            }
        }
        Ok(())
    }

    /// Operation count and byte totals.
    #[must_use]
    pub fn stats(&self) -> PatchStats {
        self.operations
            .iter()
            .fold(PatchStats::default(), |mut stats, op| {
                stats.operations += 1;
                stats.deleted_bytes += op.delete_count as u64;
                stats.inserted_bytes += op.insert.len() as u64;
                stats
            })
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOperation;
    type IntoIter = std::slice::Iter<'a, EditOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

/// Summary of an [`EditScript`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PatchStats {
    /// Number of operations.
    pub operations: usize,
    /// Total base bytes deleted.
    pub deleted_bytes: u64,
    /// Total bytes inserted.
    pub inserted_bytes: u64,
}

impl fmt::Display for PatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} operations, {} bytes deleted, {} bytes inserted",
            self.operations, self.deleted_bytes, self.inserted_bytes
        )
    }
}

/// Base fingerprint plus the script that turns that base into the target.
///
/// Patches are immutable once built.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Patch {
    base_fingerprint: Fingerprint,
    script: EditScript,
}

impl Patch {
    /// Pairs a fingerprint with a validated script.
    #[must_use]
    pub const fn new(base_fingerprint: Fingerprint, script: EditScript) -> Self {
        Self {
            base_fingerprint,
            script,
        }
    }

    /// SHA-256 of the base the patch was computed against.
    #[must_use]
    pub const fn base_fingerprint(&self) -> &Fingerprint {
        &self.base_fingerprint
    }

    /// The edit script.
    #[must_use]
    pub const fn script(&self) -> &EditScript {
        &self.script
    }

    /// Returns `true` when applying the patch reproduces the base unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.script.is_empty()
    }
}
