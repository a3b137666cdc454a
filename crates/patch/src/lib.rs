#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `patch` builds, stores and applies integrity-checked binary patches. A
//! [`Patch`] pairs the SHA-256 [`Fingerprint`](checksums::Fingerprint) of the
//! base it was computed against with an [`EditScript`]: an ordered list of
//! [`EditOperation`]s, each dropping a run of base bytes at a location and
//! emitting replacement bytes in its place.
//!
//! # Design
//!
//! - [`build`] aligns base and target with the `align` crate and turns each
//!   change into one operation carrying a literal copy of the target bytes.
//! - [`codec`] stores patches as a small JSON document inside a zlib stream.
//! - [`apply`] verifies the base fingerprint, validates every operation
//!   against the base length, and only then replays the script in a single
//!   forward pass.
//!
//! # Invariants
//!
//! - Operation locations are strictly increasing and deleted ranges never
//!   overlap. [`EditScript::new`] is the only constructor and enforces this.
//! - No operation is empty.
//! - An operation located at `base.len()` is an append.
//! - `apply(A, &build(A, B)?, false)?.output == B`.
//!
//! # Errors
//!
//! [`PatchError`] distinguishes a fingerprint mismatch (the only condition a
//! caller may override with `force`), a [`MalformedPatch`], alignment
//! resource exhaustion, and I/O failures from the serializer or compressor.
//!
//! # Examples
//!
//! ```
//! use compress::zlib::CompressionLevel;
//!
//! let base = b"the quick brown fox";
//! let target = b"the quick red fox!";
//!
//! let bytes = patch::codec::encode(&patch::build(base, target)?, CompressionLevel::Default)?;
//! let restored = patch::codec::decode(&bytes)?;
//! let applied = patch::apply(base, &restored, false)?;
//!
//! assert_eq!(applied.output, target);
//! # Ok::<(), patch::PatchError>(())
//! ```

mod applier;
mod builder;
pub mod codec;
mod error;
mod model;

pub use applier::{Applied, FingerprintMismatch, apply};
pub use builder::{BuildOptions, build, build_with, build_with_fingerprint};
pub use error::{MalformedPatch, PatchError};
pub use model::{EditOperation, EditScript, Patch, PatchStats};
