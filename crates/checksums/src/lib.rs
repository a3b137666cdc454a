#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `checksums` provides the integrity primitives used by bdelta patches. Every
//! patch records the SHA-256 digest of the base file it was computed against,
//! and the applier recomputes that digest before replaying any edit so stale
//! or mismatched base files are detected.
//!
//! # Design
//!
//! - [`strong::Sha256`] is a streaming hasher implementing the shared
//!   [`strong::StrongDigest`] trait.
//! - [`Fingerprint`] is the 32-byte value type stored inside patches.
//! - [`HashingReader`] wraps any [`std::io::Read`] and hashes bytes as they
//!   are consumed, so a single read pass yields both the file contents and
//!   their fingerprint.
//!
//! # Examples
//!
//! ```
//! use checksums::{Fingerprint, read_all_with_fingerprint};
//!
//! let (bytes, fingerprint) = read_all_with_fingerprint(&b"base file"[..]).unwrap();
//! assert_eq!(bytes, b"base file");
//! assert_eq!(fingerprint, Fingerprint::of(b"base file"));
//! ```

mod fingerprint;
mod reader;
pub mod strong;

pub use fingerprint::{FINGERPRINT_LEN, Fingerprint, FingerprintLengthError};
pub use reader::{HashingReader, read_all_with_fingerprint};
